// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Direction of a money movement. The server emits both `INCOME` and
/// `income` spellings depending on the endpoint, so deserialization is
/// case-insensitive; serialization always uses the upper-case tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "INCOME",
            TxKind::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Income => "Income",
            TxKind::Expense => "Expense",
        }
    }
}

impl Serialize for TxKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TxKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TxKind::Income),
            "EXPENSE" => Ok(TxKind::Expense),
            other => Err(de::Error::unknown_variant(other, &["INCOME", "EXPENSE"])),
        }
    }
}

/// A single dated money movement. `amount` is always non-negative; the
/// direction is carried by `kind`. The date stays a wire string here and is
/// parsed inside the engine, so a malformed date fails the computation that
/// touches it rather than the fetch that delivered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub description: String,
    pub date: String, // YYYY-MM-DD
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub description: String,
    pub date: String,
}

/// A recurring monthly obligation with a due day-of-month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedExpense {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub due_date: u32, // day of month, 1-31
    pub category: String,
    pub status: String, // ACTIVE, INACTIVE
}

impl FixedExpense {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("ACTIVE")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedExpense {
    pub name: String,
    pub amount: Decimal,
    pub due_date: u32,
    pub category: String,
    pub status: String,
}

/// A savings target with current progress. `current_savings` may exceed
/// `target_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    #[serde(default)]
    pub icon_name: Option<String>,
    pub status: String, // ACTIVE, COMPLETED, DELETED
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    pub status: String,
}

/// A stored report record on the server side. The numbers themselves are
/// recomputed locally by the engine; this entity only names and files them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String, // EXPENSE, INCOME, CATEGORY_WISE, ...
    pub start_date: String,
    pub end_date: String,
    pub timeframe: String, // DAILY, WEEKLY, MONTHLY, YEARLY
    #[serde(default)]
    pub categories: Option<String>, // comma-separated
    pub total_amount: Decimal,
    pub status: String, // GENERATED, PENDING, ...
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub start_date: String,
    pub end_date: String,
    pub timeframe: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    pub total_amount: Decimal,
    pub status: String,
}

/// Singleton per-user settings resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub email_notifications: Option<bool>,
    #[serde(default)]
    pub push_notifications: Option<bool>,
    #[serde(default)]
    pub budgeting_frequency: Option<String>, // MONTHLY, YEARLY
    #[serde(default)]
    pub default_view: Option<String>, // DASHBOARD, TRANSACTIONS, ...
}
