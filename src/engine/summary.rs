// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::categories::{expenses_by_category, top_category, CategoryTotal};
use super::{check_amount, tx_date, EngineError};
use crate::models::{Transaction, TxKind};

/// A calendar month/year window. The "current" period is always supplied by
/// the caller, so summaries stay deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32, // 1-12
}

impl Period {
    pub fn containing(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_income: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
    /// `None` when the period holds no expenses; rendered as "None".
    pub top_expense_category: Option<String>,
}

/// Summarizes the transactions falling inside `period`: income and expense
/// totals, net income (possibly negative), the per-category expense
/// breakdown, and the top expense category.
pub fn period_summary(
    transactions: &[Transaction],
    period: Period,
) -> Result<PeriodSummary, EngineError> {
    let mut in_period: Vec<Transaction> = Vec::new();
    for tx in transactions {
        check_amount(tx)?;
        if period.contains(tx_date(tx)?) {
            in_period.push(tx.clone());
        }
    }

    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for tx in &in_period {
        match tx.kind {
            TxKind::Income => total_income += tx.amount,
            TxKind::Expense => total_expenses += tx.amount,
        }
    }

    let expenses_by_category = expenses_by_category(&in_period)?;
    let top_expense_category = top_category(&expenses_by_category).map(|c| c.category.clone());

    Ok(PeriodSummary {
        period,
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        expenses_by_category,
        top_expense_category,
    })
}
