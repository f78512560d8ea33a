// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{check_amount, EngineError};
use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Sums expense amounts per category label. Entries keep the order in which
/// a category is first encountered, and only categories actually present
/// appear; there is no zero-filling. Income transactions are ignored.
pub fn expenses_by_category(transactions: &[Transaction]) -> Result<Vec<CategoryTotal>, EngineError> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in transactions {
        check_amount(tx)?;
        if tx.kind != TxKind::Expense {
            continue;
        }
        match totals.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.total += tx.amount,
            None => totals.push(CategoryTotal {
                category: tx.category.clone(),
                total: tx.amount,
            }),
        }
    }

    Ok(totals)
}

/// The category with the largest summed expense. Ties keep the earlier
/// entry, which is the first-encountered category. `None` when the slice is
/// empty.
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    let mut top: Option<&CategoryTotal> = None;
    for entry in totals {
        match top {
            Some(current) if entry.total <= current.total => {}
            _ => top = Some(entry),
        }
    }
    top
}
