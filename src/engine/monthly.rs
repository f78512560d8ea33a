// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{check_amount, month_index, tx_date, EngineError};
use crate::models::{Transaction, TxKind};

/// Income and expense sums for one calendar month. `month0` indexes the
/// month-name table: 0 is January, 11 is December.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month0: u32,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Buckets transactions by calendar month and sums each kind. Buckets are
/// keyed by month index only: January of one year and January of another
/// share a bucket. Output carries one entry per month actually present,
/// ordered by month index; an empty input yields an empty series.
pub fn monthly_totals(transactions: &[Transaction]) -> Result<Vec<MonthlyTotal>, EngineError> {
    let mut buckets: BTreeMap<u32, (Decimal, Decimal)> = BTreeMap::new();

    for tx in transactions {
        check_amount(tx)?;
        let month = month_index(tx_date(tx)?);
        let slot = buckets.entry(month).or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => slot.0 += tx.amount,
            TxKind::Expense => slot.1 += tx.amount,
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(month0, (income, expenses))| MonthlyTotal {
            month0,
            income,
            expenses,
        })
        .collect())
}
