// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use super::categories::{expenses_by_category, CategoryTotal};
use super::monthly::monthly_totals;
use super::EngineError;
use crate::models::Transaction;

/// One row of the report chart: a month with its income, expenses, and that
/// month's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub month0: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialReport {
    pub rows: Vec<ReportRow>,
    pub categories: Vec<CategoryTotal>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

/// Builds the full report view over a transaction set: the monthly series
/// with per-month balance, the expense category breakdown, and the overall
/// totals. Windowing (last 3/6/12 months) is the caller's job; it hands in
/// an already-scoped transaction list.
pub fn financial_report(transactions: &[Transaction]) -> Result<FinancialReport, EngineError> {
    let months = monthly_totals(transactions)?;
    let categories = expenses_by_category(transactions)?;

    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let rows = months
        .into_iter()
        .map(|m| {
            total_income += m.income;
            total_expenses += m.expenses;
            ReportRow {
                month0: m.month0,
                income: m.income,
                expenses: m.expenses,
                balance: m.income - m.expenses,
            }
        })
        .collect();

    Ok(FinancialReport {
        rows,
        categories,
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    })
}
