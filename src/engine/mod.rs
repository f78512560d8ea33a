// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The aggregation engine: pure, synchronous transformations of fetched
//! records into the derived views the dashboard renders. No I/O happens
//! here; every function is deterministic in its inputs and recomputes from
//! scratch, so there is nothing to invalidate when the underlying
//! collection changes.

pub mod categories;
pub mod error;
pub mod goals;
pub mod monthly;
pub mod pipeline;
pub mod report;
pub mod summary;

pub use categories::{expenses_by_category, top_category, CategoryTotal};
pub use error::EngineError;
pub use goals::{goal_progress, goal_standing, GoalStanding};
pub use monthly::{monthly_totals, MonthlyTotal};
pub use pipeline::{group_by_date, paginate, DateGroup, KindFilter, Page, SortOrder, TransactionQuery};
pub use report::{financial_report, FinancialReport, ReportRow};
pub use summary::{period_summary, Period, PeriodSummary};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Parses a transaction's wire date, naming the offending record on failure.
pub(crate) fn tx_date(tx: &Transaction) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(&tx.date, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        id: tx.id.clone(),
        value: tx.date.clone(),
    })
}

/// Direction lives in the kind, never in the sign of the amount.
pub(crate) fn check_amount(tx: &Transaction) -> Result<(), EngineError> {
    if tx.amount < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            id: tx.id.clone(),
            amount: tx.amount,
        });
    }
    Ok(())
}

/// Zero-based calendar month index of a parsed transaction date.
pub(crate) fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}
