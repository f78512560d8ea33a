// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure of an aggregation step. A single malformed record fails the whole
/// computation; partial aggregates are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid date '{value}' on transaction {id}, expected YYYY-MM-DD")]
    InvalidDate { id: String, value: String },

    #[error("negative amount {amount} on transaction {id}")]
    NegativeAmount { id: String, amount: Decimal },

    #[error("unknown transaction kind '{0}', expected income, expense or all")]
    UnknownKind(String),

    #[error("unknown sort order '{0}', expected asc or desc")]
    UnknownSortOrder(String),
}
