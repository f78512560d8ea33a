// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::{check_amount, tx_date, EngineError};
use crate::models::{Transaction, TxKind};

/// Kind dimension of the listing filter. `All` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn keeps(&self, kind: TxKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TxKind::Income,
            KindFilter::Expense => kind == TxKind::Expense,
        }
    }
}

impl FromStr for KindFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "income" => Ok(KindFilter::Income),
            "expense" => Ok(KindFilter::Expense),
            other => Err(EngineError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(EngineError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// The composable listing filter. Filters apply in a fixed order: exact
/// date, free text over description and category, then kind; the survivors
/// are date-sorted with a stable sort, so same-date transactions keep their
/// input order.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
    pub kind: KindFilter,
    pub order: SortOrder,
}

impl TransactionQuery {
    pub fn apply(&self, transactions: &[Transaction]) -> Result<Vec<Transaction>, EngineError> {
        // Validate the whole input up front; one bad record fails the run.
        let mut rows: Vec<(NaiveDate, Transaction)> = Vec::with_capacity(transactions.len());
        for tx in transactions {
            check_amount(tx)?;
            rows.push((tx_date(tx)?, tx.clone()));
        }

        if let Some(wanted) = self.date {
            rows.retain(|(date, _)| *date == wanted);
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            rows.retain(|(_, tx)| {
                tx.description.to_lowercase().contains(&term)
                    || tx.category.to_lowercase().contains(&term)
            });
        }
        rows.retain(|(_, tx)| self.kind.keeps(tx.kind));

        match self.order {
            SortOrder::Asc => rows.sort_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Desc => rows.sort_by(|a, b| b.0.cmp(&a.0)),
        }

        Ok(rows.into_iter().map(|(_, tx)| tx).collect())
    }
}

/// Transactions sharing one exact wire date.
#[derive(Debug, Clone, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub transactions: Vec<Transaction>,
}

/// Partitions a date-sorted listing into per-date groups, keyed by the exact
/// date string. Group order follows the input order.
pub fn group_by_date(transactions: &[Transaction]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for tx in transactions {
        match groups.last_mut() {
            Some(current) if current.date == tx.date => current.transactions.push(tx.clone()),
            _ => groups.push(DateGroup {
                date: tx.date.clone(),
                transactions: vec![tx.clone()],
            }),
        }
    }

    groups
}

/// One page of date groups. `page` is 1-based and already clamped.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub groups: Vec<DateGroup>,
    pub page: usize,
    pub total_pages: usize,
}

/// Slices date groups into fixed-size pages. Out-of-range page numbers clamp
/// to the nearest valid page instead of erroring; an empty group list yields
/// zero total pages and an empty page 1.
pub fn paginate(groups: Vec<DateGroup>, page: usize, per_page: usize) -> Page {
    let per_page = per_page.max(1);
    let total_pages = groups.len().div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * per_page;

    Page {
        groups: groups.into_iter().skip(start).take(per_page).collect(),
        page,
        total_pages,
    }
}
