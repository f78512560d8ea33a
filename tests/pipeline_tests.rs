// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::engine::{
    group_by_date, paginate, KindFilter, SortOrder, TransactionQuery,
};
use finboard::models::{Transaction, TxKind};
use rust_decimal::Decimal;
use std::str::FromStr;

fn tx(id: &str, amount: &str, kind: TxKind, category: &str, description: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.parse().unwrap(),
        kind,
        category: category.to_string(),
        description: description.to_string(),
        date: date.to_string(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("1", "5000", TxKind::Income, "Salary", "Monthly Salary", "2024-01-01"),
        tx("2", "1500", TxKind::Expense, "Housing", "Rent Payment", "2024-01-03"),
        tx("3", "60", TxKind::Expense, "Food", "Grocery Shopping", "2024-01-03"),
        tx("4", "200", TxKind::Expense, "Utilities", "Electricity Bill", "2024-01-07"),
        tx("5", "40", TxKind::Expense, "Transportation", "Fuel", "2024-02-02"),
    ]
}

#[test]
fn kind_all_is_the_identity() {
    let txs = sample();
    let query = TransactionQuery {
        order: SortOrder::Asc,
        ..Default::default()
    };
    let out = query.apply(&txs).unwrap();
    assert_eq!(out.len(), txs.len());

    let total_in: Decimal = txs.iter().map(|t| t.amount).sum();
    let total_out: Decimal = out.iter().map(|t| t.amount).sum();
    assert_eq!(total_in, total_out);
}

#[test]
fn disjoint_kind_filters_compose_to_empty() {
    let txs = sample();
    let income_only = TransactionQuery {
        kind: KindFilter::Income,
        ..Default::default()
    }
    .apply(&txs)
    .unwrap();
    let then_expense = TransactionQuery {
        kind: KindFilter::Expense,
        ..Default::default()
    }
    .apply(&income_only)
    .unwrap();
    assert!(then_expense.is_empty());
}

#[test]
fn date_filter_keeps_exact_matches_only() {
    let query = TransactionQuery {
        date: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()),
        ..Default::default()
    };
    let out = query.apply(&sample()).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|t| t.date == "2024-01-03"));
}

#[test]
fn search_matches_description_and_category_case_insensitively() {
    let by_description = TransactionQuery {
        search: Some("GROCERY".to_string()),
        ..Default::default()
    }
    .apply(&sample())
    .unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, "3");

    let by_category = TransactionQuery {
        search: Some("housing".to_string()),
        ..Default::default()
    }
    .apply(&sample())
    .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, "2");
}

#[test]
fn descending_sort_is_stable_for_equal_dates() {
    let query = TransactionQuery {
        order: SortOrder::Desc,
        ..Default::default()
    };
    let out = query.apply(&sample()).unwrap();
    // 2024-01-03 appears twice; id 2 entered before id 3 and must stay first.
    let same_day: Vec<&str> = out
        .iter()
        .filter(|t| t.date == "2024-01-03")
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(same_day, vec!["2", "3"]);
    assert_eq!(out[0].date, "2024-02-02");
}

#[test]
fn grouping_partitions_by_exact_date() {
    let query = TransactionQuery {
        order: SortOrder::Asc,
        ..Default::default()
    };
    let groups = group_by_date(&query.apply(&sample()).unwrap());
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[1].date, "2024-01-03");
    assert_eq!(groups[1].transactions.len(), 2);
}

#[test]
fn pages_concatenate_to_the_full_group_list() {
    let query = TransactionQuery {
        order: SortOrder::Asc,
        ..Default::default()
    };
    let groups = group_by_date(&query.apply(&sample()).unwrap());
    let n = groups.len();
    let per_page = 3;

    let mut seen: Vec<String> = Vec::new();
    let first = paginate(groups.clone(), 1, per_page);
    assert_eq!(first.total_pages, n.div_ceil(per_page));
    for page_no in 1..=first.total_pages {
        let page = paginate(groups.clone(), page_no, per_page);
        for group in page.groups {
            seen.push(group.date);
        }
    }
    let expected: Vec<String> = groups.iter().map(|g| g.date.clone()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn out_of_range_pages_clamp() {
    let query = TransactionQuery::default();
    let groups = group_by_date(&query.apply(&sample()).unwrap());

    let past_the_end = paginate(groups.clone(), 99, 2);
    assert_eq!(past_the_end.page, past_the_end.total_pages);
    assert!(!past_the_end.groups.is_empty());

    let below = paginate(groups, 0, 2);
    assert_eq!(below.page, 1);
}

#[test]
fn empty_listing_paginates_to_zero_pages() {
    let page = paginate(Vec::new(), 1, 10);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
    assert!(page.groups.is_empty());
}

#[test]
fn filter_tokens_parse_case_insensitively() {
    assert_eq!(KindFilter::from_str("Income").unwrap(), KindFilter::Income);
    assert_eq!(KindFilter::from_str("ALL").unwrap(), KindFilter::All);
    assert!(KindFilter::from_str("transfer").is_err());
    assert_eq!(SortOrder::from_str("ASC").unwrap(), SortOrder::Asc);
    assert!(SortOrder::from_str("sideways").is_err());
}

#[test]
fn malformed_date_fails_even_when_filtered_out() {
    let mut txs = sample();
    txs.push(tx("6", "10", TxKind::Expense, "Food", "Snacks", "garbage"));
    let query = TransactionQuery {
        kind: KindFilter::Income,
        ..Default::default()
    };
    assert!(query.apply(&txs).is_err());
}
