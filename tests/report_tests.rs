// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::engine::financial_report;
use finboard::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(id: &str, amount: &str, kind: TxKind, category: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.parse().unwrap(),
        kind,
        category: category.to_string(),
        description: format!("{} payment", category),
        date: date.to_string(),
    }
}

#[test]
fn report_rows_carry_per_month_balance() {
    let txs = vec![
        tx("1", "5000", TxKind::Income, "Salary", "2024-01-01"),
        tx("2", "1500", TxKind::Expense, "Housing", "2024-01-03"),
        tx("3", "5000", TxKind::Income, "Salary", "2024-02-01"),
        tx("4", "5200", TxKind::Expense, "Housing", "2024-02-03"),
    ];
    let report = financial_report(&txs).unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].balance, "3500".parse::<Decimal>().unwrap());
    assert_eq!(report.rows[1].balance, "-200".parse::<Decimal>().unwrap());
}

#[test]
fn report_totals_sum_the_monthly_series() {
    let txs = vec![
        tx("1", "100", TxKind::Income, "Salary", "2024-01-01"),
        tx("2", "40", TxKind::Expense, "Food", "2024-02-10"),
        tx("3", "60", TxKind::Expense, "Food", "2024-03-02"),
    ];
    let report = financial_report(&txs).unwrap();
    assert_eq!(report.total_income, "100".parse::<Decimal>().unwrap());
    assert_eq!(report.total_expenses, "100".parse::<Decimal>().unwrap());
    assert_eq!(report.balance, Decimal::ZERO);
    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[0].total, "100".parse::<Decimal>().unwrap());
}

#[test]
fn empty_dataset_yields_an_empty_report() {
    let report = financial_report(&[]).unwrap();
    assert!(report.rows.is_empty());
    assert!(report.categories.is_empty());
    assert_eq!(report.balance, Decimal::ZERO);
}
