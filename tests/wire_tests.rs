// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::api::{is_not_found, ApiClient};
use finboard::commands::expenses::retain_active;
use finboard::models::{FinancialGoal, FixedExpense, NewTransaction, Transaction, TxKind};
use rust_decimal::Decimal;

#[test]
fn transaction_kind_decodes_case_insensitively() {
    // Some endpoints emit upper-case kind tokens, others lower-case.
    let upper: Transaction = serde_json::from_str(
        r#"{"id":"t1","amount":5000,"type":"INCOME","category":"Salary","description":"Monthly Salary","date":"2024-01-01"}"#,
    )
    .unwrap();
    let lower: Transaction = serde_json::from_str(
        r#"{"id":"t2","amount":60,"type":"expense","category":"Food","description":"Grocery Shopping","date":"2024-01-04"}"#,
    )
    .unwrap();
    assert_eq!(upper.kind, TxKind::Income);
    assert_eq!(lower.kind, TxKind::Expense);
    assert_eq!(upper.amount, "5000".parse::<Decimal>().unwrap());
}

#[test]
fn unknown_kind_token_is_rejected() {
    let result: Result<Transaction, _> = serde_json::from_str(
        r#"{"id":"t1","amount":10,"type":"transfer","category":"Misc","description":"x","date":"2024-01-01"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn new_transaction_serializes_upper_case_camel_case() {
    let body = NewTransaction {
        amount: "12.50".parse().unwrap(),
        kind: TxKind::Expense,
        category: "Food".to_string(),
        description: "Lunch".to_string(),
        date: "2024-03-05".to_string(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["type"], "EXPENSE");
    assert_eq!(json["category"], "Food");
    assert_eq!(json["date"], "2024-03-05");
}

#[test]
fn fixed_expense_uses_camel_case_due_date() {
    let expense: FixedExpense = serde_json::from_str(
        r#"{"id":1,"name":"Rent","amount":1200,"dueDate":1,"category":"Housing","status":"ACTIVE"}"#,
    )
    .unwrap();
    assert_eq!(expense.due_date, 1);
    assert!(expense.is_active());

    let inactive: FixedExpense = serde_json::from_str(
        r#"{"id":2,"name":"Gym","amount":30,"dueDate":20,"category":"Health","status":"INACTIVE"}"#,
    )
    .unwrap();
    assert!(!inactive.is_active());
}

#[test]
fn goal_optional_fields_default() {
    let goal: FinancialGoal = serde_json::from_str(
        r#"{"id":7,"name":"New Car","targetAmount":20000,"currentSavings":3500,"status":"ACTIVE"}"#,
    )
    .unwrap();
    assert_eq!(goal.icon_name, None);
    assert_eq!(goal.description, None);
    assert_eq!(goal.target_amount, "20000".parse::<Decimal>().unwrap());
}

#[test]
fn client_trims_trailing_slash_from_base_url() {
    let client = ApiClient::new("http://localhost:8080/", None).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

fn status_error(code: u16) -> reqwest::Error {
    let resp = reqwest::blocking::Response::from(
        http::Response::builder().status(code).body("").unwrap(),
    );
    resp.error_for_status().unwrap_err()
}

#[test]
fn http_404_classifies_as_missing_resource() {
    let err = anyhow::Error::new(status_error(404));
    assert!(is_not_found(&err));
}

#[test]
fn http_404_classifies_through_context_chain() {
    // The client wraps every request error in context; the status must
    // still be reachable underneath.
    let err = anyhow::Error::new(status_error(404)).context("GET /api/settings");
    assert!(is_not_found(&err));
}

#[test]
fn other_failures_do_not_classify_as_missing() {
    assert!(!is_not_found(&anyhow::Error::new(status_error(500))));
    assert!(!is_not_found(&anyhow::anyhow!("connection refused")));
}

#[test]
fn retain_active_drops_inactive_expenses() {
    let expense = |id: i64, status: &str| FixedExpense {
        id,
        name: format!("e{}", id),
        amount: Decimal::from(10),
        due_date: 1,
        category: "Housing".to_string(),
        status: status.to_string(),
    };
    let mut expenses = vec![
        expense(1, "ACTIVE"),
        expense(2, "INACTIVE"),
        expense(3, "active"),
    ];
    retain_active(&mut expenses);
    let ids: Vec<i64> = expenses.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
