// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::commands::exporter::{write_csv, write_json};
use finboard::models::{Transaction, TxKind};

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "t1".to_string(),
            amount: "5000".parse().unwrap(),
            kind: TxKind::Income,
            category: "Salary".to_string(),
            description: "Monthly Salary".to_string(),
            date: "2024-01-01".to_string(),
        },
        Transaction {
            id: "t2".to_string(),
            amount: "12.50".parse().unwrap(),
            kind: TxKind::Expense,
            category: "Food".to_string(),
            description: "Lunch, downtown".to_string(),
            date: "2024-01-04".to_string(),
        },
    ]
}

#[test]
fn csv_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.csv");
    write_csv(&path, &sample()).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "type", "category", "description", "amount"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "INCOME");
    // Comma inside the description survives quoting.
    assert_eq!(&rows[1][4], "Lunch, downtown");
    assert_eq!(&rows[1][5], "12.50");
}

#[test]
fn json_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    write_json(&path, &sample()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let decoded: Vec<Transaction> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].kind, TxKind::Income);
    assert_eq!(decoded[1].category, "Food");
}
