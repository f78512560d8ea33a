// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::models::Transaction;

pub fn export_transactions(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("csv")
        .to_lowercase();
    let out = sub.get_one::<String>("out").context("out is required")?;

    let mut transactions = client
        .transactions()
        .context("Failed to fetch transactions")?;
    transactions.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => write_csv(out, &transactions)?,
        "json" => write_json(out, &transactions)?,
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}

pub fn write_csv(out: impl AsRef<Path>, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out.as_ref())?;
    wtr.write_record(["id", "date", "type", "category", "description", "amount"])?;
    for tx in transactions {
        let amount = tx.amount.to_string();
        wtr.write_record([
            tx.id.as_str(),
            tx.date.as_str(),
            tx.kind.as_str(),
            tx.category.as_str(),
            tx.description.as_str(),
            amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(out: impl AsRef<Path>, transactions: &[Transaction]) -> Result<()> {
    std::fs::write(out.as_ref(), serde_json::to_string_pretty(transactions)?)?;
    Ok(())
}
