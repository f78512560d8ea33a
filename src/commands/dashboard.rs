// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::engine::{monthly_totals, period_summary, Period};
use crate::utils::{fmt_money, maybe_print_json, month_name, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let transactions = client
        .transactions()
        .context("Failed to fetch transactions")?;
    let fixed = client
        .active_fixed_expenses()
        .context("Failed to fetch fixed expenses")?;

    let today = chrono::Utc::now().date_naive();
    let summary = period_summary(&transactions, Period::containing(today))?;

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!("Summary for {}", summary.period);
    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expenses", "Net Income", "Top Expense Category"],
            vec![vec![
                fmt_money(&summary.total_income),
                fmt_money(&summary.total_expenses),
                fmt_money(&summary.net_income),
                summary
                    .top_expense_category
                    .clone()
                    .unwrap_or_else(|| "None".to_string()),
            ]],
        )
    );

    let months = monthly_totals(&transactions)?;
    let rows = months
        .iter()
        .map(|mt| {
            vec![
                month_name(mt.month0).to_string(),
                fmt_money(&mt.income),
                fmt_money(&mt.expenses),
            ]
        })
        .collect();
    println!("\nOverview");
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));

    // Most recent first, capped like the dashboard card.
    let mut recent = transactions.clone();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(5);
    let rows = recent
        .iter()
        .map(|tx| {
            vec![
                tx.date.clone(),
                tx.kind.label().to_string(),
                tx.category.clone(),
                tx.description.clone(),
                fmt_money(&tx.amount),
            ]
        })
        .collect();
    println!("\nRecent Transactions ({} total)", transactions.len());
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Description", "Amount"], rows)
    );

    let obligation: Decimal = fixed.iter().map(|e| e.amount).sum();
    let rows = fixed
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                format!("Day {}", e.due_date),
                e.category.clone(),
                fmt_money(&e.amount),
            ]
        })
        .collect();
    println!("\nFixed Monthly Expenses (total {})", fmt_money(&obligation));
    if fixed.is_empty() {
        println!("No fixed expenses added yet.");
    } else {
        println!(
            "{}",
            pretty_table(&["Name", "Due", "Category", "Amount"], rows)
        );
    }
    Ok(())
}
