// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::engine::financial_report;
use crate::models::NewReport;
use crate::utils::{category_color, fmt_money, maybe_print_json, month_name, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("generate", sub)) => generate(client, sub)?,
        Some(("list", sub)) => list(client, sub)?,
        Some(("rm", sub)) => rm(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn generate(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = Utc::now().date_naive();

    let (transactions, window_start) = match sub.get_one::<u32>("months") {
        Some(months) => {
            let start = today
                .checked_sub_months(Months::new(*months))
                .unwrap_or(NaiveDate::MIN);
            let txs = client
                .transactions_in_range(&start.to_string(), &today.to_string())
                .context("Failed to fetch transactions")?;
            (txs, Some(start))
        }
        None => {
            let txs = client
                .transactions()
                .context("Failed to fetch transactions")?;
            (txs, None)
        }
    };

    let report = financial_report(&transactions)?;

    if let Some(name) = sub.get_one::<String>("save") {
        // Without an explicit window the report spans whatever dates arrived.
        let start_date = match window_start {
            Some(start) => start.to_string(),
            None => transactions
                .iter()
                .map(|t| t.date.clone())
                .min()
                .unwrap_or_else(|| today.to_string()),
        };
        let categories: Vec<&str> = report
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        let saved = client
            .create_report(&NewReport {
                name: name.clone(),
                report_type: "CATEGORY_WISE".to_string(),
                start_date,
                end_date: today.to_string(),
                timeframe: "MONTHLY".to_string(),
                categories: (!categories.is_empty()).then(|| categories.join(",")),
                total_amount: report.total_expenses,
                status: "GENERATED".to_string(),
            })
            .context("Failed to save report")?;
        println!("Saved report '{}' as id {}", saved.name, saved.id);
    }

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expenses", "Net Balance"],
            vec![vec![
                fmt_money(&report.total_income),
                fmt_money(&report.total_expenses),
                fmt_money(&report.balance),
            ]],
        )
    );

    let rows = report
        .rows
        .iter()
        .map(|row| {
            vec![
                month_name(row.month0).to_string(),
                fmt_money(&row.income),
                fmt_money(&row.expenses),
                fmt_money(&row.balance),
            ]
        })
        .collect();
    println!("\nMonthly Series");
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Balance"], rows)
    );

    let rows = report
        .categories
        .iter()
        .map(|c| {
            let share = if report.total_expenses > Decimal::ZERO {
                c.total / report.total_expenses * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            vec![
                c.category.clone(),
                fmt_money(&c.total),
                format!("{:.1}%", share),
                category_color(&c.category).to_string(),
            ]
        })
        .collect();
    println!("\nExpense Categories");
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], rows)
    );
    Ok(())
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let reports = if let Some(report_type) = sub.get_one::<String>("type") {
        client
            .reports_by_type(report_type)
            .context("Failed to fetch reports")?
    } else if let Some(status) = sub.get_one::<String>("status") {
        client
            .reports_by_status(status)
            .context("Failed to fetch reports")?
    } else {
        client.reports().context("Failed to fetch reports")?
    };

    if maybe_print_json(json_flag, jsonl_flag, &reports)? {
        return Ok(());
    }

    let rows = reports
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.report_type.clone(),
                format!("{}..{}", r.start_date, r.end_date),
                r.timeframe.clone(),
                fmt_money(&r.total_amount),
                r.status.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Type", "Range", "Timeframe", "Total", "Status"],
            rows
        )
    );
    Ok(())
}

fn rm(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    client.delete_report(id).context("Failed to delete report")?;
    println!("Deleted report {}", id);
    Ok(())
}
