// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::str::FromStr;

use crate::api::ApiClient;
use crate::engine::{group_by_date, paginate, KindFilter, SortOrder, TransactionQuery};
use crate::models::{NewTransaction, TxKind};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => add(client, sub)?,
        Some(("edit", sub)) => edit(client, sub)?,
        Some(("rm", sub)) => rm(client, sub)?,
        Some(("export", sub)) => super::exporter::export_transactions(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<TxKind> {
    match s.to_ascii_lowercase().as_str() {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        other => anyhow::bail!("Unknown kind '{}', expected income or expense", other),
    }
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let query = TransactionQuery {
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
        search: sub.get_one::<String>("search").cloned(),
        kind: KindFilter::from_str(sub.get_one::<String>("kind").map(String::as_str).unwrap_or("all"))?,
        order: SortOrder::from_str(sub.get_one::<String>("sort").map(String::as_str).unwrap_or("desc"))?,
    };
    let page_no = *sub.get_one::<usize>("page").unwrap_or(&1);
    let per_page = *sub.get_one::<usize>("per-page").unwrap_or(&10);

    let transactions = client
        .transactions()
        .context("Failed to fetch transactions")?;

    let filtered = query.apply(&transactions)?;
    let page = paginate(group_by_date(&filtered), page_no, per_page);

    if maybe_print_json(json_flag, jsonl_flag, &page)? {
        return Ok(());
    }

    if page.groups.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    for group in &page.groups {
        println!("{}", group.date);
        let rows = group
            .transactions
            .iter()
            .map(|tx| {
                vec![
                    tx.kind.label().to_string(),
                    tx.category.clone(),
                    tx.description.clone(),
                    match tx.kind {
                        TxKind::Income => format!("+{}", fmt_money(&tx.amount)),
                        TxKind::Expense => format!("-{}", fmt_money(&tx.amount)),
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Type", "Category", "Description", "Amount"], rows)
        );
    }
    println!("Page {} of {}", page.page, page.total_pages);
    Ok(())
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").context("amount is required")?)?;
    let kind = parse_kind(sub.get_one::<String>("kind").context("kind is required")?)?;
    let category = sub
        .get_one::<String>("category")
        .context("category is required")?
        .clone();
    let description = sub
        .get_one::<String>("description")
        .context("description is required")?
        .clone();
    let date = parse_date(sub.get_one::<String>("date").context("date is required")?)?;

    let created = client
        .create_transaction(&NewTransaction {
            amount,
            kind,
            category,
            description,
            date: date.to_string(),
        })
        .context("Failed to add transaction")?;
    println!(
        "Recorded {} {} on {} ({})",
        created.kind.label(),
        fmt_money(&created.amount),
        created.date,
        created.id
    );
    Ok(())
}

fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id is required")?;
    let mut tx = client
        .transaction(id)
        .with_context(|| format!("Transaction '{}' not found", id))?;

    if let Some(amount) = sub.get_one::<String>("amount") {
        tx.amount = parse_amount(amount)?;
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        tx.kind = parse_kind(kind)?;
    }
    if let Some(category) = sub.get_one::<String>("category") {
        tx.category = category.clone();
    }
    if let Some(description) = sub.get_one::<String>("description") {
        tx.description = description.clone();
    }
    if let Some(date) = sub.get_one::<String>("date") {
        tx.date = parse_date(date)?.to_string();
    }

    client
        .update_transaction(id, &tx)
        .context("Failed to update transaction")?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id is required")?;
    client
        .delete_transaction(id)
        .context("Failed to delete transaction")?;
    println!("Deleted transaction {}", id);
    Ok(())
}
