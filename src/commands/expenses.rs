// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::models::FixedExpense;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => add(client, sub)?,
        Some(("edit", sub)) => edit(client, sub)?,
        Some(("rm", sub)) => rm(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // `--category` resolves server-side; `--active` is applied here so the
    // two combine instead of one flag shadowing the other.
    let active = sub.get_flag("active");
    let mut expenses = match sub.get_one::<String>("category") {
        Some(category) => client
            .fixed_expenses_by_category(category)
            .context("Failed to fetch fixed expenses")?,
        None if active => client
            .active_fixed_expenses()
            .context("Failed to fetch fixed expenses")?,
        None => client
            .fixed_expenses()
            .context("Failed to fetch fixed expenses")?,
    };
    if active {
        retain_active(&mut expenses);
    }

    if maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        return Ok(());
    }

    let total: Decimal = expenses
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.amount)
        .sum();
    let rows = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                format!("Day {}", e.due_date),
                e.category.clone(),
                e.status.clone(),
                fmt_money(&e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Name", "Due", "Category", "Status", "Amount"], rows)
    );
    println!("Active monthly obligation: {}", fmt_money(&total));
    Ok(())
}

/// Client-side leg of the listing filter.
pub fn retain_active(expenses: &mut Vec<FixedExpense>) {
    expenses.retain(FixedExpense::is_active);
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").context("name is required")?.clone();
    let amount = parse_amount(sub.get_one::<String>("amount").context("amount is required")?)?;
    let due_date = *sub
        .get_one::<u32>("due-date")
        .context("due-date is required")?;
    let category = sub
        .get_one::<String>("category")
        .context("category is required")?
        .clone();

    let created = client
        .create_fixed_expense(&crate::models::NewFixedExpense {
            name,
            amount,
            due_date,
            category,
            status: "ACTIVE".to_string(),
        })
        .context("Failed to add fixed expense")?;
    println!(
        "Added fixed expense '{}' ({}) due day {}",
        created.name,
        fmt_money(&created.amount),
        created.due_date
    );
    Ok(())
}

fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let mut expense = client
        .fixed_expense(id)
        .with_context(|| format!("Fixed expense {} not found", id))?;

    if let Some(name) = sub.get_one::<String>("name") {
        expense.name = name.clone();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        expense.amount = parse_amount(amount)?;
    }
    if let Some(due) = sub.get_one::<u32>("due-date") {
        expense.due_date = *due;
    }
    if let Some(category) = sub.get_one::<String>("category") {
        expense.category = category.clone();
    }
    if let Some(status) = sub.get_one::<String>("status") {
        expense.status = status.to_uppercase();
    }

    client
        .update_fixed_expense(id, &expense)
        .context("Failed to update fixed expense")?;
    println!("Updated fixed expense {}", id);
    Ok(())
}

fn rm(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    client
        .delete_fixed_expense(id)
        .context("Failed to delete fixed expense")?;
    println!("Deleted fixed expense {}", id);
    Ok(())
}
