// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::engine::{goal_progress, goal_standing, GoalStanding};
use crate::models::NewFinancialGoal;
use crate::utils::{fmt_money, goal_icon_label, maybe_print_json, parse_amount, pretty_table, progress_bar};

const ICON_NAMES: [&str; 5] = ["home", "car", "shield", "briefcase", "plane"];

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

fn parse_icon(s: &str) -> Result<String> {
    let name = s.to_ascii_lowercase();
    if !ICON_NAMES.contains(&name.as_str()) {
        anyhow::bail!("Unknown icon '{}', expected one of {}", s, ICON_NAMES.join(", "));
    }
    Ok(name)
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let goals = if sub.get_flag("active") {
        client.active_goals().context("Failed to fetch financial goals")?
    } else {
        client.goals().context("Failed to fetch financial goals")?
    };

    if maybe_print_json(json_flag, jsonl_flag, &goals)? {
        return Ok(());
    }

    let rows = goals
        .iter()
        .map(|g| {
            let pct = goal_progress(g.current_savings, g.target_amount);
            let standing = match goal_standing(g.current_savings, g.target_amount) {
                GoalStanding::Remaining(left) => format!("{} more to go", fmt_money(&left)),
                GoalStanding::Reached => "Goal reached!".to_string(),
            };
            vec![
                g.id.to_string(),
                g.name.clone(),
                goal_icon_label(g.icon_name.as_deref().unwrap_or("shield")).to_string(),
                fmt_money(&g.current_savings),
                fmt_money(&g.target_amount),
                format!("{} {:.1}%", progress_bar(&pct, 20), pct),
                standing,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Icon", "Current", "Target", "Progress", ""],
            rows
        )
    );
    Ok(())
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").context("name is required")?.clone();
    let target_amount = parse_amount(sub.get_one::<String>("target").context("target is required")?)?;
    let current_savings =
        parse_amount(sub.get_one::<String>("current").map(String::as_str).unwrap_or("0"))?;
    let icon_name = sub
        .get_one::<String>("icon")
        .map(|s| parse_icon(s))
        .transpose()?;

    let created = client
        .create_goal(&NewFinancialGoal {
            name,
            target_amount,
            current_savings,
            icon_name,
            status: "ACTIVE".to_string(),
        })
        .context("Failed to add financial goal")?;
    println!(
        "Added goal '{}' targeting {}",
        created.name,
        fmt_money(&created.target_amount)
    );
    Ok(())
}

fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let mut goal = client
        .goal(id)
        .with_context(|| format!("Financial goal {} not found", id))?;

    if let Some(name) = sub.get_one::<String>("name") {
        goal.name = name.clone();
    }
    if let Some(target) = sub.get_one::<String>("target") {
        goal.target_amount = parse_amount(target)?;
    }
    if let Some(current) = sub.get_one::<String>("current") {
        goal.current_savings = parse_amount(current)?;
    }
    if let Some(icon) = sub.get_one::<String>("icon") {
        goal.icon_name = Some(parse_icon(icon)?);
    }
    if let Some(status) = sub.get_one::<String>("status") {
        goal.status = status.to_uppercase();
    }

    client
        .update_goal(id, &goal)
        .context("Failed to update financial goal")?;
    println!("Updated goal {}", id);
    Ok(())
}

fn rm(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    client
        .delete_goal(id)
        .context("Failed to delete financial goal")?;
    println!("Deleted goal {}", id);
    Ok(())
}
