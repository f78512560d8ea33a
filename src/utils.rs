// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

const UA: &str = concat!(
    "finboard/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/finboard/finboard)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Monetary amounts where `amount >= 0` is required (transactions, fixed
/// expenses, goal targets).
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d < Decimal::ZERO {
        anyhow::bail!("Amount '{}' must not be negative", s);
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("?")
}

pub const FALLBACK_COLOR: &str = "#333333";

// Display colors per category; anything unmapped falls back rather than
// failing. The engine never sees these, it only emits category labels.
static CATEGORY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Salary", "#2E7D32"),
        ("Bonus", "#1B5E20"),
        ("Housing", "#FF5722"),
        ("Utilities", "#FF9800"),
        ("Food", "#8BC34A"),
        ("Transportation", "#03A9F4"),
        ("Entertainment", "#9C27B0"),
        ("Health", "#E91E63"),
        ("Insurance", "#F44336"),
        ("Subscription", "#795548"),
    ])
});

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS.get(category).copied().unwrap_or(FALLBACK_COLOR)
}

// Goal icon tags form a closed set; unknown names render as the emergency
// shield like the original dashboard did.
static GOAL_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("home", "Home"),
        ("car", "Car"),
        ("shield", "Emergency"),
        ("briefcase", "Investment"),
        ("plane", "Travel"),
    ])
});

pub fn goal_icon_label(icon_name: &str) -> &'static str {
    GOAL_ICONS.get(icon_name).copied().unwrap_or("Emergency")
}

/// Text progress bar for goal cards, `width` cells wide.
pub fn progress_bar(percent: &Decimal, width: usize) -> String {
    use rust_decimal::prelude::ToPrimitive;
    let filled = (percent * Decimal::from(width as u64) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
