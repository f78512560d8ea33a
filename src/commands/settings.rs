// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::{is_not_found, ApiClient};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(client, sub)?,
        Some(("set", sub)) => set(client, sub)?,
        Some(("reset", _)) => reset(client)?,
        _ => {}
    }
    Ok(())
}

fn show(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let settings = client.settings().context("Failed to fetch settings")?;
    if maybe_print_json(json_flag, jsonl_flag, &settings)? {
        return Ok(());
    }

    let on_off = |v: Option<bool>| match v {
        Some(true) => "on".to_string(),
        Some(false) => "off".to_string(),
        None => "-".to_string(),
    };
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    println!(
        "{}",
        pretty_table(
            &[
                "Currency",
                "Language",
                "Theme",
                "Timezone",
                "Email",
                "Push",
                "Budgeting",
                "Default View",
            ],
            vec![vec![
                or_dash(&settings.currency),
                or_dash(&settings.language),
                or_dash(&settings.theme),
                or_dash(&settings.timezone),
                on_off(settings.email_notifications),
                on_off(settings.push_notifications),
                or_dash(&settings.budgeting_frequency),
                or_dash(&settings.default_view),
            ]],
        )
    );
    Ok(())
}

fn set(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    // Start from what the server has so unset flags keep their values. Only
    // a 404 means the singleton is missing and gets created; any other
    // failure aborts rather than overwriting state we could not read.
    let current = match client.settings() {
        Ok(settings) => Some(settings),
        Err(err) if is_not_found(&err) => None,
        Err(err) => return Err(err.context("Failed to fetch settings")),
    };
    let creating = current.is_none();
    let mut settings = current.unwrap_or_default();

    if let Some(v) = sub.get_one::<String>("currency") {
        settings.currency = Some(v.to_uppercase());
    }
    if let Some(v) = sub.get_one::<String>("language") {
        settings.language = Some(v.clone());
    }
    if let Some(v) = sub.get_one::<String>("theme") {
        settings.theme = Some(v.clone());
    }
    if let Some(v) = sub.get_one::<String>("timezone") {
        settings.timezone = Some(v.clone());
    }
    if let Some(v) = sub.get_one::<bool>("email-notifications") {
        settings.email_notifications = Some(*v);
    }
    if let Some(v) = sub.get_one::<bool>("push-notifications") {
        settings.push_notifications = Some(*v);
    }
    if let Some(v) = sub.get_one::<String>("budgeting-frequency") {
        settings.budgeting_frequency = Some(v.to_uppercase());
    }
    if let Some(v) = sub.get_one::<String>("default-view") {
        settings.default_view = Some(v.to_uppercase());
    }

    if creating {
        client
            .create_settings(&settings)
            .context("Failed to create settings")?;
    } else {
        client
            .update_settings(&settings)
            .context("Failed to update settings")?;
    }
    println!("Settings saved");
    Ok(())
}

fn reset(client: &ApiClient) -> Result<()> {
    client.delete_settings().context("Failed to reset settings")?;
    println!("Settings reset");
    Ok(())
}
