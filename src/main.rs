// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finboard::{api::ApiClient, cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let client = match matches.get_one::<String>("api-url") {
        Some(base) => ApiClient::new(base.clone(), std::env::var(finboard::api::TOKEN_ENV).ok())?,
        None => ApiClient::from_env()?,
    };

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&client, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&client, sub)?,
        Some(("fixed", sub)) => commands::expenses::handle(&client, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&client, sub)?,
        Some(("report", sub)) => commands::reports::handle(&client, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&client, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
