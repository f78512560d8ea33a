// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print machine-readable JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .about("Personal finance dashboard for a remote ledger API")
        .version(crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .num_args(1)
                .help("Base URL of the ledger API (overrides FINBOARD_API_URL)"),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Current-month summary, monthly overview, and fixed expenses"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Manage and browse transactions")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Filtered, sorted, date-grouped transaction listing")
                        .arg(Arg::new("date").long("date").num_args(1).help("Keep only this exact date (YYYY-MM-DD)"))
                        .arg(Arg::new("search").long("search").num_args(1).help("Substring match on description or category"))
                        .arg(Arg::new("kind").long("kind").num_args(1).default_value("all").help("income, expense or all"))
                        .arg(Arg::new("sort").long("sort").num_args(1).default_value("desc").help("Date order: asc or desc"))
                        .arg(Arg::new("page").long("page").num_args(1).value_parser(clap::value_parser!(usize)).default_value("1"))
                        .arg(Arg::new("per-page").long("per-page").num_args(1).value_parser(clap::value_parser!(usize)).default_value("10").help("Date groups per page")),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true).num_args(1))
                        .arg(Arg::new("kind").long("kind").required(true).num_args(1).help("income or expense"))
                        .arg(Arg::new("category").long("category").required(true).num_args(1))
                        .arg(Arg::new("description").long("description").required(true).num_args(1))
                        .arg(Arg::new("date").long("date").required(true).num_args(1).help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction")
                        .arg(Arg::new("id").required(true).num_args(1))
                        .arg(Arg::new("amount").long("amount").num_args(1))
                        .arg(Arg::new("kind").long("kind").num_args(1))
                        .arg(Arg::new("category").long("category").num_args(1))
                        .arg(Arg::new("description").long("description").num_args(1))
                        .arg(Arg::new("date").long("date").num_args(1)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true).num_args(1)),
                )
                .subcommand(
                    Command::new("export")
                        .about("Export all transactions to a file")
                        .arg(Arg::new("format").long("format").num_args(1).default_value("csv").help("csv or json"))
                        .arg(Arg::new("out").long("out").required(true).num_args(1)),
                ),
        )
        .subcommand(
            Command::new("fixed")
                .about("Manage fixed monthly expenses")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List fixed expenses")
                        .arg(Arg::new("active").long("active").action(ArgAction::SetTrue).help("Only ACTIVE expenses"))
                        .arg(Arg::new("category").long("category").num_args(1)),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Add a fixed expense")
                        .arg(Arg::new("name").long("name").required(true).num_args(1))
                        .arg(Arg::new("amount").long("amount").required(true).num_args(1))
                        .arg(Arg::new("due-date").long("due-date").required(true).num_args(1).value_parser(clap::value_parser!(u32).range(1..=31)).help("Day of month, 1-31"))
                        .arg(Arg::new("category").long("category").required(true).num_args(1)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update a fixed expense")
                        .arg(Arg::new("id").required(true).num_args(1).value_parser(clap::value_parser!(i64)))
                        .arg(Arg::new("name").long("name").num_args(1))
                        .arg(Arg::new("amount").long("amount").num_args(1))
                        .arg(Arg::new("due-date").long("due-date").num_args(1).value_parser(clap::value_parser!(u32).range(1..=31)))
                        .arg(Arg::new("category").long("category").num_args(1))
                        .arg(Arg::new("status").long("status").num_args(1).help("ACTIVE or INACTIVE")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a fixed expense")
                        .arg(Arg::new("id").required(true).num_args(1).value_parser(clap::value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Track financial goals")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List goals with progress")
                        .arg(Arg::new("active").long("active").action(ArgAction::SetTrue).help("Only ACTIVE goals")),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("name").long("name").required(true).num_args(1))
                        .arg(Arg::new("target").long("target").required(true).num_args(1))
                        .arg(Arg::new("current").long("current").num_args(1).default_value("0"))
                        .arg(Arg::new("icon").long("icon").num_args(1).help("home, car, shield, briefcase or plane")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update a goal")
                        .arg(Arg::new("id").required(true).num_args(1).value_parser(clap::value_parser!(i64)))
                        .arg(Arg::new("name").long("name").num_args(1))
                        .arg(Arg::new("target").long("target").num_args(1))
                        .arg(Arg::new("current").long("current").num_args(1))
                        .arg(Arg::new("icon").long("icon").num_args(1))
                        .arg(Arg::new("status").long("status").num_args(1)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a goal")
                        .arg(Arg::new("id").required(true).num_args(1).value_parser(clap::value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Financial reports")
                .subcommand(json_flags(
                    Command::new("generate")
                        .about("Compute a report from the current transaction set")
                        .arg(Arg::new("months").long("months").num_args(1).value_parser(clap::value_parser!(u32)).help("Window of the last N months (default: everything)"))
                        .arg(Arg::new("save").long("save").num_args(1).help("Also store the report server-side under this name")),
                ))
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List stored reports")
                        .arg(Arg::new("type").long("type").num_args(1).help("Filter by report type"))
                        .arg(Arg::new("status").long("status").num_args(1).conflicts_with("type").help("Filter by status (exclusive with --type)")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a stored report")
                        .arg(Arg::new("id").required(true).num_args(1).value_parser(clap::value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("User settings (singleton resource)")
                .subcommand(json_flags(Command::new("show").about("Show current settings")))
                .subcommand(
                    Command::new("set")
                        .about("Update settings fields")
                        .arg(Arg::new("currency").long("currency").num_args(1))
                        .arg(Arg::new("language").long("language").num_args(1))
                        .arg(Arg::new("theme").long("theme").num_args(1))
                        .arg(Arg::new("timezone").long("timezone").num_args(1))
                        .arg(Arg::new("email-notifications").long("email-notifications").num_args(1).value_parser(clap::value_parser!(bool)))
                        .arg(Arg::new("push-notifications").long("push-notifications").num_args(1).value_parser(clap::value_parser!(bool)))
                        .arg(Arg::new("budgeting-frequency").long("budgeting-frequency").num_args(1).help("MONTHLY or YEARLY"))
                        .arg(Arg::new("default-view").long("default-view").num_args(1)),
                )
                .subcommand(Command::new("reset").about("Delete the settings resource")),
        )
}
