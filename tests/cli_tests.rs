// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::cli::build_cli;

#[test]
fn report_list_rejects_type_and_status_together() {
    let result = build_cli().try_get_matches_from([
        "finboard", "report", "list", "--type", "CATEGORY_WISE", "--status", "GENERATED",
    ]);
    assert!(result.is_err());
}

#[test]
fn report_list_accepts_each_filter_alone() {
    build_cli()
        .try_get_matches_from(["finboard", "report", "list", "--type", "CATEGORY_WISE"])
        .unwrap();
    build_cli()
        .try_get_matches_from(["finboard", "report", "list", "--status", "GENERATED"])
        .unwrap();
}

#[test]
fn fixed_list_accepts_active_with_category() {
    let matches = build_cli()
        .try_get_matches_from(["finboard", "fixed", "list", "--active", "--category", "Housing"])
        .unwrap();
    let (_, fixed) = matches.subcommand().unwrap();
    let (_, list) = fixed.subcommand().unwrap();
    assert!(list.get_flag("active"));
    assert_eq!(list.get_one::<String>("category").unwrap(), "Housing");
}
