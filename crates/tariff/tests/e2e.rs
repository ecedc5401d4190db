// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests running the `tariff` binary.
//!
//! Each test runs in an isolated temp directory with its own XDG config
//! home, so no local or user config file leaks in.

use std::path::Path;
use std::process::{Command, Output};

const OVERRIDE_VARS: &[&str] = &[
    "TARIFF_LOG_LEVEL",
    "TARIFF_BILLING_CURRENCY",
    "TARIFF_BILLING_AMOUNT_FORMAT",
    "TARIFF_BILLING_PRECISION",
];

fn tariff(dir: &Path, args: &[&str]) -> Output {
    tariff_with_env(dir, args, &[])
}

/// Run the binary with only the given `TARIFF_*` overrides set.
fn tariff_with_env(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tariff"));
    command
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG");
    for var in OVERRIDE_VARS {
        command.env_remove(var);
    }
    command.envs(vars.iter().copied());
    command.output().expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// ---- Default run ----

#[test]
fn default_run_prints_reference_bills() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Bill for your Domestic plan with 98 unit(s) consumed is Rs. 343.0\n\
         Bill for your Commercial plan with 204 unit(s) consumed is Rs. 1530.0\n\
         Bill for your Institutional plan with 465 unit(s) consumed is Rs. 2557.5\n"
    );
}

#[test]
fn run_json_emits_bill_array() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff(dir.path(), &["run", "--json"]);
    assert!(output.status.success());
    let bills: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(bills.as_array().map(Vec::len), Some(3));
    assert_eq!(bills[1]["category"], "Commercial");
    assert_eq!(bills[1]["amount"], 1530.0);
}

// ---- Local config ----

#[test]
fn local_config_controls_requests_and_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tariff.toml"),
        r#"
[billing]
currency = "INR"
amount_format = "fixed"

[[requests]]
units = 3
category = "Institutional"
"#,
    )
    .unwrap();

    let output = tariff(dir.path(), &["run"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Bill for your Institutional plan with 3 unit(s) consumed is INR 16.50\n"
    );
}

#[test]
fn explicit_config_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[billing]\ncurrency = \"$\"\n").unwrap();

    let output = tariff(
        dir.path(),
        &["--config", path.to_str().unwrap(), "bill", "Domestic", "2"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Bill for your Domestic plan with 2 unit(s) consumed is $ 7.0\n"
    );
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tariff.toml"), "[billing]\ncurency = \"$\"\n").unwrap();

    let output = tariff(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("curency"), "stderr: {stderr}");
}

// ---- Subcommands ----

#[test]
fn bill_unknown_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff(dir.path(), &["bill", "Industrial", "10"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown plan category"), "stderr: {stderr}");
}

#[test]
fn rates_lists_all_plans() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff(dir.path(), &["rates"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Domestic plan: Rs. 3.5 per unit\n\
         Commercial plan: Rs. 7.5 per unit\n\
         Institutional plan: Rs. 5.5 per unit\n"
    );
}

// ---- Environment overrides ----

#[test]
fn env_currency_override_applies() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff_with_env(
        dir.path(),
        &["bill", "Domestic", "2"],
        &[("TARIFF_BILLING_CURRENCY", "INR")],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "Bill for your Domestic plan with 2 unit(s) consumed is INR 7.0\n"
    );
}

#[test]
fn env_amount_format_overrides_local_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tariff.toml"),
        "[billing]\namount_format = \"raw\"\n",
    )
    .unwrap();

    let output = tariff_with_env(
        dir.path(),
        &["bill", "Commercial", "204"],
        &[
            ("TARIFF_BILLING_AMOUNT_FORMAT", "fixed"),
            ("TARIFF_BILLING_PRECISION", "3"),
        ],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "Bill for your Commercial plan with 204 unit(s) consumed is Rs. 1530.000\n"
    );
}

#[test]
fn env_log_level_override_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff_with_env(dir.path(), &["rates"], &[("TARIFF_LOG_LEVEL", "warn")]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn env_invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = tariff_with_env(dir.path(), &["rates"], &[("TARIFF_LOG_LEVEL", "chatty")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("log.level"), "stderr: {stderr}");
}
