use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget_tracker";

/// Runs the binary in an isolated working directory and home.
fn script_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn exit_prints_bye() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(contains("Choose your action:").and(contains("Bye!")));
}

#[test]
fn balance_scenario_and_save() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("1\n100\n2\n2\nShirt\n20\n1\nBread\n5\n5\n4\n5\n0\n")
        .assert()
        .success()
        .stdout(
            contains("Balance: $75.00")
                .and(contains("Purchases were saved!"))
                .and(contains("Bye!")),
        );

    let saved = fs::read_to_string(dir.path().join("purchases.txt")).unwrap();
    assert_eq!(saved, "75.0\nCLOTHES;Shirt;20.0\nFOOD;Bread;5.0\n");
}

#[test]
fn load_then_list_all() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("purchases.txt"),
        "40.0\nFOOD;Coffee;3.5\nFOOD;Coffee;3.5\nOTHER;Pen\n",
    )
    .unwrap();

    script_command(&dir)
        .write_stdin("6\n3\n5\n6\n4\n0\n")
        .assert()
        .success()
        .stdout(
            contains("Purchases were loaded!")
                .and(contains("All:\nCoffee $3.50\nCoffee $3.50\nTotal sum: $7.00"))
                .and(contains("Balance: $40.00")),
        );
}

#[test]
fn missing_file_and_bad_file_are_reported() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("6\n0\n")
        .assert()
        .success()
        .stdout(contains("File not found!"));

    fs::write(dir.path().join("purchases.txt"), "1.0\nSNACKS;Chips;2.0\n").unwrap();
    script_command(&dir)
        .write_stdin("6\n3\n0\n")
        .assert()
        .success()
        .stdout(
            contains("An error occurred while loading.")
                .and(contains("The purchase list is empty!")),
        );
}

#[test]
fn non_numeric_input_does_not_abort() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("hello\n1\nlots\n12.5\n4\n0\n")
        .assert()
        .success()
        .stdout(
            contains("Invalid number: hello")
                .and(contains("Invalid number: lots"))
                .and(contains("Balance: $12.50")),
        );
}

#[test]
fn end_of_input_exits_successfully() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(contains("Bye!"));
}

#[test]
fn config_file_redirects_data_file() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".budget_tracker");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{ "data_file": "ledger.txt", "currency_symbol": "€" }"#,
    )
    .unwrap();

    script_command(&dir)
        .write_stdin("1\n8\n4\n5\n0\n")
        .assert()
        .success()
        .stdout(contains("Balance: €8.00"));

    assert!(dir.path().join("ledger.txt").exists());
    assert!(!dir.path().join("purchases.txt").exists());
}

#[test]
fn malformed_config_fails_startup() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".budget_tracker");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ nope").unwrap();

    script_command(&dir)
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
