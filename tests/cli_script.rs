use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn tracker_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_adds_and_summarizes() {
    let home = TempDir::new().unwrap();
    let input = concat!(
        "1\n10\nFood\n2024-01-01\n",
        "1\n5\nfood\n2024-01-08\n",
        "2\n1\nFOOD\n",
        "2\n2\n",
        "2\n3\n2\n",
        "3\n",
    );

    tracker_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense added successfully!"))
        .stdout(contains("Total spending on FOOD: $15.00"))
        .stdout(contains("Total overall spending: $15.00"))
        .stdout(contains("Spending summary (weekly):"))
        .stdout(contains("Week 1 of 2024: $10.00"))
        .stdout(contains("Week 2 of 2024: $5.00"))
        .stdout(contains("Exiting the program. Goodbye!"));

    let json = fs::read_to_string(home.path().join("expenses.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([
            {"amount": 10.0, "category": "Food", "date": "2024-01-01"},
            {"amount": 5.0, "category": "food", "date": "2024-01-08"}
        ])
    );
}

#[test]
fn existing_store_is_loaded_at_startup() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("expenses.json"),
        r#"[
            {"amount": 3.5, "category": "Food", "date": "2024-03-05"},
            {"amount": 1.5, "category": "Misc", "date": "2024-03-20"}
        ]"#,
    )
    .unwrap();

    tracker_cmd(&home)
        .write_stdin("2\n3\n3\n3\n")
        .assert()
        .success()
        .stdout(contains("Spending summary (monthly):"))
        .stdout(contains("March 2024: $5.00"));
}

#[test]
fn empty_store_has_nothing_to_summarize() {
    let home = TempDir::new().unwrap();
    tracker_cmd(&home)
        .write_stdin("2\n5\n3\n")
        .assert()
        .success()
        .stdout(contains("No expenses to show."))
        .stdout(contains("Invalid choice. Please try again."));
    assert!(!home.path().join("expenses.json").exists());
}

#[test]
fn corrupt_store_aborts_startup() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("expenses.json"), "{ definitely not a list").unwrap();

    tracker_cmd(&home)
        .write_stdin("3\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("corrupt"));

    let untouched = fs::read_to_string(home.path().join("expenses.json")).unwrap();
    assert_eq!(untouched, "{ definitely not a list");
}

#[test]
fn config_file_redirects_store_and_currency() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".expense_tracker");
    fs::create_dir_all(&config_dir).unwrap();
    let data_file = home.path().join("ledger").join("spending.json");
    fs::write(
        config_dir.join("config.json"),
        serde_json::json!({
            "currency_symbol": "£",
            "ui_color_enabled": false,
            "data_file": data_file,
        })
        .to_string(),
    )
    .unwrap();

    tracker_cmd(&home)
        .write_stdin("1\n7.25\nBooks\n2024-05-01\n2\n2\n3\n")
        .assert()
        .success()
        .stdout(contains("Total overall spending: £7.25"));

    assert!(data_file.exists());
    assert!(!home.path().join("expenses.json").exists());
}
