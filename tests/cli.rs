use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("MONTHLY_LEDGER_DATA_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, args: &[&str]) -> String {
    let output = ledger(dir).arg("txn").arg("add").args(args).output().unwrap();
    assert!(output.status.success(), "txn add failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

/// A March 2024 with salary, rent and two food expenses
fn seed_march(dir: &TempDir) {
    add(dir, &["Salary", "3000", "-c", "Salary", "--income", "-d", "2024-03-01"]);
    add(dir, &["Rent", "1200", "-c", "Housing", "-d", "2024-03-02"]);
    add(dir, &["Groceries", "150.25", "-c", "Food", "-d", "2024-03-05"]);
    add(dir, &["Dinner out", "49.75", "-c", "Food", "-d", "2024-03-09"]);
}

#[test]
fn test_init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default categories created"));

    ledger(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food").and(predicate::str::contains("#FF6B6B")));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());
}

#[test]
fn test_summary_for_month() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    ledger(&dir)
        .args(["summary", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Monthly Summary: March 2024")
                .and(predicate::str::contains("Income:        $3000.00"))
                .and(predicate::str::contains("Expenses:      $1400.00"))
                .and(predicate::str::contains("Net savings:   $1600.00"))
                .and(predicate::str::contains("Top category:  Housing ($1200.00)")),
        );

    ledger(&dir)
        .args(["summary", "--period", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top category:  none"));
}

#[test]
fn test_register_closing_balance() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    ledger(&dir)
        .args(["ledger", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ledger for March 2024")
                .and(predicate::str::contains("Closing balance: $1600.00")),
        );
}

#[test]
fn test_budget_limits_and_overspending() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    ledger(&dir)
        .args(["budget", "set", "--income", "3200", "--savings", "1000", "-p", "2024-03"])
        .assert()
        .success();
    ledger(&dir)
        .args(["budget", "limit", "Food", "150", "-p", "2024-03"])
        .assert()
        .success();

    ledger(&dir)
        .args(["budget", "show", "-p", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expected income: $3200.00")
                .and(predicate::str::contains("133.3%"))
                .and(predicate::str::contains("OVER")),
        );

    ledger(&dir)
        .args(["summary", "-p", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Income variance:  $200.00")
                .and(predicate::str::contains("Savings variance: $600.00"))
                .and(predicate::str::contains("Over budget: Food")),
        );

    ledger(&dir)
        .args(["budget", "show", "-p", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set"));
}

#[test]
fn test_savings_goal_deposits() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["goal", "add", "Vacation", "2000"])
        .assert()
        .success();
    ledger(&dir)
        .args(["goal", "deposit", "vacation", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$500.00 of $2000.00 (25.0%)"));

    ledger(&dir)
        .args(["goal", "deposit", "Vacation", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total saved: $500.00 of $2000.00 (25.0%)"));
}

#[test]
fn test_delete_transaction_by_short_id() {
    let dir = TempDir::new().unwrap();
    let out = add(&dir, &["Coffee", "3.50", "-c", "Food", "-d", "2024-03-01"]);

    let id = out
        .split_whitespace()
        .find(|word| word.starts_with("txn-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string();

    ledger(&dir)
        .args(["txn", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    ledger(&dir)
        .args(["txn", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    ledger(&dir)
        .args(["txn", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["txn", "add", "Lunch", "abc", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(&dir)
        .args(["summary", "--period", "2024-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(&dir)
        .args(["category", "add", "Gifts", "--color", "blue"])
        .assert()
        .failure();
}

#[test]
fn test_notes_round_trip() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["note", "set", "-p", "2024-03", "--notes", "Car repair"])
        .assert()
        .success();
    ledger(&dir)
        .args(["note", "set", "-p", "2024-03", "--reflection", "Cook more at home"])
        .assert()
        .success();

    ledger(&dir)
        .args(["note", "show", "-p", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Car repair")
                .and(predicate::str::contains("Cook more at home")),
        );
}

#[test]
fn test_exports() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    ledger(&dir)
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"schema_version\": \"1.0.0\"")
                .and(predicate::str::contains("\"transaction_count\": 4")),
        );

    ledger(&dir)
        .args(["export", "csv", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("ID,Date,Description,Category,Income,Expense")
                .and(predicate::str::contains("2024-03-05,Groceries,Food,,150.25")),
        );

    let yaml_path = dir.path().join("snapshot.yaml");
    ledger(&dir)
        .args(["export", "yaml", "--output"])
        .arg(&yaml_path)
        .assert()
        .success();
    let yaml = std::fs::read_to_string(&yaml_path).unwrap();
    assert!(yaml.starts_with("# monthly-ledger export"));
}

#[test]
fn test_audit_log_records_mutations() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Bus", "2.75", "-c", "Transport", "-d", "2024-03-01"]);
    ledger(&dir).args(["goal", "add", "Bike", "400"]).assert().success();

    ledger(&dir)
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE Transaction")
                .and(predicate::str::contains("CREATE SavingsGoal")),
        );
}

#[test]
fn test_budget_delete_and_zero_budget() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["budget", "set", "--income", "0", "-p", "2024-05"])
        .assert()
        .success();
    ledger(&dir)
        .args(["budget", "show", "-p", "2024-05"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expected income: $0.00")
                .and(predicate::str::contains("No budget set").not()),
        );

    ledger(&dir)
        .args(["budget", "delete", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted budget for May 2024"));
    ledger(&dir)
        .args(["budget", "show", "-p", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set"));

    ledger(&dir)
        .args(["budget", "delete", "2024-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found: 2024-05"));
}

