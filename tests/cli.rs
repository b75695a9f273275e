use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

/// A data directory with simulated latency switched off
fn data_dir() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"latency": {"read_ms": 0, "write_ms": 0, "aggregate_ms": 0}}"#,
    )
    .unwrap();
    home
}

fn budget_easy(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget-easy").unwrap();
    cmd.env("BUDGET_EASY_DATA_DIR", home).env_remove("BUDGET_EASY_LOG");
    cmd
}

fn run(home: &Path, args: &[&str]) {
    budget_easy(home).args(args).assert().success();
}

#[test]
fn init_with_demo_data_lists_categories() {
    let home = data_dir();

    budget_easy(home.path())
        .args(["init", "--demo", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("10 categories, 18 expenses, 7 budget goals"));

    budget_easy(home.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(
            contains("Housing")
                .and(contains("Budget: $1300.00"))
                .and(contains("Not set")),
        );

    assert!(home.path().join("data").join("store.json").exists());
}

#[test]
fn progress_report_flags_over_budget_category() {
    let home = data_dir();
    run(home.path(), &["init", "--demo", "--month", "2024-06"]);

    budget_easy(home.path())
        .args(["report", "progress"])
        .assert()
        .success()
        .stdout(contains("$190.00 left").and(contains("$1275.00 spent of $1300.00")));

    run(
        home.path(),
        &[
            "expense",
            "add",
            "Anniversary Dinner",
            "250",
            "--category",
            "food & dining",
            "--date",
            "2024-06-29",
        ],
    );

    budget_easy(home.path())
        .args(["report", "progress"])
        .assert()
        .success()
        .stdout(contains("$60.00 over").and(contains("1 category over budget")));
}

#[test]
fn deleting_a_category_removes_its_expenses() {
    let home = data_dir();
    run(home.path(), &["init"]);
    run(home.path(), &["category", "add", "Food", "--icon", "utensils"]);
    run(home.path(), &["expense", "add", "Lunch", "30", "-c", "Food", "-d", "2024-06-01"]);
    run(home.path(), &["expense", "add", "Dinner", "20", "-c", "Food", "-d", "2024-06-02"]);
    run(home.path(), &["goal", "set", "Food", "40"]);

    budget_easy(home.path())
        .args(["report", "spending"])
        .assert()
        .success()
        .stdout(contains("$50.00").and(contains("$40.00")));

    budget_easy(home.path())
        .args(["category", "delete", "Food"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    budget_easy(home.path())
        .args(["category", "delete", "Food", "--force"])
        .assert()
        .success()
        .stdout(contains("Removed 2 expense(s)"));

    budget_easy(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn invalid_goal_limit_clears_budget_with_or_without_dates() {
    let home = data_dir();
    run(home.path(), &["init"]);
    run(home.path(), &["category", "add", "Food", "--limit", "300"]);

    budget_easy(home.path())
        .args(["goal", "set", "Food", "lots"])
        .assert()
        .success()
        .stdout(contains("Budget for Food cleared"));

    run(home.path(), &["goal", "set", "Food", "300"]);

    budget_easy(home.path())
        .args([
            "goal", "set", "Food", "lots", "--from", "2024-06-01", "--to", "2024-06-30",
        ])
        .assert()
        .success()
        .stdout(
            contains("Budget for Food cleared").and(contains("Period: 2024-06-01 to 2024-06-30")),
        );

    budget_easy(home.path())
        .args(["goal", "set", "Food", "-25", "--from", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Budget for Food cleared"));
}

#[test]
fn empty_chart_has_message() {
    let home = data_dir();
    run(home.path(), &["init"]);
    run(home.path(), &["category", "add", "Travel"]);

    budget_easy(home.path())
        .args(["report", "chart"])
        .assert()
        .success()
        .stdout(contains("No spending data to display."));
}

#[test]
fn export_writes_csv() {
    let home = data_dir();
    run(home.path(), &["init", "--demo", "--month", "2024-06"]);
    let output = home.path().join("spending.csv");

    budget_easy(home.path())
        .args(["report", "export"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported 10 categories"));

    let csv_text = std::fs::read_to_string(&output).unwrap();
    assert!(csv_text.starts_with("Category,Color,Spent,Budget Limit,Share %"));
    assert!(csv_text.contains("Housing,hsl(var(--chart-3)),1275.00,1300.00,"));
}

#[test]
fn unknown_category_is_reported() {
    let home = data_dir();
    run(home.path(), &["init"]);

    budget_easy(home.path())
        .args(["category", "show", "Rent"])
        .assert()
        .failure()
        .stderr(contains("Category not found: Rent"));
}

#[test]
fn history_shows_audited_changes() {
    let home = data_dir();
    run(home.path(), &["init"]);
    run(home.path(), &["category", "add", "Pets"]);

    budget_easy(home.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("CREATE Category").and(contains("(Pets)")));
}

#[test]
fn config_shows_paths() {
    let home = data_dir();

    budget_easy(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("store.json").and(contains("read 0, write 0, aggregate 0")));
}
