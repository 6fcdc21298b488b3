use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn ledgerview_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ledgerview"))
}

/// Initialize a config dir from the templates and return its path
fn init_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("ledgerview-config");
    ledgerview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();
    config_path
}

fn run_with(config_path: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    ledgerview_cmd()
        .args(["-C", config_path.to_str().unwrap()])
        .args(args)
        .assert()
}

#[test]
fn test_help() {
    ledgerview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search, page, report and export accounting records",
        ));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ledgerview-config");

    ledgerview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ledgerview config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("data.toml").exists());
    assert!(config_path.join("output").is_dir());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["init"])
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_status_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    run_with(&config_path, &["status"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["status"])
        .success()
        .stdout(predicate::str::contains("Ledgerview Status"))
        .stdout(predicate::str::contains("Customers:        4"))
        .stdout(predicate::str::contains("Page size:        10"));
}

#[test]
fn test_list_search_filters_rows() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["list", "customers", "--search", "PUNE"])
        .success()
        .stdout(predicate::str::contains("Acme Traders"))
        .stdout(predicate::str::contains("Globex").not())
        .stdout(predicate::str::contains("Showing 1-1 of 1 (page 1 of 1)"));
}

#[test]
fn test_list_paginates() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(
        &config_path,
        &["list", "invoices", "--page-size", "3", "--page", "2"],
    )
    .success()
    .stdout(predicate::str::contains("INV-2024-004"))
    .stdout(predicate::str::contains("INV-2024-001").not())
    .stdout(predicate::str::contains("Showing 4-4 of 4 (page 2 of 2)"));
}

#[test]
fn test_list_page_beyond_range_is_clamped() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(
        &config_path,
        &["list", "products", "--page-size", "3", "--page", "9"],
    )
    .success()
    .stdout(predicate::str::contains("page 2 of 2"));
}

#[test]
fn test_list_category_and_date_range() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(
        &config_path,
        &[
            "list",
            "invoices",
            "--category",
            "overdue",
            "--from",
            "2024-02-01",
            "--to",
            "2024-02-29",
        ],
    )
    .success()
    .stdout(predicate::str::contains("INV-2024-003"))
    .stdout(predicate::str::contains("35,000.00"))
    .stdout(predicate::str::contains("INV-2024-002").not());
}

#[test]
fn test_list_no_matches() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["list", "users", "--search", "nobody"])
        .success()
        .stdout(predicate::str::contains("No users match the given filters."));
}

#[test]
fn test_invalid_date_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["list", "invoices", "--from", "15/01/2024"])
        .failure()
        .stderr(predicate::str::contains("Invalid --from date"));
}

#[test]
fn test_zero_page_size_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["list", "invoices", "--page-size", "0"])
        .failure()
        .stderr(predicate::str::contains("Page size must be greater than zero"));
}

#[test]
fn test_aging_report() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["report", "aging"])
        .success()
        .stdout(predicate::str::contains("Aging Report"))
        .stdout(predicate::str::contains("Acme Traders"))
        .stdout(predicate::str::contains("45,000.00"))
        .stdout(predicate::str::contains("Total outstanding: ₹65,000.00"))
        .stdout(predicate::str::contains("Umbrella Pharma").not());
}

#[test]
fn test_aging_report_all_groups() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["report", "aging", "--all-groups"])
        .success()
        .stdout(predicate::str::contains("Umbrella Pharma"));
}

#[test]
fn test_stock_report() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["report", "stock"])
        .success()
        .stdout(predicate::str::contains("hardware"))
        .stdout(predicate::str::contains("3,250.00"))
        .stdout(predicate::str::contains("50,000.00"));
}

#[test]
fn test_balances_report() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["report", "balances"])
        .success()
        .stdout(predicate::str::contains("BALANCE"))
        .stdout(predicate::str::contains("-15,000.00"));
}

#[test]
fn test_export_json_contains_filtered_rows() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let output = temp_dir.path().join("acme.json");

    run_with(
        &config_path,
        &[
            "export",
            "invoices",
            "--format",
            "json",
            "--search",
            "acme",
            "--output",
            output.to_str().unwrap(),
        ],
    )
    .success()
    .stdout(predicate::str::contains("Rows:  2"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["title"], "Invoices");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["rows"][0][0], "INV-2024-001");
}

#[test]
fn test_export_json_default_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["export", "aging", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("Exported Aging Report"));

    let exported: Vec<_> = fs::read_dir(config_path.join("output"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("aging-report-"));
    assert!(exported[0].ends_with(".json"));
}

#[test]
fn test_export_pdf_without_typst() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    ledgerview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "export", "invoices"])
        .env("PATH", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Typst not found"));
}

#[test]
fn test_invalid_seed_record_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    fs::write(
        config_path.join("data.toml"),
        r#"
[[invoices]]
number = "INV-BAD-001"
customer_id = "c1"
customer = "Acme Traders"
date = "2024-01-15"
amount = 1000
outstanding = 5000
status = "partial"
"#,
    )
    .unwrap();

    run_with(&config_path, &["list", "invoices"])
        .failure()
        .stderr(predicate::str::contains("Invalid invoice 'INV-BAD-001'"))
        .stderr(predicate::str::contains("exceeds invoice amount"));
}

#[test]
fn test_empty_aging_total_is_not_negative_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    run_with(&config_path, &["report", "aging", "--category", "nope"])
        .success()
        .stdout(predicate::str::contains("Total outstanding: ₹0.00"))
        .stdout(predicate::str::contains("-0.00").not());
}
