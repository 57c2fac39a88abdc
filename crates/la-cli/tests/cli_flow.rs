//! End-to-end tests driving the `la` binary.
//!
//! Tests the full pipeline: generate → read → aggregate → report.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn la_binary() -> String {
    env!("CARGO_BIN_EXE_la").to_string()
}

/// Runs `la` with `HOME` pointed at `home` so no user config leaks in.
fn run_la(home: &Path, args: &[&str]) -> Output {
    Command::new(la_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("LA_YEARS_SPAN")
        .env_remove("LA_LOG_PATH")
        .args(args)
        .output()
        .expect("failed to run la")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn generate(temp: &TempDir, count: usize) -> String {
    let log = temp.path().join("demo.log");
    let log = log.to_str().unwrap().to_string();
    let output = run_la(
        temp.path(),
        &[
            "generate",
            &log,
            "--count",
            &count.to_string(),
            "--seed",
            "42",
            "--start-year",
            "2015",
        ],
    );
    assert!(output.status.success(), "generate failed: {}", stderr(&output));
    log
}

#[test]
fn test_generate_then_json_report_counts_every_entry() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 200);

    let output = run_la(temp.path(), &["report", &log, "--json"]);
    assert!(output.status.success(), "report failed: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total_accesses"], 200);
    assert_eq!(json["years_span"], 5);

    let month_total: u64 = json["month_counts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(month_total, 200);

    let busiest = json["busiest_month"].as_u64().unwrap();
    assert!((1..=12).contains(&busiest));
}

#[test]
fn test_years_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 20);

    let output = run_la(temp.path(), &["report", &log, "--json", "--years", "2"]);
    assert!(output.status.success(), "report failed: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["years_span"], 2);
}

#[test]
fn test_zero_years_flag_rejected() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 20);

    let output = run_la(temp.path(), &["report", &log, "--years", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_file_sets_years_span() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 20);
    let config = temp.path().join("la.toml");
    std::fs::write(&config, "years_span = 4\n").unwrap();

    let output = run_la(
        temp.path(),
        &["--config", config.to_str().unwrap(), "report", &log, "--json"],
    );
    assert!(output.status.success(), "report failed: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["years_span"], 4);
}

#[test]
fn test_human_report_sections() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 50);

    let output = run_la(temp.path(), &["report", &log]);
    assert!(output.status.success(), "report failed: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("HOURLY"));
    assert!(text.contains("MONTHLY"));
    assert!(text.contains("Total accesses:  50"));
}

#[test]
fn test_hourly_counts_every_entry() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 100);

    let output = run_la(temp.path(), &["hourly", &log]);
    assert!(output.status.success(), "hourly failed: {}", stderr(&output));

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Hr: Count"));
    let total: u64 = lines
        .map(|line| line.split_once(": ").unwrap().1.parse::<u64>().unwrap())
        .sum();
    assert_eq!(total, 100);
}

#[test]
fn test_entries_lists_generated_lines() {
    let temp = TempDir::new().unwrap();
    let log = generate(&temp, 30);

    let output = run_la(temp.path(), &["entries", &log]);
    assert!(output.status.success(), "entries failed: {}", stderr(&output));

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 30);
    assert_eq!(text, std::fs::read_to_string(&log).unwrap());
}

#[test]
fn test_out_of_range_entry_fails_report() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("bad.log");
    std::fs::write(&log, "2015 01 01 00 00\n2015 02 29 10 00\n").unwrap();

    let output = run_la(temp.path(), &["report", log.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("day 29 out of range"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_malformed_line_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("bad.log");
    std::fs::write(&log, "2015 01 01 00 00\n\n2015 02 xx 10 00\n").unwrap();

    let output = run_la(temp.path(), &["hourly", log.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid entry on line 3"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();
    let output = run_la(temp.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
