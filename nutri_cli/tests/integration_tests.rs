//! Integration tests for the nutri binary.
//!
//! These tests verify end-to-end behavior including:
//! - Metrics report (text and JSON)
//! - Day summaries against the recommended target
//! - Weight trend windows
//! - Snapshot and CSV loading from the data directory

use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from any user config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nutri").expect("Failed to find nutri binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Male, 175 cm, 30 years, activity 1.5, losing 4 kg/month at 70 kg.
/// The goal is aggressive enough to hit the safety floor (1484 kcal).
fn aggressive_loss_snapshot() -> Value {
    json!({
        "profile": {
            "height_cm": 175.0,
            "age_years": 30,
            "sex": "male",
            "activity_multiplier": 1.5,
            "monthly_weight_goal_kg": -4.0
        },
        "weights": [
            { "weight_kg": 78.0, "timestamp": "2024-01-08T07:00:00Z" },
            { "weight_kg": 70.0, "timestamp": "2024-01-15T07:00:00Z" },
            { "weight_kg": 80.0, "timestamp": "2024-01-01T07:00:00Z" }
        ],
        "food_log": {
            "2024-01-15": [
                { "calories_per_serving": 350, "protein_g_per_serving": 20,
                  "carbs_g_per_serving": 40, "fat_g_per_serving": 10,
                  "serving_multiplier": 1.0, "meal_slot": "breakfast" },
                { "name": "chicken wrap", "calories_per_serving": 300,
                  "protein_g_per_serving": 25, "carbs_g_per_serving": 30,
                  "fat_g_per_serving": 10, "serving_multiplier": 2.0,
                  "meal_slot": "lunch" }
            ]
        }
    })
}

fn write_snapshot(dir: &Path, snapshot: &Value) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    path
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be valid JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health metrics and nutrition planning"));
}

#[test]
fn test_report_text() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("70.0 kg"))
        .stdout(predicate::str::contains("22.9 (Normal)"))
        .stdout(predicate::str::contains("1484 kcal/day to lose weight"))
        .stdout(predicate::str::contains("safety floor"));
}

#[test]
fn test_report_is_default_command() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Body composition"));
}

#[test]
fn test_report_json() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    let output = cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output.stdout);
    assert_eq!(report["recommended_daily_calories"], 1484);
    assert_eq!(report["bmr"], 1648.75);
    assert_eq!(report["exercise"]["safety_adjusted"], true);
    assert_eq!(report["exercise"]["recommendation"], "lose");
    assert_eq!(report["bmi_category"], "normal");
    assert_eq!(report["missing_fields"].as_array().unwrap().len(), 0);

    let split = &report["macro_split"];
    let total = split["protein_pct"].as_i64().unwrap()
        + split["carbs_pct"].as_i64().unwrap()
        + split["fat_pct"].as_i64().unwrap();
    assert_eq!(total, 100);
}

#[test]
fn test_report_imperial_units() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--units")
        .arg("imperial")
        .assert()
        .success()
        .stdout(predicate::str::contains("154.3 lb"))
        .stdout(predicate::str::contains("5'9\""));
}

#[test]
fn test_invalid_units_rejected() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--units")
        .arg("stone")
        .assert()
        .failure();
}

#[test]
fn test_day_summary_text() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("day")
        .arg("--date")
        .arg("2024-01-15")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("Breakfast"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("534 kcal remaining"));
}

#[test]
fn test_day_summary_json_defaults_to_latest_day() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    let output = cli(&temp_dir)
        .arg("day")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let day = stdout_json(&output.stdout);
    assert_eq!(day["date"], "2024-01-15");
    assert_eq!(day["summary"]["totals"]["calories"], 950.0);
    assert_eq!(day["summary"]["per_meal"]["lunch"]["protein_g"], 50.0);
    assert_eq!(day["progress"]["target_calories"], 1484);
    assert_eq!(day["progress"]["remaining_calories"], 534);
}

#[test]
fn test_empty_day_has_zero_percentages() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    let output = cli(&temp_dir)
        .arg("day")
        .arg("--date")
        .arg("2023-12-25")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let day = stdout_json(&output.stdout);
    assert_eq!(day["summary"]["totals"]["calories"], 0.0);
    assert_eq!(day["summary"]["macro_pct"]["protein"], 0.0);
    assert_eq!(day["summary"]["macro_pct"]["fat"], 0.0);
}

#[test]
fn test_trend_since_date() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    // First qualifying observation is 78 kg on the 8th
    cli(&temp_dir)
        .arg("trend")
        .arg("--since")
        .arg("2024-01-06")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("-8.0 kg"));
}

#[test]
fn test_trend_without_history_in_window() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("trend")
        .arg("--since")
        .arg("2030-01-01")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough weight history"));
}

/// Weights 20, 3 and 1 days before now (85, 82, 81 kg)
fn recent_weights_snapshot() -> Value {
    let now = Utc::now();
    let at = |days_ago: i64| (now - Duration::days(days_ago)).to_rfc3339();
    json!({
        "weights": [
            { "weight_kg": 82.0, "timestamp": at(3) },
            { "weight_kg": 85.0, "timestamp": at(20) },
            { "weight_kg": 81.0, "timestamp": at(1) }
        ]
    })
}

#[test]
fn test_trend_last_days() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &recent_weights_snapshot());

    // Baseline is the 82 kg reading 3 days ago
    cli(&temp_dir)
        .arg("trend")
        .arg("--days")
        .arg("7")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("over the last 7 days: -1.0 kg"));
}

#[test]
fn test_trend_huge_window_uses_full_history() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &recent_weights_snapshot());

    let output = cli(&temp_dir)
        .arg("trend")
        .arg("--days")
        .arg("1000000000")
        .arg("--json")
        .arg("--snapshot")
        .arg(&snapshot)
        .output()
        .unwrap();

    assert!(output.status.success());
    let trend = stdout_json(&output.stdout);
    assert_eq!(trend["change_kg"], -4.0);
}

#[test]
fn test_trend_negative_days_rejected() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &recent_weights_snapshot());

    cli(&temp_dir)
        .arg("trend")
        .arg("--days=-7")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .failure();
}

#[test]
fn test_trend_days_and_since_conflict() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("trend")
        .arg("--days")
        .arg("7")
        .arg("--since")
        .arg("2024-01-06")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .failure();
}

#[test]
fn test_missing_fields_for_empty_profile() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &json!({}));

    cli(&temp_dir)
        .arg("missing")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing: Weight, Height, Age, Gender, Activity Level",
        ));
}

#[test]
fn test_missing_fields_complete_profile() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("missing")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile complete"));
}

#[test]
fn test_empty_profile_report_degrades() {
    let temp_dir = setup_test_dir();
    let snapshot = write_snapshot(temp_dir.path(), &json!({}));

    let output = cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output.stdout);
    assert!(report["bmi"].is_null());
    assert!(report["bmr"].is_null());
    assert_eq!(report["recommended_daily_calories"], 0);
    assert_eq!(report["activity_level"], "Not set");
    assert_eq!(report["macro_split"]["protein_pct"], 30);
    assert_eq!(report["exercise"]["recommendation"], "unavailable");
}

#[test]
fn test_missing_explicit_snapshot_fails() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshot file not found"));
}

#[test]
fn test_data_dir_merges_weight_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    write_snapshot(&data_dir, &aggressive_loss_snapshot());
    fs::write(
        data_dir.join("weights.csv"),
        "timestamp,weight_kg,note\n2024-02-01T07:00:00Z,72.0,\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("report")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("72.0 kg"));
}

#[test]
fn test_config_units_used_when_profile_has_none() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config/nutri");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[display]\nunits = \"imperial\"\n").unwrap();
    let snapshot = write_snapshot(temp_dir.path(), &aggressive_loss_snapshot());

    cli(&temp_dir)
        .arg("report")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("154.3 lb"));
}
