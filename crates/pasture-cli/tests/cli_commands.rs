//! Integration tests for the pasture CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pasture() -> Command {
    Command::cargo_bin("pasture").unwrap()
}

fn summary_json(args: &[&str]) -> serde_json::Value {
    let output = pasture().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_totals() {
    pasture()
        .args(["simulate", "10", "2", "2", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Totals"))
        .stdout(predicate::str::contains("Sheep (final)"))
        .stdout(predicate::str::contains("120 ticks"));
}

#[test]
fn simulate_json_summary() {
    let summary = summary_json(&["simulate", "10", "2", "1", "--seed", "5", "--json"]);
    assert_eq!(summary["ticks"], 60);
    assert_eq!(summary["stopped_by"], "elapsed");
    assert!(summary["final_sheep"].is_u64());
    assert!(summary["peak_sheep"].as_u64().unwrap() >= 10);
}

#[test]
fn simulate_is_reproducible_with_seed() {
    let args = ["simulate", "25", "3", "4", "--seed", "77", "--json"];
    assert_eq!(summary_json(&args), summary_json(&args));
}

#[test]
fn simulate_zero_seconds_runs_nothing() {
    let summary = summary_json(&["simulate", "4", "1", "0", "--json"]);
    assert_eq!(summary["ticks"], 0);
    assert_eq!(summary["final_sheep"], 4);
    assert_eq!(summary["final_wolves"], 1);
}

#[test]
fn simulate_verbose_shows_event_log() {
    pasture()
        .args(["simulate", "0", "1", "10", "--seed", "3", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log"))
        .stdout(predicate::str::contains("starved"));
}

#[test]
fn simulate_verbose_json_includes_events() {
    let output = pasture()
        .args(["simulate", "0", "1", "10", "--seed", "3", "--json", "--verbose"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["starvations"], 1);
    let events = value["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["tick"], 500);
    assert!(events[0]["kind"]["starved"]["wolf"].is_u64());
}

#[test]
fn simulate_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pasture.json");
    fs::write(&path, r#"{ "tick_rate": 10, "seed": 4 }"#).unwrap();

    let summary = summary_json(&[
        "simulate",
        "3",
        "0",
        "2",
        "--config",
        path.to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(summary["ticks"], 20);
}

#[test]
fn simulate_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "tick_rate": 0 }"#).unwrap();

    pasture()
        .args(["simulate", "3", "0", "1", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_rate"));
}

#[test]
fn simulate_fails_without_media() {
    let dir = TempDir::new().unwrap();
    pasture()
        .args(["simulate", "3", "1", "1", "--media", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to load image"));
}

#[test]
fn simulate_requires_counts() {
    pasture()
        .args(["simulate", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn simulate_rejects_negative_counts() {
    pasture()
        .args(["simulate", "-3", "1", "1"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_prints_defaults() {
    pasture()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tick_rate\": 60"))
        .stdout(predicate::str::contains("media/sheepsF"));
}

#[test]
fn config_output_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("defaults.json");

    pasture()
        .args(["config", "--output", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["wolf"]["starvation_ticks"], 500);

    pasture()
        .args(["simulate", "2", "0", "1", "--json", "--config", path.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn help_lists_commands() {
    pasture()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("config"));
}
