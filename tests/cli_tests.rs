//! Command-line interface tests.
//!
//! Parses argument vectors with `Cli::try_parse_from` and runs them into a
//! byte buffer; snapshot, settings and state files live in a temp dir.

use clap::Parser;
use std::fs;
use tabstrip::cli::{Cli, run};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

const SNAPSHOT: &str = r#"{
  "windowId": 1,
  "tabs": [
    {"id": 1, "index": 0, "title": "Inbox", "pinned": true},
    {"id": 2, "index": 1, "title": "Docs", "groupId": 10},
    {"id": 3, "index": 2, "title": "Spec", "groupId": 10},
    {"id": 4, "index": 3, "title": "News"},
    {"id": 5, "index": 4, "title": "Music"}
  ],
  "groups": [{"id": 10, "title": "work"}]
}"#;

fn write_snapshot(dir: &TempDir) -> String {
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT).expect("write snapshot");
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Argument Parsing
// ============================================================================

#[test]
fn test_move_requires_a_target() {
    let neither = ["tabstrip", "move", "--tab", "1"];
    assert!(Cli::try_parse_from(neither).is_err());
    let both = ["tabstrip", "move", "--tab", "1", "--to", "2", "--row", "0"];
    assert!(Cli::try_parse_from(both).is_err());
    let index = ["tabstrip", "move", "--tab", "1", "--to", "2"];
    assert!(Cli::try_parse_from(index).is_ok());
}

#[test]
fn test_snapshot_and_demo_tabs_conflict() {
    let parsed = Cli::try_parse_from(["tabstrip", "plan", "--snapshot", "a.json", "--tabs", "3"]);
    assert!(parsed.is_err());
}

#[test]
fn test_log_level_is_global() {
    let cli = Cli::try_parse_from(["tabstrip", "plan", "--log-level", "debug"]).expect("parses");
    assert_eq!(
        cli.log_level.map(|l| l.to_level_filter()),
        Some(log::LevelFilter::Debug)
    );
}

// ============================================================================
// Plan
// ============================================================================

#[test]
fn test_plan_demo_overflow() {
    let output = run_args(&[
        "tabstrip",
        "plan",
        "--tabs",
        "10",
        "--rows",
        "2",
        "--per-row",
        "3",
    ])
    .expect("runs");
    assert!(output.contains("full (2 rows x 3):"), "{output}");
    assert!(output.contains("  row 0: 1 2 3\n"), "{output}");
    assert!(output.contains("  row 1: 4 5 6 7 8 9 10\n"), "{output}");
}

#[test]
fn test_plan_with_search_keeps_full_rows() {
    let dir = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(&dir);
    let output = run_args(&[
        "tabstrip",
        "plan",
        "--snapshot",
        &snapshot,
        "--rows",
        "2",
        "--per-row",
        "3",
        "--search",
        "S",
    ])
    .expect("runs");
    assert!(output.contains("  row 0: 1* 2 3\n"), "{output}");
    assert!(output.contains("visible (search \"s\"):"), "{output}");
    // "Docs", "Spec", "News", "Music" all contain an s; "Inbox" does not
    assert!(output.contains("  row 0: 2 3\n"), "{output}");
}

#[test]
fn test_plan_search_without_matches() {
    let output = run_args(&["tabstrip", "plan", "--tabs", "3", "--search", "zzz"]).expect("runs");
    assert!(output.contains("(no matching tabs)"), "{output}");
}

#[test]
fn test_plan_reads_collapsed_state() {
    let dir = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(&dir);
    let state = dir.path().join("state.json");
    fs::write(&state, r#"{"1": {"10": true}}"#).expect("write state");
    let settings = dir.path().join("settings.yaml");
    fs::write(&settings, "show_groups: true\nrow_count: 1\n").expect("write settings");

    let output = run_args(&[
        "tabstrip",
        "plan",
        "--snapshot",
        &snapshot,
        "--settings",
        &settings.to_string_lossy(),
        "--state",
        &state.to_string_lossy(),
    ])
    .expect("runs");
    assert!(output.contains("[work (collapsed): ]"), "{output}");
}

#[test]
fn test_plan_missing_snapshot_fails() {
    let err = run_args(&[
        "tabstrip",
        "plan",
        "--snapshot",
        "/nonexistent/snapshot.json",
    ])
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read snapshot"));
}

// ============================================================================
// Move and MoveGroup
// ============================================================================

#[test]
fn test_move_clamps_after_pinned_and_applies() {
    let dir = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(&dir);
    let output = run_args(&[
        "tabstrip",
        "move",
        "--snapshot",
        &snapshot,
        "--tab",
        "5",
        "--to",
        "0",
        "--apply",
    ])
    .expect("runs");
    assert_eq!(output, "move 5 -> 1\norder: 1* 5 2 3 4\n");
}

#[test]
fn test_move_to_row_end() {
    // Rows [1 2 3] [4 5]: dropping tab 1 on row 1 sends it to the end
    let output = run_args(&[
        "tabstrip",
        "move",
        "--tabs",
        "5",
        "--rows",
        "2",
        "--per-row",
        "3",
        "--tab",
        "1",
        "--row",
        "1",
    ])
    .expect("runs");
    assert_eq!(output, "move 1 -> end\n");
}

#[test]
fn test_move_to_missing_row_fails() {
    let result = run_args(&[
        "tabstrip",
        "move",
        "--tabs",
        "5",
        "--rows",
        "2",
        "--tab",
        "1",
        "--row",
        "4",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_move_in_place_is_noop() {
    let output = run_args(&[
        "tabstrip",
        "move",
        "--tabs",
        "4",
        "--tab",
        "2",
        "--to",
        "2",
    ])
    .expect("runs");
    assert_eq!(output, "no-op: same position\n");
    let output = run_args(&[
        "tabstrip",
        "move",
        "--tabs",
        "4",
        "--tab",
        "9",
        "--to",
        "0",
    ])
    .expect("runs");
    assert_eq!(output, "no-op: source not found\n");
}

#[test]
fn test_move_group_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(&dir);
    let output = run_args(&[
        "tabstrip",
        "move-group",
        "--snapshot",
        &snapshot,
        "--group",
        "10",
        "--to",
        "5",
        "--apply",
    ])
    .expect("runs");
    assert_eq!(output, "move-block [2, 3] -> end\norder: 1* 4 5 2 3\n");
}

#[test]
fn test_move_unknown_group_fails() {
    let result = run_args(&[
        "tabstrip",
        "move-group",
        "--tabs",
        "3",
        "--group",
        "4",
        "--to",
        "0",
    ]);
    assert!(result.is_err());
}
