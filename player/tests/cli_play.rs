//! CLI tests for `player init` and `player play`.
//!
//! Spawns the player binary and verifies the written config and the exit codes.

use std::fs;
use std::process::Command;

use player::exit_codes;
use player::io::config::{PlayerConfig, load_config};
use player::io::report_store::load_report;

#[test]
fn init_writes_default_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = Command::new(env!("CARGO_BIN_EXE_player"))
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("player init");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let path = temp.path().join("player.toml");
    let cfg = load_config(&path).expect("load config");
    assert_eq!(cfg, PlayerConfig::default());
    let raw = fs::read_to_string(&path).expect("read config");
    assert!(raw.contains("[policy]"));
    assert!(raw.contains("life_item_id = \"hpot\""));

    let status = Command::new(env!("CARGO_BIN_EXE_player"))
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("player init again");
    assert_eq!(status.code(), Some(exit_codes::INVALID));

    let status = Command::new(env!("CARGO_BIN_EXE_player"))
        .current_dir(temp.path())
        .args(["init", "--force"])
        .status()
        .expect("player init --force");
    assert_eq!(status.code(), Some(exit_codes::OK));
}

#[test]
fn play_against_unreachable_service_exits_errored() {
    let temp = tempfile::tempdir().expect("tempdir");
    let report_path = temp.path().join("out/report.json");

    let output = Command::new(env!("CARGO_BIN_EXE_player"))
        .current_dir(temp.path())
        .args(["play", "--games", "2", "--base-url", "http://127.0.0.1:1/api/v2"])
        .arg("--output")
        .arg(&report_path)
        .output()
        .expect("player play");

    assert_eq!(output.status.code(), Some(exit_codes::ERRORED));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("game 1 error: errored"), "{stdout}");
    assert!(stdout.contains("game 2 error: errored"), "{stdout}");
    assert!(stdout.contains("played 2: won 0, failed 2"), "{stdout}");

    let stored = load_report(&report_path).expect("load report");
    assert_eq!(stored.report.total_games_played, 2);
    assert_eq!(stored.report.errored_games(), 2);
}

#[test]
fn play_rejects_zero_games() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = Command::new(env!("CARGO_BIN_EXE_player"))
        .current_dir(temp.path())
        .args(["play", "--games", "0"])
        .status()
        .expect("player play");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
