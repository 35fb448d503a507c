//! Integration tests for the reelcut command line.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An empty file with a video extension; `--duration` keeps ffprobe away from it.
fn fake_video(dir: &Path) -> PathBuf {
    let path = dir.join("talk.mp4");
    std::fs::write(&path, b"").unwrap();
    path
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn write_energy(dir: &Path) -> PathBuf {
    let mut csv = String::from("Time (s),RMS\n");
    for t in 0..120 {
        let rms = if (60..80).contains(&t) { 0.8 } else { 0.1 };
        writeln!(csv, "{t},{rms}").unwrap();
    }
    let path = dir.join("energy.csv");
    std::fs::write(&path, csv).unwrap();
    path
}

#[test]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--num-shorts"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_config_path_with_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg("--config")
        .arg(&config)
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(config.exists());

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[selection]"))
        .stdout(predicate::str::contains("num_shorts = 3"));
}

#[test]
fn test_missing_video() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(dir.path().join("nope.mp4"))
        .args(["--duration", "120", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("video file does not exist"));
}

#[test]
fn test_unsupported_video_extension() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "hello").unwrap();

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(&notes)
        .args(["--duration", "120", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported video format"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path());

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(&video)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--duration", "120", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_invalid_config_fails_validation() {
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path());
    let config = write_config(dir.path(), "[selection]\noverlap_threshold = 1.5\n");

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(&video)
        .arg("--config")
        .arg(&config)
        .args(["--duration", "120", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration validation failed"));
}

#[test]
fn test_zero_shorts_rejected() {
    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.args(["talk.mp4", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_dry_run_json_result() {
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path());
    let config = write_config(dir.path(), "[selection]\nnum_shorts = 3\n");
    let energy = write_energy(dir.path());
    let out_dir = dir.path().join("shorts");

    let mut cmd = cargo_bin_cmd!("reelcut");
    let output = cmd
        .arg(&video)
        .arg("--config")
        .arg(&config)
        .arg("--energy")
        .arg(&energy)
        .arg("-o")
        .arg(&out_dir)
        .args([
            "--skip-transcript",
            "--duration",
            "120",
            "--dry-run",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(value["spec_version"], "1.0");
    assert_eq!(value["event"], "result");
    let payload = &value["payload"];
    assert_eq!(payload["result_type"], "shorts");
    assert_eq!(payload["dry_run"], true);
    assert_eq!(payload["requested"], 3);
    assert_eq!(payload["duration"], 120.0);

    let shorts = payload["shorts"].as_array().unwrap();
    assert!(!shorts.is_empty());
    assert!(shorts.len() <= 3);

    let mut previous_start = 0;
    for short in shorts {
        let start = short["start"].as_u64().unwrap();
        let end = short["end"].as_u64().unwrap();
        assert!(start >= previous_start);
        assert!(start < end && end <= 120);
        previous_start = start;

        let path = short["path"].as_str().unwrap();
        assert!(path.ends_with(".mp4"));
        assert!(Path::new(path).starts_with(&out_dir));
    }

    // Nothing was extracted
    assert!(!out_dir.exists());
}

#[test]
fn test_dry_run_human_report() {
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path());
    let config = write_config(dir.path(), "");

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(&video)
        .arg("--config")
        .arg(&config)
        .args(["-n", "2", "--duration", "300", "--dry-run", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned"))
        .stdout(predicate::str::contains("short_1_score_"));
}

#[test]
fn test_broken_transcript_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let video = fake_video(dir.path());
    let config = write_config(dir.path(), "");
    let transcript = dir.path().join("transcript.json");
    std::fs::write(&transcript, "not json at all").unwrap();

    let mut cmd = cargo_bin_cmd!("reelcut");
    cmd.arg(&video)
        .arg("--config")
        .arg(&config)
        .arg("--transcript")
        .arg(&transcript)
        .args(["--duration", "90", "--dry-run", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Transcript unavailable"));
}
