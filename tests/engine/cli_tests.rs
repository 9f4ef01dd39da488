// Tests for the purge binary: arguments, exit codes and console output

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn purge(args: &[&str], config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_purge"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("PURGE_LOG")
        .output()
        .unwrap()
}

fn empty_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, "").unwrap();
    path
}

#[test]
fn test_no_path_prints_usage() {
    let tmp = TempDir::new().unwrap();
    let output = purge(&[], &empty_config(tmp.path()));

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: purge"));
}

#[test]
fn test_two_paths_print_usage_and_touch_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = empty_config(tmp.path());
    let first = tmp.path().join("first");
    let second = tmp.path().join("second");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();

    let output = purge(
        &[first.to_str().unwrap(), second.to_str().unwrap()],
        &config,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: purge"));
    assert!(first.is_dir());
    assert!(second.is_dir());
}

#[test]
fn test_removes_tree_and_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let config = empty_config(tmp.path());
    let a = tmp.path().join("a");
    fs::create_dir_all(a.join("c")).unwrap();
    fs::write(a.join("b.txt"), b"data").unwrap();

    let output = purge(&[a.to_str().unwrap()], &config);

    assert_eq!(output.status.code(), Some(0));
    assert!(!a.exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("Scanning \"{}\"", a.display())));
    assert!(stdout.contains("Total files: 3"));
    assert!(stdout.contains(" 3/3 Elapsed "));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_missing_path_reports_and_exits_one() {
    let tmp = TempDir::new().unwrap();
    let config = empty_config(tmp.path());
    let missing = tmp.path().join("nothing-here");

    let output = purge(&[missing.to_str().unwrap()], &config);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("opendir: "));
    assert!(stderr.contains("nothing-here"));
}

#[test]
fn test_bad_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("broken.toml");
    fs::write(&config, "progress_interval_ms = \"soon\"").unwrap();
    let target = tmp.path().join("target");
    fs::create_dir(&target).unwrap();

    let output = purge(&[target.to_str().unwrap()], &config);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
    assert!(target.is_dir());
}

#[test]
fn test_help_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = purge(&["--help"], &empty_config(tmp.path()));
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--config"));
}

#[test]
fn test_dash_prefixed_path_after_separator() {
    let tmp = TempDir::new().unwrap();
    let config = empty_config(tmp.path());
    let dashed = tmp.path().join("-dash");
    fs::create_dir_all(dashed.join("inner")).unwrap();
    fs::write(dashed.join("inner/file"), b"x").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_purge"))
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["--", "-dash"])
        .env_remove("PURGE_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Scanning \"-dash\""));
    assert!(!dashed.exists());
}

#[test]
fn test_help_documents_separator() {
    let tmp = TempDir::new().unwrap();
    let output = purge(&["--help"], &empty_config(tmp.path()));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[--] <PATH>"));
    assert!(stdout.contains("must follow `--`"));
}
