// Tests for the delete phase against the local filesystem

use purge::{
    DeleteError, DeletionPlan, Executor, Geometry, LocalRemover, PlannedRemoval,
    ProgressRenderer, Scanner, TerminalSize,
};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn executor() -> Executor<LocalRemover, Vec<u8>> {
    let size = Arc::new(TerminalSize::fixed(Geometry::new(80, 25)));
    Executor::new(LocalRemover, ProgressRenderer::new(Vec::new(), size))
}

#[test]
fn test_scenario_scan_then_delete() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a");
    fs::create_dir_all(a.join("c")).unwrap();
    fs::write(a.join("b.txt"), b"bytes").unwrap();

    let plan = Scanner::new().scan(&a).unwrap();
    let mut exec = executor();
    let stats = exec.execute(plan).unwrap();

    assert_eq!(stats.removed(), 3);
    assert!(!a.exists());
    assert!(tmp.path().exists());

    let out = String::from_utf8(exec.into_renderer().into_inner()).unwrap();
    let last_frame = out.rsplit("\x1b[1G").next().unwrap();
    assert!(last_frame.ends_with(" 3/3 Elapsed 00:00:00 ETA 00:00:00"));
    assert_eq!(last_frame.chars().count(), 80);
}

#[test]
fn test_deletes_nested_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("cache");
    for i in 0..5 {
        let dir = root.join(format!("shard{}/objects", i));
        fs::create_dir_all(&dir).unwrap();
        for j in 0..20 {
            fs::write(dir.join(format!("{}.o", j)), b"obj").unwrap();
        }
    }

    let plan = Scanner::new().scan(&root).unwrap();
    assert_eq!(plan.len(), 5 * 20 + 5 * 2 + 1);

    executor().execute(plan).unwrap();
    assert!(!root.exists());
}

#[test]
fn test_fail_fast_leaves_remaining_entries() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for name in ["one", "two", "four"] {
        fs::write(root.join(name), b"").unwrap();
    }
    fs::create_dir(root.join("five")).unwrap();

    // third entry does not exist, so unlink fails on it
    let plan: DeletionPlan = vec![
        PlannedRemoval::file(root.join("one")),
        PlannedRemoval::file(root.join("two")),
        PlannedRemoval::file(root.join("three")),
        PlannedRemoval::file(root.join("four")),
        PlannedRemoval::directory(root.join("five")),
    ]
    .into_iter()
    .collect();

    let mut exec = executor().with_interval(Duration::from_secs(3600));
    let err = exec.execute(plan).unwrap_err();

    match &err {
        DeleteError::RemoveFileFailed { path, source } => {
            assert_eq!(path, &root.join("three"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.operation(), "unlink");

    assert!(!root.join("one").exists());
    assert!(!root.join("two").exists());
    assert!(root.join("four").exists());
    assert!(root.join("five").is_dir());
}

#[test]
fn test_non_empty_directory_fails_with_rmdir() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("full");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("still-here"), b"").unwrap();

    let plan: DeletionPlan = vec![PlannedRemoval::directory(&dir)].into_iter().collect();
    let err = executor().execute(plan).unwrap_err();

    assert!(matches!(err, DeleteError::RemoveDirFailed { .. }));
    assert_eq!(err.operation(), "rmdir");
    assert!(err.raw_os_error().is_some());
    assert!(dir.join("still-here").exists());
}
