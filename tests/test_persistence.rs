use std::path::PathBuf;

use balloon_shooter::persistence::{HighScoreStore, LoadError};

/// Fresh, per-test score file path in the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "balloon_shooter_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn missing_file_loads_zero() {
    let store = HighScoreStore::new(scratch("missing"));
    assert!(matches!(store.try_load(), Err(LoadError::Missing(_))));
    assert_eq!(store.load(), 0);
}

#[test]
fn save_then_load_round_trip() {
    let path = scratch("round_trip");
    let store = HighScoreStore::new(&path);
    assert_eq!(store.load(), 0);
    assert_eq!(store.save(250), 250);
    assert_eq!(store.load(), 250);
    let _ = std::fs::remove_file(path);
}

#[test]
fn save_keeps_the_larger_score() {
    let path = scratch("keeps_larger");
    let store = HighScoreStore::new(&path);
    store.save(300);
    assert_eq!(store.save(120), 300);
    assert_eq!(store.load(), 300);
    assert_eq!(store.save(450), 450);
    assert_eq!(store.load(), 450);
    let _ = std::fs::remove_file(path);
}

#[test]
fn save_is_idempotent() {
    let path = scratch("idempotent");
    let store = HighScoreStore::new(&path);
    let first = store.save(80);
    let bytes = std::fs::read(&path).unwrap();
    let second = store.save(80);
    assert_eq!(first, second);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_is_rewritten_as_a_single_record() {
    let path = scratch("rewritten");
    let store = HighScoreStore::new(&path);
    store.save(10);
    store.save(20);
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "high_score": 20 }));
    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_file_loads_zero() {
    let path = scratch("malformed");
    std::fs::write(&path, "not json at all").unwrap();
    let store = HighScoreStore::new(&path);
    assert!(matches!(store.try_load(), Err(LoadError::Malformed { .. })));
    assert_eq!(store.load(), 0);
    // A save repairs the file.
    assert_eq!(store.save(5), 5);
    assert_eq!(store.load(), 5);
    let _ = std::fs::remove_file(path);
}

#[test]
fn negative_score_is_malformed() {
    let path = scratch("negative");
    std::fs::write(&path, r#"{"high_score": -4}"#).unwrap();
    let store = HighScoreStore::new(&path);
    assert!(matches!(store.try_load(), Err(LoadError::Malformed { .. })));
    assert_eq!(store.load(), 0);
    let _ = std::fs::remove_file(path);
}

#[test]
fn unreadable_path_loads_zero() {
    // A directory cannot be read as a file.
    let dir = std::env::temp_dir().join(format!("balloon_shooter_dir_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let store = HighScoreStore::new(&dir);
    assert!(matches!(store.try_load(), Err(LoadError::Unreadable { .. })));
    assert_eq!(store.load(), 0);
    let _ = std::fs::remove_dir(dir);
}

#[test]
fn unknown_fields_are_ignored_and_missing_field_is_zero() {
    let path = scratch("unknown_fields");
    std::fs::write(&path, r#"{"high_score": 77, "player": "ann"}"#).unwrap();
    let store = HighScoreStore::new(&path);
    assert_eq!(store.load(), 77);

    std::fs::write(&path, r#"{"best": 12}"#).unwrap();
    assert_eq!(store.load(), 0);
    let _ = std::fs::remove_file(path);
}

#[test]
fn failed_write_does_not_panic() {
    let dir = std::env::temp_dir().join(format!("balloon_shooter_nowrite_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let store = HighScoreStore::new(&dir);
    // Writing over a directory fails; the best known score is still returned.
    assert_eq!(store.save(33), 33);
    let _ = std::fs::remove_dir(dir);
}
