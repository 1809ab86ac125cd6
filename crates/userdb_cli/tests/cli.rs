use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

fn run(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_userdb_cli"))
        .env_remove("USERDB_PATH")
        .env_remove("USERDB_LOG_LEVEL")
        .env_remove("USERDB_LOG_DIR")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap().trim().to_string()
}

/// Splits a `<status> <json>` line.
fn response(output: &Output) -> (u16, Value) {
    let line = stdout(output);
    let (status, payload) = line.split_once(' ').unwrap();
    (status.parse().unwrap(), serde_json::from_str(payload).unwrap())
}

#[test]
fn create_prints_201_and_payload() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");

    let output = run(&db, &["create", "--name", "Alice", "--age", "30"]);
    assert!(output.status.success());
    assert_eq!(
        response(&output),
        (201, json!({"user_id": 1, "name": "Alice", "age": 30}))
    );
}

#[test]
fn create_with_invalid_input_prints_400_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");

    let output = run(&db, &["create", "--name", "", "--age", "30"]);
    assert!(!output.status.success());
    assert_eq!(response(&output), (400, json!({"error": "Invalid name"})));

    let output = run(&db, &["create", "--name", "Alice", "--age", "-1"]);
    assert!(!output.status.success());
    assert_eq!(response(&output), (400, json!({"error": "Invalid age"})));
}

#[test]
fn get_reads_created_user_and_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");
    assert!(run(&db, &["create", "--name", "Twinkle", "--age", "25"])
        .status
        .success());

    let found = run(&db, &["get", "--id", "1"]);
    assert!(found.status.success());
    assert_eq!(
        response(&found),
        (200, json!({"user_id": 1, "name": "Twinkle", "age": 25}))
    );

    let missing = run(&db, &["get", "--id", "9"]);
    assert!(!missing.status.success());
    assert_eq!(response(&missing), (404, json!({"error": "User not found"})));
}

#[test]
fn empty_update_fails_without_rows_output() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");
    run(&db, &["create", "--name", "Jeffery", "--age", "40"]);

    let output = run(&db, &["update", "--id", "1"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid argument"));
}

#[test]
fn update_prints_rows_and_keeps_other_field() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");
    run(&db, &["create", "--name", "Jeffery", "--age", "40"]);

    let output = run(&db, &["update", "--id", "1", "--name", "Jeff"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "rows_affected=1");

    let missing = run(&db, &["update", "--id", "7", "--age", "41"]);
    assert_eq!(stdout(&missing), "rows_affected=0");

    let found = run(&db, &["get", "--id", "1"]);
    assert_eq!(
        response(&found),
        (200, json!({"user_id": 1, "name": "Jeff", "age": 40}))
    );
}

#[test]
fn delete_prints_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("users.db");
    run(&db, &["create", "--name", "Alice", "--age", "30"]);

    let first = run(&db, &["delete", "--id", "1"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first), "rows_affected=1");

    let second = run(&db, &["delete", "--id", "1"]);
    assert!(second.status.success());
    assert_eq!(stdout(&second), "rows_affected=0");
}

#[test]
fn ping_prints_core_version_without_opening_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("missing").join("users.db");

    let output = run(&db, &["ping"]);
    assert!(output.status.success());
    let line = stdout(&output);
    assert!(line.starts_with("userdb_core ping=pong version="));
    assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unreachable_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("missing").join("users.db");

    let output = run(&db, &["get", "--id", "1"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
