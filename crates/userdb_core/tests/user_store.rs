use userdb_core::{SqliteUserStore, StoreError, User, UserStore, UserUpdate};

#[test]
fn insert_and_get_roundtrip() {
    let store = SqliteUserStore::open_in_memory().unwrap();

    let id = store.insert_user("Twinkle", 25).unwrap();
    let loaded = store.get_user(id).unwrap().unwrap();

    assert_eq!(loaded, User::new(id, "Twinkle", 25));
}

#[test]
fn insert_assigns_distinct_ids() {
    let store = SqliteUserStore::open_in_memory().unwrap();

    let first = store.insert_user("Ada", 36).unwrap();
    let second = store.insert_user("Ada", 36).unwrap();

    assert_ne!(first, second);
}

#[test]
fn get_unknown_id_returns_none() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    assert!(store.get_user(999).unwrap().is_none());
}

#[test]
fn empty_update_is_invalid_and_writes_nothing() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Jeffery", 40).unwrap();

    let err = store.update_user(id, &UserUpdate::default()).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));

    let loaded = store.get_user(id).unwrap().unwrap();
    assert_eq!(loaded, User::new(id, "Jeffery", 40));
}

#[test]
fn name_only_update_keeps_age() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Twinkle", 25).unwrap();

    let rows = store.update_user(id, &UserUpdate::name("X")).unwrap();
    assert_eq!(rows, 1);

    let loaded = store.get_user(id).unwrap().unwrap();
    assert_eq!(loaded.name, "X");
    assert_eq!(loaded.age, 25);
}

#[test]
fn age_only_update_keeps_name() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Twinkle", 25).unwrap();

    store.update_user(id, &UserUpdate::age(26)).unwrap();

    let loaded = store.get_user(id).unwrap().unwrap();
    assert_eq!(loaded, User::new(id, "Twinkle", 26));
}

#[test]
fn update_with_both_fields() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Twinkle", 25).unwrap();

    let update = UserUpdate::name("Bob").with_age(41);
    store.update_user(id, &update).unwrap();

    assert_eq!(store.get_user(id).unwrap().unwrap(), User::new(id, "Bob", 41));
}

#[test]
fn explicit_empty_name_and_zero_age_are_written() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Twinkle", 25).unwrap();

    let rows = store
        .update_user(id, &UserUpdate::name("").with_age(0))
        .unwrap();
    assert_eq!(rows, 1);

    assert_eq!(store.get_user(id).unwrap().unwrap(), User::new(id, "", 0));
}

#[test]
fn update_missing_id_affects_no_rows() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    assert_eq!(store.update_user(42, &UserUpdate::name("X")).unwrap(), 0);
}

#[test]
fn delete_existing_and_missing() {
    let store = SqliteUserStore::open_in_memory().unwrap();
    let id = store.insert_user("Twinkle", 25).unwrap();

    assert_eq!(store.delete_user(999).unwrap(), 0);
    assert_eq!(store.delete_user(id).unwrap(), 1);
    assert!(store.get_user(id).unwrap().is_none());
    assert_eq!(store.delete_user(id).unwrap(), 0);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");

    let store = SqliteUserStore::open(&path).unwrap();
    let id = store.insert_user("Alice", 30).unwrap();
    store.close().unwrap();

    let reopened = SqliteUserStore::open(&path).unwrap();
    assert_eq!(
        reopened.get_user(id).unwrap().unwrap(),
        User::new(id, "Alice", 30)
    );
    reopened.close().unwrap();
}

#[test]
fn open_unreachable_target_is_backend_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("users.db");

    match SqliteUserStore::open(&path) {
        Err(err) => assert!(err.is_backend()),
        Ok(_) => panic!("expected open failure"),
    }
}

#[test]
fn read_only_store_reads_but_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");

    let writer = SqliteUserStore::open(&path).unwrap();
    let id = writer.insert_user("Alice", 30).unwrap();
    writer.close().unwrap();

    let reader = SqliteUserStore::open_read_only(&path).unwrap();
    assert_eq!(reader.get_user(id).unwrap().unwrap().name, "Alice");
    assert!(reader.insert_user("Bob", 41).unwrap_err().is_backend());
    assert!(reader
        .update_user(id, &UserUpdate::age(31))
        .unwrap_err()
        .is_backend());
    assert!(reader.delete_user(id).unwrap_err().is_backend());
}
