use crate::error::ClientError;
use crate::session::file_storage::FileStorage;
use crate::session::session_storage::SessionStorage;
use crate::session::session_store::SessionStore;
use crate::tests::sample_user;

use std::fs;
use std::sync::Arc;

use googletest::prelude::*;
use tempfile::TempDir;

#[test]
fn given_saved_value_when_loaded_then_same_value_returned() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    storage.save("auth", r#"{"a":1}"#).unwrap();

    assert_that!(storage.load("auth").unwrap(), some(eq(r#"{"a":1}"#)));
    assert!(dir.path().join("auth.json").exists());
}

#[test]
fn given_missing_key_when_loaded_then_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    assert_that!(storage.load("auth").unwrap(), none());
}

#[test]
fn given_missing_directory_when_saved_then_directory_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::new(&nested);

    storage.save("auth", "{}").unwrap();

    assert!(nested.join("auth.json").exists());
}

#[test]
fn given_save_when_complete_then_no_temp_file_left() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    storage.save("auth", "first").unwrap();
    storage.save("auth", "second").unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["auth.json".to_string()]);
    assert_that!(storage.load("auth").unwrap(), some(eq("second")));
}

#[test]
fn given_missing_key_when_removed_then_ok() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    assert_that!(storage.remove("auth"), ok(anything()));
}

#[test]
fn given_saved_key_when_removed_then_file_deleted() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.save("rememberMe", "{}").unwrap();

    storage.remove("rememberMe").unwrap();

    assert!(!dir.path().join("rememberMe.json").exists());
}

#[test]
fn given_key_with_path_separator_when_saved_then_rejected() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    let result = storage.save("../escape", "{}");

    assert!(matches!(result, Err(ClientError::InvalidKey { .. })));
}

#[test]
fn given_unreadable_path_when_loaded_then_storage_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("auth.json")).unwrap();
    let storage = FileStorage::new(dir.path());

    let result = storage.load("auth");

    assert!(matches!(result, Err(ClientError::Storage { .. })));
}

#[test]
fn given_session_on_disk_when_store_rehydrated_then_session_restored() {
    let dir = TempDir::new().unwrap();
    let user = sample_user();

    {
        let store = SessionStore::hydrate(Arc::new(FileStorage::new(dir.path()))).unwrap();
        store.set_user(user.clone(), "tok".to_string()).unwrap();
    }

    let store = SessionStore::hydrate(Arc::new(FileStorage::new(dir.path()))).unwrap();

    assert_eq!(store.state().user(), Some(&user));
    assert_that!(store.state().token(), some(eq("tok")));
}
