use crate::session::memory_storage::MemoryStorage;
use crate::session::remember_me::{REMEMBER_ME_KEY, RememberMe};
use crate::session::session_storage::SessionStorage;

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::Value;

fn setup() -> (Arc<dyn SessionStorage>, RememberMe) {
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let remember = RememberMe::new(storage.clone());
    (storage, remember)
}

#[test]
fn given_nothing_stored_when_email_read_then_none() {
    let (_, remember) = setup();

    assert_that!(remember.email().unwrap(), none());
}

#[test]
fn given_remember_when_applied_then_email_is_recalled() {
    let (storage, remember) = setup();

    remember.apply("ada@example.com", true).unwrap();

    assert_that!(remember.email().unwrap(), some(eq("ada@example.com")));
    let raw = storage.load(REMEMBER_ME_KEY).unwrap().unwrap();
    let record: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["email"], "ada@example.com");
    assert_eq!(record["remember_me"], true);
}

#[test]
fn given_remembered_email_when_applied_without_remember_then_record_removed() {
    let (storage, remember) = setup();
    remember.apply("ada@example.com", true).unwrap();

    remember.apply("ada@example.com", false).unwrap();

    assert_that!(remember.email().unwrap(), none());
    assert_that!(storage.load(REMEMBER_ME_KEY).unwrap(), none());
}

#[test]
fn given_unreadable_record_when_email_read_then_none() {
    let (storage, remember) = setup();
    storage.save(REMEMBER_ME_KEY, "garbage").unwrap();

    assert_that!(remember.email().unwrap(), none());
}

#[test]
fn given_record_with_flag_off_when_email_read_then_none() {
    let (storage, remember) = setup();
    storage
        .save(
            REMEMBER_ME_KEY,
            r#"{"email":"ada@example.com","remember_me":false}"#,
        )
        .unwrap();

    assert_that!(remember.email().unwrap(), none());
}
