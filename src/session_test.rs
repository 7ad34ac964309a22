use super::*;
use crate::storage::MemoryStorage;

#[test]
fn new_session_is_unauthenticated() {
    let session = Session::new(MemoryStorage::new());
    assert!(!session.is_authenticated());
    assert_eq!(session.token().unwrap(), None);
}

#[test]
fn store_writes_token_key() {
    let mut session = Session::new(MemoryStorage::new());
    session.store("abc").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn clear_removes_token() {
    let mut session = Session::new(MemoryStorage::new());
    session.store("abc").unwrap();
    session.clear().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_counts_as_absent() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "").unwrap();
    let session = Session::new(storage);
    assert!(!session.is_authenticated());
}
