use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let store = MemoryStorage::default();
    store.set("user_id", "4");
    assert_eq!(store.get("user_id").as_deref(), Some("4"));
    store.remove("user_id");
    assert_eq!(store.get("user_id"), None);
    assert_eq!(store.len(), 0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let store = BrowserStorage;
    store.set("user_id", "4");
    assert_eq!(store.get("user_id"), None);
    store.remove("user_id");
}

#[test]
fn failed_storage_calls_are_reported() {
    assert!(logged::<()>(Ok(()), "write", "user_id"));
    assert!(!logged(Err("QuotaExceededError"), "write", "user_id"));
    assert!(!logged(Err("SecurityError"), "remove", "username"));
}
