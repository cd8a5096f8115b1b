use super::*;

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("theme").unwrap(), None);
    assert!(storage.is_empty());
}

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    storage.set("theme", "light").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn with_entry_seeds_value() {
    let storage = MemoryStorage::with_entry("theme", "dark");
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn clear_removes_entries() {
    let storage = MemoryStorage::with_entry("theme", "dark");
    storage.clear();
    assert_eq!(storage.get("theme").unwrap(), None);
}

#[test]
fn failing_reads_return_storage_error() {
    let storage = MemoryStorage::with_entry("theme", "dark");
    storage.set_fail_reads(true);
    assert!(matches!(storage.get("theme"), Err(ThemeError::Storage(_))));
    storage.set_fail_reads(false);
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn failing_writes_leave_value_untouched() {
    let storage = MemoryStorage::with_entry("theme", "dark");
    storage.set_fail_writes(true);
    assert!(matches!(storage.set("theme", "light"), Err(ThemeError::Storage(_))));
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn reference_forwards_to_inner_storage() {
    let storage = MemoryStorage::new();
    let by_ref = &storage;
    by_ref.set("theme", "light").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
}
