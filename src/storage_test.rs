use super::*;

fn temp_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("articles-storage-{}", uuid::Uuid::new_v4()))
        .join("storage.json")
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_get_missing_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("token").unwrap(), None);
}

#[test]
fn memory_set_then_remove() {
    let mut store = MemoryStorage::new();
    store.set("token", "abc").unwrap();
    assert_eq!(store.get("token").unwrap().as_deref(), Some("abc"));

    store.remove("token").unwrap();
    assert_eq!(store.get("token").unwrap(), None);
    store.remove("token").unwrap();
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_missing_file_reads_as_empty() {
    let store = FileStorage::new(temp_path());
    assert_eq!(store.get("token").unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn file_persists_across_instances() {
    let path = temp_path();
    let mut first = FileStorage::new(&path);
    first.set("token", "abc").unwrap();
    first.set("theme", "dark").unwrap();

    let second = FileStorage::new(&path);
    assert_eq!(second.get("token").unwrap().as_deref(), Some("abc"));
    assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_remove_keeps_other_keys() {
    let path = temp_path();
    let mut store = FileStorage::new(&path);
    store.set("token", "abc").unwrap();
    store.set("theme", "dark").unwrap();

    store.remove("token").unwrap();
    assert_eq!(store.get("token").unwrap(), None);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_remove_absent_key_does_not_create_file() {
    let mut store = FileStorage::new(temp_path());
    store.remove("token").unwrap();
    assert!(!store.path().exists());
}

#[test]
fn file_corrupt_contents_is_json_error() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = FileStorage::new(&path);
    assert!(matches!(store.get("token"), Err(StorageError::Json(_))));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
