#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    use myhealth::storage::{FileStore, KeyValueStore, MemoryStore};

    static NEXT_DIR: AtomicU32 = AtomicU32::new(0);

    /// Fresh scratch directory per test so runs never interfere.
    fn scratch_dir(name: &str) -> PathBuf {
        let unique = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "myhealth-storage-test-{}-{name}-{unique}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = scratch_dir("reopen");
        let path = dir.join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            assert!(store.is_empty());
            store.put("alpha", "1").unwrap();
            store.put("beta", "2").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("alpha"), Some("1".to_string()));
        assert_eq!(store.get("beta"), Some("2".to_string()));
        assert_eq!(store.get("gamma"), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_creates_parent_directory() {
        let dir = scratch_dir("nested");
        let path = dir.join("deep").join("inside").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put("key", "value").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = scratch_dir("missing");
        let path = dir.join("never-written.json");

        let store = FileStore::open(&path).unwrap();
        assert!(store.is_empty());
        // Opening alone must not create the file
        assert!(!path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_recovers() {
        let dir = scratch_dir("corrupt");
        let path = dir.join("store.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{definitely not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.is_empty());

        // The next update rewrites the file with valid content
        store.put("fresh", "start").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("fresh"), Some("start".to_string()));
        assert_eq!(reopened.len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_persists() {
        let dir = scratch_dir("remove");
        let path = dir.join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.put("keep", "yes").unwrap();
            store.put("drop", "no").unwrap();
            store.remove("drop").unwrap();
            // Removing an absent key is a no-op
            store.remove("never-there").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("keep"), Some("yes".to_string()));
        assert_eq!(store.get("drop"), None);
        assert_eq!(store.len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_put_overwrites_existing_value() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put("key", "first").unwrap();
        store.put("key", "second").unwrap();
        assert_eq!(store.get("key"), Some("second".to_string()));
        assert_eq!(store.len(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_pretty_output_still_parses() {
        let dir = scratch_dir("pretty");
        let path = dir.join("store.json");

        {
            let mut store = FileStore::open_with(&path, true).unwrap();
            store.put("key", "value").unwrap();
        }
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("key"), Some("value".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_store_contract() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("key"), None);

        store.put("key", "value").unwrap();
        assert_eq!(store.get("key"), Some("value".to_string()));
        assert_eq!(store.len(), 1);

        store.put("key", "updated").unwrap();
        assert_eq!(store.get("key"), Some("updated".to_string()));

        store.remove("key").unwrap();
        assert_eq!(store.get("key"), None);
        assert!(store.is_empty());

        // Removing twice stays a no-op
        store.remove("key").unwrap();
    }
}
