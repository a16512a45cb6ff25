//! File-backed storage: one JSON file per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::{StorageBackend, StoreError};

/// Stores each slot as `<dir>/<slot>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader sees either the old cart or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `slot`.
    #[must_use]
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, slot: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let target = self.slot_path(slot);
        let tmp = self.dir.join(format!(".{slot}.json.tmp"));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e.into());
        }

        debug!(path = %target.display(), bytes = value.len(), "Wrote slot");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get_item("almesBakeryCart").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("store");
        let mut storage = FileStorage::new(&nested);

        storage.set_item("almesBakeryCart", "[]").unwrap();

        assert!(nested.join("almesBakeryCart.json").exists());
        assert_eq!(
            storage.get_item("almesBakeryCart").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set_item("cart", "[1]").unwrap();
        storage.set_item("cart", "[2]").unwrap();

        assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some("[2]"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        // A non-empty directory at the target path makes the rename fail
        let target = storage.slot_path("cart");
        fs::create_dir_all(target.join("occupied")).unwrap();

        assert!(storage.set_item("cart", "[1]").is_err());
        assert!(!dir.path().join(".cart.json.tmp").exists());
    }

    #[test]
    fn test_slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }
}
