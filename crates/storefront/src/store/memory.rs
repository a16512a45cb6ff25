//! In-memory storage backend.

use std::collections::HashMap;

use super::{StorageBackend, StoreError};

/// Slots held in a `HashMap`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Pre-populate a slot, e.g. with a fixture cart.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    /// Raw contents of a slot.
    #[must_use]
    pub fn get(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(slot))
    }

    fn set_item(&mut self, slot: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(slot.to_owned(), value.to_owned());
        Ok(())
    }
}
