//! Persisted cart storage.
//!
//! The cart lives in a single named slot of a key/value [`StorageBackend`],
//! encoded as a JSON array of `{name, price, quantity}` objects. The
//! [`CartStore`] is the only code that reads or writes that slot.
//!
//! Reads are lenient: a missing slot, unreadable storage, or data that does
//! not decode into a valid cart all load as an empty cart. Writes replace the
//! whole slot in one step.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use almes_core::Cart;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be encoded.
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A key/value store of named string slots.
pub trait StorageBackend {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, slot: &str) -> Result<Option<String>, StoreError>;

    /// Replace a slot's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written. The previous
    /// contents must survive a failed write.
    fn set_item(&mut self, slot: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads and writes the cart in one slot of a storage backend.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    backend: S,
    slot: String,
}

impl<S: StorageBackend> CartStore<S> {
    /// Create a store over `backend` using the given slot name.
    pub fn new(backend: S, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    /// Access the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the persisted cart.
    ///
    /// Returns an empty cart if nothing is stored or the stored data is
    /// malformed. Neither case is an error.
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn load(&self) -> Cart {
        let raw = match self.backend.get_item(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored cart, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                debug!(lines = cart.len(), "Loaded cart");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Stored cart is malformed, treating as empty");
                Cart::new()
            }
        }
    }

    /// Persist the full cart, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or written.
    #[instrument(skip(self, cart), fields(slot = %self.slot, lines = cart.len()))]
    pub fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(cart)?;
        self.backend.set_item(&self.slot, &encoded)?;
        debug!("Saved cart");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use almes_core::{Price, Quantity};
    use serde_json::json;

    const SLOT: &str = "almesBakeryCart";

    fn store_with(raw: &str) -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::default().with_slot(SLOT, raw), SLOT)
    }

    /// Backend whose reads and writes always fail.
    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get_item(&self, _slot: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::other("disk on fire").into())
        }

        fn set_item(&mut self, _slot: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("disk on fire").into())
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = CartStore::new(MemoryStorage::default(), SLOT);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_valid() {
        let raw = json!([{"name": "Bread", "price": 35, "quantity": 3}]).to_string();
        let cart = store_with(&raw).load();

        let bread = cart.get("Bread").unwrap();
        assert_eq!(bread.quantity.get(), 3);
        assert_eq!(bread.price.to_string(), "35.00");
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in [
            "not json",
            "null",
            "{}",
            "[{\"name\": \"Bread\"}]",
            "[{\"name\": \"Bread\", \"price\": 35, \"quantity\": 0}]",
            "[{\"name\": \"Bread\", \"price\": 35, \"quantity\": 1.5}]",
        ] {
            assert!(store_with(raw).load().is_empty(), "{raw} should load empty");
        }
    }

    #[test]
    fn test_load_unreadable_is_empty() {
        let store = CartStore::new(BrokenStorage, SLOT);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = CartStore::new(MemoryStorage::default(), SLOT);
        let mut cart = Cart::new();
        cart.add("Cake", Price::parse("150").unwrap(), Quantity::ONE)
            .unwrap();

        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);

        let raw: serde_json::Value =
            serde_json::from_str(&store.backend().get(SLOT).unwrap()).unwrap();
        assert_eq!(raw, json!([{"name": "Cake", "price": 150.0, "quantity": 1}]));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut store = CartStore::new(BrokenStorage, SLOT);
        assert!(matches!(store.save(&Cart::new()), Err(StoreError::Io(_))));
    }
}
