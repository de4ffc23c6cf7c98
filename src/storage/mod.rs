//! Data storage and persistence
//!
//! The scan history is persisted as one opaque string per key. This module
//! defines that key-value port and its two backends: a sled database on
//! disk and an in-process map.

pub mod memory_store;
pub mod sled_store;

pub use memory_store::MemoryStore;
pub use sled_store::SledStore;

use crate::error::Result;

/// Whole-value key-value store: no partial updates, no queries.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
