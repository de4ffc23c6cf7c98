use crate::error::{CoinLensError, Result};
use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// ( K -> storage key, V => serialized value )
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(map) => map.len(),
            Err(_) => {
                log::error!("Failed to acquire read lock on memory store");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .inner
            .read()
            .map_err(|_| CoinLensError::Storage("Memory store lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| CoinLensError::Storage("Memory store lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| CoinLensError::Storage("Memory store lock poisoned".to_string()))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("[1,2]".to_string()));
        assert_eq!(store.len(), 1);

        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("[]".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // removing a missing key is not an error
        store.remove("k").unwrap();
    }
}
