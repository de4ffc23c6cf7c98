use crate::error::{CoinLensError, Result};
use crate::storage::KeyValueStore;
use std::path::Path;

const KV_TREE: &str = "kv";

/// Key-value store backed by an embedded sled database
pub struct SledStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SledStore> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|e| {
            CoinLensError::Storage(format!("Failed to open database at {}: {e}", path.display()))
        })?;
        let tree = db
            .open_tree(KV_TREE)
            .map_err(|e| CoinLensError::Storage(format!("Failed to open kv tree: {e}")))?;
        log::debug!("Opened sled store at {}", path.display());
        Ok(SledStore { db, tree })
    }

    fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(bytes) = self.tree.get(key)? else {
            return Ok(None);
        };
        let value = String::from_utf8(bytes.to_vec()).map_err(|e| {
            CoinLensError::Serialization(format!("Stored value for {key} is not UTF-8: {e}"))
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.tree.insert(key, value.as_bytes())?;
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.tree.remove(key)?;
        self.flush()
    }
}
