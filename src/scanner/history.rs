//! Saved scan history
//!
//! The history is one JSON array stored under a single key. Every mutation
//! is a pure list transform; [`ScanHistory`] applies it, persists the whole
//! collection, and only then replaces its in-memory copy.

use crate::error::{CoinLensError, Result};
use crate::scanner::{SavedWallet, ScanResult};
use crate::storage::KeyValueStore;

/// Storage key of the history blob
pub const DEFAULT_HISTORY_KEY: &str = "scanned_wallets";

/// Newest entries go first
pub fn add_wallet(wallets: &[SavedWallet], wallet: SavedWallet) -> Vec<SavedWallet> {
    let mut updated = Vec::with_capacity(wallets.len() + 1);
    updated.push(wallet);
    updated.extend_from_slice(wallets);
    updated
}

pub fn toggle_favorite(wallets: &[SavedWallet], id: &str) -> Vec<SavedWallet> {
    wallets
        .iter()
        .map(|wallet| {
            let mut wallet = wallet.clone();
            if wallet.id == id {
                wallet.is_favorite = !wallet.is_favorite;
            }
            wallet
        })
        .collect()
}

/// Blank notes clear the field
pub fn update_notes(wallets: &[SavedWallet], id: &str, notes: &str) -> Vec<SavedWallet> {
    let notes = notes.trim();
    wallets
        .iter()
        .map(|wallet| {
            let mut wallet = wallet.clone();
            if wallet.id == id {
                wallet.notes = (!notes.is_empty()).then(|| notes.to_string());
            }
            wallet
        })
        .collect()
}

pub fn remove_wallet(wallets: &[SavedWallet], id: &str) -> Vec<SavedWallet> {
    wallets
        .iter()
        .filter(|wallet| wallet.id != id)
        .cloned()
        .collect()
}

pub fn favorites(wallets: &[SavedWallet]) -> Vec<SavedWallet> {
    wallets
        .iter()
        .filter(|wallet| wallet.is_favorite)
        .cloned()
        .collect()
}

/// In-memory cache of the saved wallets over a persistence port
pub struct ScanHistory<S: KeyValueStore> {
    store: S,
    key: String,
    wallets: Vec<SavedWallet>,
}

impl<S: KeyValueStore> ScanHistory<S> {
    pub fn new(store: S) -> ScanHistory<S> {
        Self::with_key(store, DEFAULT_HISTORY_KEY)
    }

    /// Loads the collection stored under `key`.
    ///
    /// A missing key is an empty history. An unreadable or corrupt blob is
    /// logged and also treated as empty; the next save overwrites it.
    pub fn with_key(store: S, key: &str) -> ScanHistory<S> {
        let mut history = ScanHistory {
            store,
            key: key.to_string(),
            wallets: vec![],
        };
        history.load();
        history
    }

    fn load(&mut self) {
        match self.load_safe() {
            Ok(wallets) => self.wallets = wallets,
            Err(e) => log::warn!("Could not load scan history: {e}"),
        }
    }

    fn load_safe(&self) -> Result<Vec<SavedWallet>> {
        match self.store.get(&self.key)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(vec![]),
        }
    }

    fn persist(&mut self, updated: Vec<SavedWallet>) -> Result<()> {
        let blob = serde_json::to_string(&updated)?;
        self.store.set(&self.key, &blob).map_err(|e| {
            log::error!("Could not save scan history: {e}");
            e
        })?;
        self.wallets = updated;
        Ok(())
    }

    fn ensure_exists(&self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(CoinLensError::NotFound(format!("saved wallet {id}")));
        }
        Ok(())
    }

    pub fn wallets(&self) -> &[SavedWallet] {
        &self.wallets
    }

    pub fn get(&self, id: &str) -> Option<&SavedWallet> {
        self.wallets.iter().find(|wallet| wallet.id == id)
    }

    pub fn favorites(&self) -> Vec<SavedWallet> {
        favorites(&self.wallets)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Saves a scan and returns the stored entry
    pub fn add(&mut self, result: ScanResult) -> Result<SavedWallet> {
        let wallet = SavedWallet::from_scan(result);
        self.persist(add_wallet(&self.wallets, wallet.clone()))?;
        log::info!("Saved {} wallet {}", wallet.wallet_type, wallet.id);
        Ok(wallet)
    }

    /// Returns the new favorite flag
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.ensure_exists(id)?;
        self.persist(toggle_favorite(&self.wallets, id))?;
        let is_favorite = self.get(id).is_some_and(|wallet| wallet.is_favorite);
        log::info!("Wallet {id} favorite: {is_favorite}");
        Ok(is_favorite)
    }

    pub fn update_notes(&mut self, id: &str, notes: &str) -> Result<()> {
        self.ensure_exists(id)?;
        self.persist(update_notes(&self.wallets, id, notes))?;
        log::info!("Updated notes for wallet {id}");
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.ensure_exists(id)?;
        self.persist(remove_wallet(&self.wallets, id))?;
        log::info!("Removed wallet {id}");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        self.wallets.clear();
        log::info!("Cleared scan history");
        Ok(())
    }
}
