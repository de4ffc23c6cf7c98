use crate::error::{CoinLensError, Result};
use crate::market::DEFAULT_VS_CURRENCY;
use crate::scanner::DEFAULT_HISTORY_KEY;
use crate::wallet::{DEFAULT_DISPLAY_LENGTH, MIN_DISPLAY_LENGTH};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_DATA_DIR: &str = ".coinlens";

const DATA_DIR_KEY: &str = "DATA_DIR";
const HISTORY_KEY_KEY: &str = "HISTORY_KEY";
const VS_CURRENCY_KEY: &str = "VS_CURRENCY";
const ADDRESS_LENGTH_KEY: &str = "ADDRESS_LENGTH";

pub const CONFIG_FILE_ENV: &str = "COINLENS_CONFIG";
const DATA_DIR_ENV: &str = "COINLENS_DATA_DIR";
const VS_CURRENCY_ENV: &str = "COINLENS_VS_CURRENCY";
const ADDRESS_LENGTH_ENV: &str = "COINLENS_ADDRESS_LENGTH";

/// Optional keys of a TOML settings file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub data_dir: Option<String>,
    pub history_key: Option<String>,
    pub vs_currency: Option<String>,
    pub address_display_length: Option<usize>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults overlaid with `COINLENS_*` environment variables
    pub fn new() -> Config {
        let config = Config::with_defaults();
        config.apply_env();
        config
    }

    pub fn with_defaults() -> Config {
        let mut map = HashMap::new();
        map.insert(String::from(DATA_DIR_KEY), String::from(DEFAULT_DATA_DIR));
        map.insert(
            String::from(HISTORY_KEY_KEY),
            String::from(DEFAULT_HISTORY_KEY),
        );
        map.insert(
            String::from(VS_CURRENCY_KEY),
            String::from(DEFAULT_VS_CURRENCY),
        );
        map.insert(
            String::from(ADDRESS_LENGTH_KEY),
            DEFAULT_DISPLAY_LENGTH.to_string(),
        );
        Config {
            inner: RwLock::new(map),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            log::error!("Config lock poisoned, continuing with last written values");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            log::error!("Config lock poisoned, continuing with last written values");
            poisoned.into_inner()
        })
    }

    fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.write().insert(String::from(key), value);
    }

    /// Environment variables win over anything loaded before them.
    /// An unparsable length is logged and ignored.
    pub fn apply_env(&self) {
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            self.set_data_dir(dir);
        }
        if let Ok(currency) = env::var(VS_CURRENCY_ENV) {
            self.set_vs_currency(currency);
        }
        if let Ok(length) = env::var(ADDRESS_LENGTH_ENV) {
            match length.trim().parse::<usize>() {
                Ok(length) => self.set_address_display_length(length),
                Err(_) => log::warn!("Ignoring {ADDRESS_LENGTH_ENV}={length}: not a number"),
            }
        }
    }

    pub fn apply_file_settings(&self, settings: FileSettings) {
        if let Some(dir) = settings.data_dir {
            self.set_data_dir(dir);
        }
        if let Some(key) = settings.history_key {
            self.set_history_key(key);
        }
        if let Some(currency) = settings.vs_currency {
            self.set_vs_currency(currency);
        }
        if let Some(length) = settings.address_display_length {
            self.set_address_display_length(length);
        }
    }

    /// Loads a TOML settings file, then re-applies the environment on top
    pub fn load_file(&self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CoinLensError::Config(format!("Cannot read {}: {e}", path.display()))
        })?;
        let settings: FileSettings = toml::from_str(&text)?;
        self.apply_file_settings(settings);
        self.apply_env();
        log::debug!("Loaded settings from {}", path.display());
        Ok(())
    }

    pub fn get_data_dir(&self) -> PathBuf {
        PathBuf::from(
            self.get(DATA_DIR_KEY)
                .unwrap_or_else(|| String::from(DEFAULT_DATA_DIR)),
        )
    }

    pub fn set_data_dir(&self, dir: String) {
        self.set(DATA_DIR_KEY, dir);
    }

    /// Location of the sled database holding the scan history
    pub fn history_db_path(&self) -> PathBuf {
        self.get_data_dir().join("history.db")
    }

    pub fn get_history_key(&self) -> String {
        self.get(HISTORY_KEY_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_HISTORY_KEY))
    }

    pub fn set_history_key(&self, key: String) {
        self.set(HISTORY_KEY_KEY, key);
    }

    pub fn get_vs_currency(&self) -> String {
        self.get(VS_CURRENCY_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_VS_CURRENCY))
    }

    pub fn set_vs_currency(&self, currency: String) {
        self.set(VS_CURRENCY_KEY, currency.trim().to_lowercase());
    }

    pub fn get_address_display_length(&self) -> usize {
        self.get(ADDRESS_LENGTH_KEY)
            .and_then(|length| length.parse().ok())
            .unwrap_or(DEFAULT_DISPLAY_LENGTH)
    }

    pub fn set_address_display_length(&self, length: usize) {
        self.set(
            ADDRESS_LENGTH_KEY,
            length.max(MIN_DISPLAY_LENGTH).to_string(),
        );
    }
}
