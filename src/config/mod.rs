//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `COINLENS_*` environment variables.

pub mod settings;

pub use settings::{Config, FileSettings, CONFIG_FILE_ENV, GLOBAL_CONFIG};
