//! QR scan results and the saved wallet history
//!
//! Decoded payloads come in from the camera layer as plain strings; this
//! module turns them into typed scan results and manages the saved list.

pub mod history;
pub mod scan;

pub use history::{
    add_wallet, favorites, remove_wallet, toggle_favorite, update_notes, ScanHistory,
    DEFAULT_HISTORY_KEY,
};
pub use scan::{SavedWallet, ScanResult};
