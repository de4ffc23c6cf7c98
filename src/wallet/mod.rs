//! Wallet address recognition
//!
//! This module classifies scanned strings into blockchain address families
//! by shape (prefix, alphabet, length) and formats addresses for display.

pub mod classifier;
pub mod format;
pub mod patterns;
pub mod wallet_type;

pub use classifier::{classify, is_valid_wallet_address, CLASSIFICATION_ORDER};
pub use format::{format_address, DEFAULT_DISPLAY_LENGTH, MIN_DISPLAY_LENGTH};
pub use patterns::{lookup, AddressPattern, Alphabet, Rule, Shape};
pub use wallet_type::WalletType;
