//! # CoinLens - Wallet Scanner and Price Tools
//!
//! This is the core of my crypto companion app, pulled out of the UI so I
//! can test every rule on its own. When I come back to this code, here's
//! what I need to remember:
//!
//! ## What I Built
//! - **Address Classifier**: Recognises BTC, ETH, LTC, BCH, XRP, ADA, DOT,
//!   LINK, SOL and TRX addresses from their text shape alone
//! - **Scan History**: Saved QR scans with favorites and notes, persisted as
//!   one JSON blob in a key-value store
//! - **Price List Pipeline**: Dedupe, filter and sort of `/coins/markets`
//!   records with missing values always sinking to the end
//! - **Exchange Math**: Crypto/fiat conversion with direction-based rounding
//!
//! ## How I Organized My Code
//! - `wallet/`: Wallet types, address patterns, classifier, address shortening
//! - `scanner/`: Scan results, saved wallets, history cache
//! - `storage/`: Key-value port with sled and in-memory backends
//! - `market/`: Currency records, sort/filter transforms, price list sources
//! - `exchange/`: Conversion arithmetic, exchange screen state, rate sources
//! - `config/`: Layered settings (defaults, TOML file, environment)
//! - `utils/`: Number formatting and the clock
//! - `cli/`: Command-line interface over all of the above
//!
//! ## Key Design Decisions I Made
//! - Classification is a pure function over a fixed priority order, so
//!   overlapping shapes always resolve the same way
//! - History mutations are pure list transforms; the cache only changes
//!   after the whole list was written
//! - Network access stays outside: prices come in through `PriceSource`
//!   and rates through `RateSource`
//!
//! Remember: the order in `CLASSIFICATION_ORDER` is behaviour, not style!

pub mod cli;
pub mod config;
pub mod error;
pub mod exchange;
pub mod market;
pub mod scanner;
pub mod storage;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{CoinLensError, Result};
pub use exchange::{
    convert, ConversionDirection, ConversionError, ExchangeState, RateSource, RecordRates,
};
pub use market::{
    display_list, CurrencyRecord, FilterSpec, JsonFileSource, MarketQuery, PriceSource,
    SortDirection, SortField, SortSpec,
};
pub use scanner::{SavedWallet, ScanHistory, ScanResult};
pub use storage::{KeyValueStore, MemoryStore, SledStore};
pub use utils::{current_timestamp, format_compact, format_number, format_percentage};
pub use wallet::{classify, format_address, is_valid_wallet_address, WalletType};
