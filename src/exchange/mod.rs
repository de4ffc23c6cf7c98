//! Crypto/fiat amount conversion
//!
//! Rates are fetched elsewhere; this module multiplies, rounds by direction
//! and keeps the exchange screen's two-field state consistent.

pub mod conversion;
pub mod rates;
pub mod state;

pub use conversion::{convert, ConversionDirection, ConversionError};
pub use rates::{RateSource, RecordRates};
pub use state::ExchangeState;
