//! Utility functions and helpers
//!
//! Number formatting for prices and percentages, and the epoch clock used
//! to timestamp scans.

pub mod formatting;
pub mod time;

pub use formatting::{format_compact, format_number, format_percentage, to_fixed};
pub use time::current_timestamp;
