//! Price list handling
//!
//! Currency records come from an external price API. This module only
//! reshapes them: filtering, sorting and deduplication all produce new
//! vectors and never touch the source list.

pub mod filter;
pub mod pipeline;
pub mod record;
pub mod sort;
pub mod source;

pub use filter::{filter_records, FilterSpec};
pub use pipeline::{dedupe_by_id, display_list, effective_sort};
pub use record::CurrencyRecord;
pub use sort::{sort_records, SortDirection, SortField, SortSpec};
pub use source::{
    JsonFileSource, MarketQuery, PriceSource, DEFAULT_ORDER, DEFAULT_PER_PAGE, DEFAULT_VS_CURRENCY,
};
