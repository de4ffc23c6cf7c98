use crate::error::{CoinLensError, Result};
use crate::market::CurrencyRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_ORDER: &str = "market_cap_desc";
pub const DEFAULT_PER_PAGE: usize = 50;

/// Parameters of a price list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: usize,
    /// 1-based page number
    pub page: usize,
}

impl Default for MarketQuery {
    fn default() -> Self {
        MarketQuery {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            order: DEFAULT_ORDER.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl MarketQuery {
    pub fn with_page(mut self, page: usize, per_page: usize) -> MarketQuery {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// Window of a full list covered by this query's page
    fn page_bounds(&self, total: usize) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.per_page).min(total);
        let end = start.saturating_add(self.per_page).min(total);
        (start, end)
    }
}

/// Anything that can produce a price list
pub trait PriceSource {
    fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<CurrencyRecord>>;
}

/// Price list read from a JSON array on disk, e.g. a saved
/// `/coins/markets` response
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> JsonFileSource {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load_all(&self) -> Result<Vec<CurrencyRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            CoinLensError::Io(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        let records: Vec<CurrencyRecord> = serde_json::from_str(&contents)?;
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

impl PriceSource for JsonFileSource {
    fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<CurrencyRecord>> {
        if query.per_page == 0 || query.page == 0 {
            return Err(CoinLensError::InvalidArgument(
                "page and per_page must be at least 1".to_string(),
            ));
        }
        let records = self.load_all()?;
        let (start, end) = query.page_bounds(records.len());
        Ok(records[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_markets(count: usize) -> NamedTempFile {
        let records: Vec<CurrencyRecord> = (0..count)
            .map(|i| CurrencyRecord::new(&format!("coin-{i}"), "c", &format!("Coin {i}")))
            .collect();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&records).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn test_default_query() {
        let query = MarketQuery::default();
        assert_eq!(query.vs_currency, "usd");
        assert_eq!(query.order, "market_cap_desc");
        assert_eq!(query.per_page, 50);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_paging() {
        let file = write_markets(5);
        let source = JsonFileSource::new(file.path());

        let first = source
            .fetch_markets(&MarketQuery::default().with_page(1, 2))
            .unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "coin-0");

        let last = source
            .fetch_markets(&MarketQuery::default().with_page(3, 2))
            .unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, "coin-4");

        let past_end = source
            .fetch_markets(&MarketQuery::default().with_page(9, 2))
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_zero_page_rejected() {
        let file = write_markets(1);
        let source = JsonFileSource::new(file.path());
        let result = source.fetch_markets(&MarketQuery::default().with_page(0, 10));
        assert!(matches!(result, Err(CoinLensError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_file() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(source.load_all(), Err(CoinLensError::Io(_))));
    }
}
