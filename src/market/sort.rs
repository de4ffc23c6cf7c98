use crate::market::CurrencyRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    MarketCap,
    Volume,
    Name,
    CurrentPrice,
    #[serde(rename = "price_change_percentage_24h")]
    PriceChangePercentage24h,
}

impl SortField {
    pub fn key(&self) -> &'static str {
        match self {
            SortField::MarketCap => "market_cap",
            SortField::Volume => "volume",
            SortField::Name => "name",
            SortField::CurrentPrice => "current_price",
            SortField::PriceChangePercentage24h => "price_change_percentage_24h",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::MarketCap => "Market Cap",
            SortField::Volume => "Volume",
            SortField::Name => "Name",
            SortField::CurrentPrice => "Price",
            SortField::PriceChangePercentage24h => "24h Change",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "market_cap" => Ok(SortField::MarketCap),
            "volume" => Ok(SortField::Volume),
            "name" => Ok(SortField::Name),
            "current_price" | "price" => Ok(SortField::CurrentPrice),
            "price_change_percentage_24h" | "change" => Ok(SortField::PriceChangePercentage24h),
            _ => Err(format!(
                "Invalid sort field: {s}. Valid options: market_cap, volume, name, current_price, price_change_percentage_24h"
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {s}. Valid options: asc, desc")),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Field plus direction; defaults to market cap, descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> SortSpec {
        SortSpec { field, direction }
    }
}

fn numeric_key(record: &CurrencyRecord, field: SortField) -> Option<f64> {
    let value = match field {
        SortField::MarketCap => record.market_cap,
        SortField::Volume => record.total_volume,
        SortField::CurrentPrice => record.current_price,
        SortField::PriceChangePercentage24h => record.price_change_percentage_24h,
        SortField::Name => None,
    };
    value.filter(|v| !v.is_nan())
}

fn text_key(record: &CurrencyRecord) -> Option<String> {
    let name = record.name.trim();
    (!name.is_empty()).then(|| name.to_lowercase())
}

/// Present values follow `direction`; missing values sink to the end in
/// both directions.
fn missing_last<T, F>(a: Option<T>, b: Option<T>, direction: SortDirection, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(cmp(&a, &b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &CurrencyRecord, b: &CurrencyRecord, spec: &SortSpec) -> Ordering {
    match spec.field {
        SortField::Name => missing_last(text_key(a), text_key(b), spec.direction, |x, y| x.cmp(y)),
        field => missing_last(
            numeric_key(a, field),
            numeric_key(b, field),
            spec.direction,
            |x, y| x.total_cmp(y),
        ),
    }
}

/// Returns a sorted copy of the valid records.
///
/// Records without an id or name are dropped, not reordered. Ties keep
/// their original relative order.
pub fn sort_records(records: &[CurrencyRecord], spec: &SortSpec) -> Vec<CurrencyRecord> {
    let mut sorted: Vec<CurrencyRecord> = records.iter().filter(|r| r.is_valid()).cloned().collect();
    let dropped = records.len() - sorted.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} invalid records before sorting");
    }
    sorted.sort_by(|a, b| compare(a, b, spec));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[CurrencyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<CurrencyRecord> {
        vec![
            CurrencyRecord::new("bitcoin", "btc", "Bitcoin")
                .with_price(64000.0)
                .with_market_cap(1.2e12),
            CurrencyRecord::new("ethereum", "eth", "ethereum")
                .with_price(3100.0)
                .with_market_cap(3.7e11),
            CurrencyRecord::new("mystery", "mys", "Mystery").with_market_cap(1.0e6),
            CurrencyRecord::new("dogecoin", "doge", "Dogecoin")
                .with_price(0.15)
                .with_market_cap(2.1e10),
        ]
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_records(&[], &SortSpec::default()).is_empty());
    }

    #[test]
    fn test_sort_by_price_ascending_and_descending() {
        let records = sample();
        let asc = sort_records(
            &records,
            &SortSpec::new(SortField::CurrentPrice, SortDirection::Asc),
        );
        assert_eq!(ids(&asc), vec!["dogecoin", "ethereum", "bitcoin", "mystery"]);

        let desc = sort_records(
            &records,
            &SortSpec::new(SortField::CurrentPrice, SortDirection::Desc),
        );
        assert_eq!(ids(&desc), vec!["bitcoin", "ethereum", "dogecoin", "mystery"]);
    }

    #[test]
    fn test_missing_price_sorts_last_in_both_directions() {
        let records = sample();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_records(&records, &SortSpec::new(SortField::CurrentPrice, direction));
            assert_eq!(sorted.last().unwrap().id, "mystery");
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let spec = SortSpec::new(SortField::CurrentPrice, SortDirection::Asc);
        let once = sort_records(&sample(), &spec);
        let twice = sort_records(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let sorted = sort_records(&sample(), &SortSpec::new(SortField::Name, SortDirection::Asc));
        assert_eq!(ids(&sorted), vec!["bitcoin", "dogecoin", "ethereum", "mystery"]);
    }

    #[test]
    fn test_sort_default_is_market_cap_desc() {
        let sorted = sort_records(&sample(), &SortSpec::default());
        assert_eq!(ids(&sorted), vec!["bitcoin", "ethereum", "dogecoin", "mystery"]);
    }

    #[test]
    fn test_invalid_records_are_excluded() {
        let mut records = sample();
        records.push(CurrencyRecord::new("", "x", "No Id").with_price(1.0));
        records.push(CurrencyRecord::new("no-name", "y", "").with_price(2.0));
        let sorted = sort_records(&records, &SortSpec::new(SortField::CurrentPrice, SortDirection::Asc));
        assert_eq!(sorted.len(), 4);
        assert!(sorted.iter().all(|r| r.is_valid()));
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = sort_records(&records, &SortSpec::new(SortField::Name, SortDirection::Desc));
        assert_eq!(records, before);
    }

    #[test]
    fn test_nan_treated_as_missing() {
        let records = vec![
            CurrencyRecord::new("a", "a", "A").with_price(f64::NAN),
            CurrencyRecord::new("b", "b", "B").with_price(2.0),
        ];
        let sorted = sort_records(&records, &SortSpec::new(SortField::CurrentPrice, SortDirection::Desc));
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_parse_sort_arguments() {
        assert_eq!("volume".parse::<SortField>(), Ok(SortField::Volume));
        assert_eq!(
            "price_change_percentage_24h".parse::<SortField>(),
            Ok(SortField::PriceChangePercentage24h)
        );
        assert!("rank".parse::<SortField>().is_err());
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
    }

    #[test]
    fn test_sort_spec_serde() {
        let spec: SortSpec = serde_json::from_str(
            r#"{"field": "price_change_percentage_24h", "direction": "asc"}"#,
        )
        .unwrap();
        assert_eq!(
            spec,
            SortSpec::new(SortField::PriceChangePercentage24h, SortDirection::Asc)
        );
    }
}
