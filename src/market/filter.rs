use crate::market::CurrencyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn unbounded() -> f64 {
    f64::INFINITY
}

fn is_unbounded(max: &f64) -> bool {
    *max == f64::INFINITY
}

/// One predicate over a currency record. A filter list is an AND of its
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSpec {
    /// 24h change is present and above zero
    Positive,
    /// 24h change is present and below zero
    Negative,
    /// Price is present and within `min..=max`; an infinite `max` has no
    /// upper bound
    PriceRange {
        #[serde(default)]
        min: f64,
        #[serde(default = "unbounded", skip_serializing_if = "is_unbounded")]
        max: f64,
    },
    /// Any kind this version does not know; passes every record
    #[serde(other)]
    Other,
}

impl FilterSpec {
    pub fn price_range(min: f64, max: f64) -> FilterSpec {
        FilterSpec::PriceRange { min, max }
    }

    pub fn matches(&self, record: &CurrencyRecord) -> bool {
        match self {
            FilterSpec::Positive => record
                .price_change_percentage_24h
                .is_some_and(|change| change > 0.0),
            FilterSpec::Negative => record
                .price_change_percentage_24h
                .is_some_and(|change| change < 0.0),
            FilterSpec::PriceRange { min, max } => record
                .current_price
                .is_some_and(|price| *min <= price && (is_unbounded(max) || price <= *max)),
            FilterSpec::Other => true,
        }
    }

    pub fn is_price_change(&self) -> bool {
        matches!(self, FilterSpec::Positive | FilterSpec::Negative)
    }

    pub fn is_price_range(&self) -> bool {
        matches!(self, FilterSpec::PriceRange { .. })
    }

    pub fn label(&self) -> String {
        match self {
            FilterSpec::Positive => "Positive Change".to_string(),
            FilterSpec::Negative => "Negative Change".to_string(),
            FilterSpec::PriceRange { min, max } if is_unbounded(max) => format!("${min} - ∞"),
            FilterSpec::PriceRange { min, max } => format!("${min} - ${max}"),
            FilterSpec::Other => "Other".to_string(),
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Positive => write!(f, "positive"),
            FilterSpec::Negative => write!(f, "negative"),
            FilterSpec::PriceRange { min, max } if is_unbounded(max) => write!(f, "price:{min}.."),
            FilterSpec::PriceRange { min, max } => write!(f, "price:{min}..{max}"),
            FilterSpec::Other => write!(f, "other"),
        }
    }
}

/// Parses `positive`, `negative`, `price:MIN..MAX` or `price:MIN..`
impl FromStr for FilterSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "positive" => return Ok(FilterSpec::Positive),
            "negative" => return Ok(FilterSpec::Negative),
            _ => {}
        }

        let range = lower
            .strip_prefix("price:")
            .ok_or_else(|| format!("Invalid filter: {s}. Use positive, negative or price:MIN..MAX"))?;
        let (min, max) = range
            .split_once("..")
            .ok_or_else(|| format!("Invalid price range: {range}. Expected MIN..MAX or MIN.."))?;

        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| format!("Invalid minimum price: {min}"))?;
        let max: f64 = if max.trim().is_empty() {
            f64::INFINITY
        } else {
            max.trim()
                .parse()
                .map_err(|_| format!("Invalid maximum price: {max}"))?
        };

        if !min.is_finite() || max.is_nan() || min > max {
            return Err(format!("Invalid price range: {range}"));
        }
        Ok(FilterSpec::PriceRange { min, max })
    }
}

/// Returns the records that satisfy every filter.
///
/// An empty filter list returns the input unchanged.
pub fn filter_records(records: &[CurrencyRecord], filters: &[FilterSpec]) -> Vec<CurrencyRecord> {
    if filters.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| filters.iter().all(|filter| filter.matches(record)))
        .cloned()
        .collect()
}
