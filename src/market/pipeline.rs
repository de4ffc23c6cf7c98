//! Builds the list that is actually shown: deduplicated, filtered, sorted.

use crate::market::{filter_records, sort_records, CurrencyRecord, FilterSpec, SortField, SortSpec};
use std::collections::HashSet;

/// Keeps the first record for each id; paged price lists can repeat entries
/// across page boundaries.
pub fn dedupe_by_id(records: &[CurrencyRecord]) -> Vec<CurrencyRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.id.as_str()))
        .cloned()
        .collect()
}

/// Sort actually applied when filters are active.
///
/// A 24h-change filter sorts by 24h change, otherwise a price range filter
/// sorts by price. The user's direction is always kept.
pub fn effective_sort(sort: &SortSpec, filters: &[FilterSpec]) -> SortSpec {
    let field = if filters.iter().any(FilterSpec::is_price_change) {
        SortField::PriceChangePercentage24h
    } else if filters.iter().any(FilterSpec::is_price_range) {
        SortField::CurrentPrice
    } else {
        sort.field
    };
    SortSpec::new(field, sort.direction)
}

/// Client-side list shaping for the price list screen.
///
/// Without filters the source order (already sorted by the price API) is
/// preserved; with filters the list is filtered and then sorted by
/// [`effective_sort`]. Invalid records never reach the output.
pub fn display_list(
    records: &[CurrencyRecord],
    filters: &[FilterSpec],
    sort: &SortSpec,
) -> Vec<CurrencyRecord> {
    let unique = dedupe_by_id(records);
    let list = if filters.is_empty() {
        unique
    } else {
        let filtered = filter_records(&unique, filters);
        let sort = effective_sort(sort, filters);
        log::debug!(
            "{} of {} records pass {} filters, sorting by {} {}",
            filtered.len(),
            unique.len(),
            filters.len(),
            sort.field,
            sort.direction
        );
        sort_records(&filtered, &sort)
    };

    list.into_iter().filter(|record| record.is_valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::SortDirection;

    fn ids(records: &[CurrencyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<CurrencyRecord> {
        vec![
            CurrencyRecord::new("bitcoin", "btc", "Bitcoin")
                .with_price(64000.0)
                .with_change_24h(1.0),
            CurrencyRecord::new("ethereum", "eth", "Ethereum")
                .with_price(3100.0)
                .with_change_24h(4.0),
            CurrencyRecord::new("bitcoin", "btc", "Bitcoin duplicate").with_price(1.0),
            CurrencyRecord::new("solana", "sol", "Solana")
                .with_price(150.0)
                .with_change_24h(-3.0),
            CurrencyRecord::new("broken", "brk", ""),
        ]
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let unique = dedupe_by_id(&sample());
        assert_eq!(ids(&unique), vec!["bitcoin", "ethereum", "solana", "broken"]);
        assert_eq!(unique[0].name, "Bitcoin");
    }

    #[test]
    fn test_effective_sort() {
        let user = SortSpec::new(SortField::Name, SortDirection::Asc);
        assert_eq!(effective_sort(&user, &[]), user);
        assert_eq!(
            effective_sort(&user, &[FilterSpec::price_range(0.0, 10.0), FilterSpec::Negative]),
            SortSpec::new(SortField::PriceChangePercentage24h, SortDirection::Asc)
        );
        assert_eq!(
            effective_sort(&user, &[FilterSpec::price_range(0.0, 10.0)]),
            SortSpec::new(SortField::CurrentPrice, SortDirection::Asc)
        );
        assert_eq!(effective_sort(&user, &[FilterSpec::Other]), user);
    }

    #[test]
    fn test_display_list_without_filters_keeps_source_order() {
        let list = display_list(&sample(), &[], &SortSpec::default());
        assert_eq!(ids(&list), vec!["bitcoin", "ethereum", "solana"]);
    }

    #[test]
    fn test_display_list_with_filters_sorts_by_effective_field() {
        let list = display_list(
            &sample(),
            &[FilterSpec::Positive],
            &SortSpec::new(SortField::Name, SortDirection::Desc),
        );
        // sorted by 24h change descending, not by name
        assert_eq!(ids(&list), vec!["ethereum", "bitcoin"]);
    }
}
