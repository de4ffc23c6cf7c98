use crate::error::Result;
use crate::market::CurrencyRecord;

/// Anything that can resolve a scalar rate for a currency pair.
///
/// `Ok(None)` means the pair is unknown or currently has no price, which
/// conversion treats the same as a zero rate.
pub trait RateSource {
    fn exchange_rate(&self, from: &str, to: &str) -> Result<Option<f64>>;
}

/// Rates derived from an already fetched price list quoted in one fiat
/// currency.
///
/// Coin to fiat is the coin's price; fiat to coin is its reciprocal.
pub struct RecordRates {
    records: Vec<CurrencyRecord>,
    vs_currency: String,
}

impl RecordRates {
    pub fn new(records: Vec<CurrencyRecord>, vs_currency: &str) -> RecordRates {
        RecordRates {
            records,
            vs_currency: vs_currency.to_lowercase(),
        }
    }

    fn price_of(&self, coin: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|record| record.id.eq_ignore_ascii_case(coin))
            .and_then(|record| record.current_price)
            .filter(|price| price.is_finite() && *price > 0.0)
    }
}

impl RateSource for RecordRates {
    fn exchange_rate(&self, from: &str, to: &str) -> Result<Option<f64>> {
        let rate = if to.eq_ignore_ascii_case(&self.vs_currency) {
            self.price_of(from)
        } else if from.eq_ignore_ascii_case(&self.vs_currency) {
            self.price_of(to).map(|price| 1.0 / price)
        } else {
            None
        };
        if rate.is_none() {
            log::debug!("No rate available for {from} -> {to}");
        }
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RecordRates {
        RecordRates::new(
            vec![
                CurrencyRecord::new("bitcoin", "btc", "Bitcoin").with_price(50000.0),
                CurrencyRecord::new("ghost", "gst", "Ghost"),
            ],
            "USD",
        )
    }

    #[test]
    fn test_crypto_to_fiat_rate() {
        assert_eq!(rates().exchange_rate("bitcoin", "usd").unwrap(), Some(50000.0));
    }

    #[test]
    fn test_fiat_to_crypto_rate() {
        assert_eq!(rates().exchange_rate("usd", "bitcoin").unwrap(), Some(0.00002));
    }

    #[test]
    fn test_unknown_pairs() {
        let rates = rates();
        assert_eq!(rates.exchange_rate("bitcoin", "eur").unwrap(), None);
        assert_eq!(rates.exchange_rate("dogecoin", "usd").unwrap(), None);
        assert_eq!(rates.exchange_rate("ghost", "usd").unwrap(), None);
    }
}
