use crate::exchange::{convert, ConversionDirection, ConversionError, RateSource};
use crate::error::Result;

/// The two amount fields of the exchange screen and the pair behind them
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeState {
    pub from_currency: String,
    pub to_currency: String,
    pub from_amount: String,
    pub to_amount: String,
    pub direction: ConversionDirection,
    pub conversion_error: Option<ConversionError>,
}

impl Default for ExchangeState {
    fn default() -> Self {
        ExchangeState {
            from_currency: "bitcoin".to_string(),
            to_currency: "usd".to_string(),
            from_amount: String::new(),
            to_amount: String::new(),
            direction: ConversionDirection::CryptoToFiat,
            conversion_error: None,
        }
    }
}

impl ExchangeState {
    pub fn new(from_currency: &str, to_currency: &str, direction: ConversionDirection) -> Self {
        ExchangeState {
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            direction,
            ..Default::default()
        }
    }

    /// Id of the crypto side of the pair
    pub fn crypto_currency(&self) -> &str {
        match self.direction {
            ConversionDirection::CryptoToFiat => &self.from_currency,
            ConversionDirection::FiatToCrypto => &self.to_currency,
        }
    }

    /// Swaps the pair, flips the direction and clears both amounts
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_currency, &mut self.to_currency);
        self.direction = self.direction.flip();
        self.from_amount.clear();
        self.to_amount.clear();
        self.conversion_error = None;
    }

    /// Changing the direction swaps the pair, so both amounts are cleared
    /// with it. Setting the current direction again changes nothing.
    pub fn set_direction(&mut self, direction: ConversionDirection) {
        if self.direction != direction {
            self.swap();
        }
    }

    /// Converts `amount` and fills both fields.
    ///
    /// On failure the error is recorded and the previous amounts stay as
    /// they were, so the user's input is never wiped.
    pub fn apply_amount(&mut self, amount: &str, rate: Option<f64>) -> bool {
        match convert(amount, self.direction, rate) {
            Ok(result) => {
                self.from_amount = amount.to_string();
                self.to_amount = result;
                self.conversion_error = None;
                true
            }
            Err(err) => {
                self.conversion_error = Some(err);
                false
            }
        }
    }

    pub fn rate_from<R: RateSource>(&self, source: &R) -> Result<Option<f64>> {
        source.exchange_rate(&self.from_currency, &self.to_currency)
    }
}
