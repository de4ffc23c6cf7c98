use crate::utils::to_fixed;
use std::fmt;
use std::str::FromStr;

/// Which side of the pair the user typed into.
///
/// The direction, not the currency, decides the rounding of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionDirection {
    #[default]
    CryptoToFiat,
    FiatToCrypto,
}

impl ConversionDirection {
    /// Decimal places of a converted amount: fiat gets 2, crypto gets 8
    pub fn decimals(&self) -> usize {
        match self {
            ConversionDirection::CryptoToFiat => 2,
            ConversionDirection::FiatToCrypto => 8,
        }
    }

    pub fn flip(&self) -> ConversionDirection {
        match self {
            ConversionDirection::CryptoToFiat => ConversionDirection::FiatToCrypto,
            ConversionDirection::FiatToCrypto => ConversionDirection::CryptoToFiat,
        }
    }
}

impl FromStr for ConversionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crypto-to-fiat" => Ok(ConversionDirection::CryptoToFiat),
            "fiat-to-crypto" => Ok(ConversionDirection::FiatToCrypto),
            _ => Err(format!(
                "Invalid direction: {s}. Valid options: crypto-to-fiat, fiat-to-crypto"
            )),
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionDirection::CryptoToFiat => write!(f, "crypto-to-fiat"),
            ConversionDirection::FiatToCrypto => write!(f, "fiat-to-crypto"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Amount is empty or not a number, or the rate is missing or zero
    InvalidInput,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput => write!(f, "Invalid input or exchange rate"),
        }
    }
}

impl std::error::Error for ConversionError {}

fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim();
    if amount.is_empty() {
        return None;
    }
    // f64's parser also accepts "inf" and "NaN", which are not amounts
    amount.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts a typed amount with an already resolved scalar rate.
///
/// The result is `amount * rate` rounded half up to
/// [`ConversionDirection::decimals`] places (see [`to_fixed`]). A product
/// that overflows is invalid input. No currency pair validation happens here.
pub fn convert(
    amount: &str,
    direction: ConversionDirection,
    rate: Option<f64>,
) -> Result<String, ConversionError> {
    let amount = parse_amount(amount).ok_or(ConversionError::InvalidInput)?;
    let rate = rate
        .filter(|rate| rate.is_finite() && *rate != 0.0)
        .ok_or(ConversionError::InvalidInput)?;

    let result = amount * rate;
    if !result.is_finite() {
        return Err(ConversionError::InvalidInput);
    }
    Ok(to_fixed(result, direction.decimals()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_to_fiat_rounds_to_cents() {
        assert_eq!(
            convert("100", ConversionDirection::CryptoToFiat, Some(50000.0)),
            Ok("5000000.00".to_string())
        );
        assert_eq!(
            convert("0.5", ConversionDirection::CryptoToFiat, Some(3.0)),
            Ok("1.50".to_string())
        );
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(
            convert("0.125", ConversionDirection::CryptoToFiat, Some(1.0)),
            Ok("0.13".to_string())
        );
        assert_eq!(
            convert("1.25", ConversionDirection::CryptoToFiat, Some(0.5)),
            Ok("0.63".to_string())
        );
    }

    #[test]
    fn test_zero_result_is_unsigned() {
        assert_eq!(
            convert("0", ConversionDirection::CryptoToFiat, Some(-5.0)),
            Ok("0.00".to_string())
        );
        assert_eq!(
            convert("2", ConversionDirection::CryptoToFiat, Some(-5.0)),
            Ok("-10.00".to_string())
        );
    }

    #[test]
    fn test_overflowing_result_is_rejected() {
        assert_eq!(
            convert("1e308", ConversionDirection::CryptoToFiat, Some(10.0)),
            Err(ConversionError::InvalidInput)
        );
    }

    #[test]
    fn test_fiat_to_crypto_keeps_eight_places() {
        assert_eq!(
            convert("1", ConversionDirection::FiatToCrypto, Some(0.00002)),
            Ok("0.00002000".to_string())
        );
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in ["", "   ", "abc", "1.2.3", "inf", "NaN"] {
            assert_eq!(
                convert(amount, ConversionDirection::CryptoToFiat, Some(50000.0)),
                Err(ConversionError::InvalidInput),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_or_zero_rate() {
        assert_eq!(
            convert("10", ConversionDirection::CryptoToFiat, Some(0.0)),
            Err(ConversionError::InvalidInput)
        );
        assert_eq!(
            convert("10", ConversionDirection::CryptoToFiat, None),
            Err(ConversionError::InvalidInput)
        );
        assert_eq!(
            convert("10", ConversionDirection::CryptoToFiat, Some(f64::NAN)),
            Err(ConversionError::InvalidInput)
        );
    }

    #[test]
    fn test_amount_whitespace_is_trimmed() {
        assert_eq!(
            convert(" 2 ", ConversionDirection::CryptoToFiat, Some(10.0)),
            Ok("20.00".to_string())
        );
    }

    #[test]
    fn test_round_trip_within_rounding_tolerance() {
        let rate = 50000.0;
        for amount in [1.5, 0.123456, 2.0, 0.00031] {
            let fiat = convert(
                &amount.to_string(),
                ConversionDirection::CryptoToFiat,
                Some(rate),
            )
            .unwrap();
            let back = convert(&fiat, ConversionDirection::FiatToCrypto, Some(1.0 / rate)).unwrap();
            let back: f64 = back.parse().unwrap();
            // fiat side loses up to half a cent, which is 0.005 / rate in crypto
            let tolerance = 0.005 / rate + 1e-8;
            assert!(
                (back - amount).abs() <= tolerance,
                "{amount} came back as {back}"
            );
        }
    }

    #[test]
    fn test_direction_parse_and_flip() {
        assert_eq!(
            "fiat-to-crypto".parse::<ConversionDirection>(),
            Ok(ConversionDirection::FiatToCrypto)
        );
        assert!("sideways".parse::<ConversionDirection>().is_err());
        assert_eq!(
            ConversionDirection::CryptoToFiat.flip(),
            ConversionDirection::FiatToCrypto
        );
        assert_eq!(ConversionDirection::default().to_string(), "crypto-to-fiat");
    }
}
