use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Blockchain address family recognised by the classifier.
///
/// `Unknown` is the explicit "no confident match" answer and is never an
/// error: every scanned string maps to some variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    Btc,
    Eth,
    Ltc,
    Bch,
    Xrp,
    Ada,
    Dot,
    Link,
    Sol,
    Trx,
    Unknown,
}

impl WalletType {
    pub const ALL: [WalletType; 11] = [
        WalletType::Btc,
        WalletType::Eth,
        WalletType::Ltc,
        WalletType::Bch,
        WalletType::Xrp,
        WalletType::Ada,
        WalletType::Dot,
        WalletType::Link,
        WalletType::Sol,
        WalletType::Trx,
        WalletType::Unknown,
    ];

    /// Short ticker-style tag, as stored in the scan history
    pub fn tag(&self) -> &'static str {
        match self {
            WalletType::Btc => "BTC",
            WalletType::Eth => "ETH",
            WalletType::Ltc => "LTC",
            WalletType::Bch => "BCH",
            WalletType::Xrp => "XRP",
            WalletType::Ada => "ADA",
            WalletType::Dot => "DOT",
            WalletType::Link => "LINK",
            WalletType::Sol => "SOL",
            WalletType::Trx => "TRX",
            WalletType::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WalletType::Btc => "Bitcoin",
            WalletType::Eth => "Ethereum",
            WalletType::Ltc => "Litecoin",
            WalletType::Bch => "Bitcoin Cash",
            WalletType::Xrp => "Ripple",
            WalletType::Ada => "Cardano",
            WalletType::Dot => "Polkadot",
            WalletType::Link => "Chainlink",
            WalletType::Sol => "Solana",
            WalletType::Trx => "TRON",
            WalletType::Unknown => "Unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, WalletType::Unknown)
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for WalletType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        WalletType::ALL
            .iter()
            .find(|wallet_type| wallet_type.tag() == upper)
            .copied()
            .ok_or_else(|| format!("Invalid wallet type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for wallet_type in WalletType::ALL {
            assert_eq!(wallet_type.tag().parse::<WalletType>(), Ok(wallet_type));
        }
        assert_eq!("link".parse::<WalletType>(), Ok(WalletType::Link));
        assert!("DOGE".parse::<WalletType>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WalletType::Btc.display_name(), "Bitcoin");
        assert_eq!(WalletType::Bch.display_name(), "Bitcoin Cash");
        assert_eq!(WalletType::Link.display_name(), "Chainlink");
        assert_eq!(WalletType::Unknown.display_name(), "Unknown");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WalletType::Trx).unwrap();
        assert_eq!(json, "\"TRX\"");
        let parsed: WalletType = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, WalletType::Unknown);
    }
}
