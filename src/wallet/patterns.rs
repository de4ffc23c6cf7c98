//! Address pattern registry
//!
//! One immutable shape rule per [`WalletType`]. A rule only checks the
//! character set, length bounds and known prefixes of an address; no
//! checksum is ever verified.

use crate::wallet::WalletType;
use data_encoding::HEXLOWER_PERMISSIVE;
use std::fmt;

/// Character set an address body must be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Bitcoin base58 alphabet (no `0`, `O`, `I`, `l`)
    Base58,
    /// ASCII alphanumerics without upper-case `I` and `O`
    Bech32,
    /// Hexadecimal digits, either case
    Hex,
    /// Any ASCII alphanumeric
    Alphanumeric,
}

impl Alphabet {
    pub fn accepts(&self, body: &str) -> bool {
        match self {
            Alphabet::Base58 => bs58::decode(body).into_vec().is_ok(),
            Alphabet::Hex => HEXLOWER_PERMISSIVE.decode(body.as_bytes()).is_ok(),
            Alphabet::Bech32 => body
                .chars()
                .all(|c| c.is_ascii_alphanumeric() && c != 'I' && c != 'O'),
            Alphabet::Alphanumeric => body.chars().all(|c| c.is_ascii_alphanumeric()),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Base58 => write!(f, "base58"),
            Alphabet::Bech32 => write!(f, "bech32"),
            Alphabet::Hex => write!(f, "hex"),
            Alphabet::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

/// A prefix set plus a body constraint.
///
/// `min_body`/`max_body` count the characters after the prefix. An empty
/// prefix list means no prefix is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub prefixes: &'static [&'static str],
    pub alphabet: Alphabet,
    pub min_body: usize,
    pub max_body: usize,
}

impl Shape {
    pub fn matches(&self, address: &str) -> bool {
        if self.prefixes.is_empty() {
            return self.body_matches(address);
        }
        self.prefixes
            .iter()
            .filter_map(|prefix| address.strip_prefix(prefix))
            .any(|body| self.body_matches(body))
    }

    fn body_matches(&self, body: &str) -> bool {
        // every alphabet is ASCII-only, so byte length equals char count for any accepted body
        (self.min_body..=self.max_body).contains(&body.len()) && self.alphabet.accepts(body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Matches when any of the shapes matches
    OneOf(&'static [Shape]),
    /// Matches every string; only used for the `Unknown` fallback
    Anything,
}

/// e.g. `1|3 + 24-33 base58`
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefixes.is_empty() {
            write!(f, "{} + ", self.prefixes.join("|"))?;
        }
        if self.min_body == self.max_body {
            write!(f, "{} {}", self.min_body, self.alphabet)
        } else {
            write!(f, "{}-{} {}", self.min_body, self.max_body, self.alphabet)
        }
    }
}

impl Rule {
    pub fn matches(&self, address: &str) -> bool {
        match self {
            Rule::OneOf(shapes) => shapes.iter().any(|shape| shape.matches(address)),
            Rule::Anything => true,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::OneOf(shapes) => {
                for (i, shape) in shapes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{shape}")?;
                }
                Ok(())
            }
            Rule::Anything => write!(f, "anything"),
        }
    }
}

/// Immutable association of one wallet type to its shape rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPattern {
    pub wallet_type: WalletType,
    pub rule: Rule,
}

impl AddressPattern {
    pub fn matches(&self, address: &str) -> bool {
        self.rule.matches(address)
    }
}

/// `0x` + 40 hex digits. ETH and ERC-20 tokens such as LINK share it.
const ERC20_SHAPES: &[Shape] = &[Shape {
    prefixes: &["0x"],
    alphabet: Alphabet::Hex,
    min_body: 40,
    max_body: 40,
}];

/// Legacy P2PKH/P2SH shape, 25-34 characters in total
const LEGACY_BASE58: Shape = Shape {
    prefixes: &["1", "3"],
    alphabet: Alphabet::Base58,
    min_body: 24,
    max_body: 33,
};

static BTC: AddressPattern = AddressPattern {
    wallet_type: WalletType::Btc,
    rule: Rule::OneOf(&[
        // P2WPKH (42 chars) and P2WSH/P2TR (62 chars)
        Shape {
            prefixes: &["bc1"],
            alphabet: Alphabet::Bech32,
            min_body: 39,
            max_body: 39,
        },
        Shape {
            prefixes: &["bc1"],
            alphabet: Alphabet::Bech32,
            min_body: 59,
            max_body: 59,
        },
        LEGACY_BASE58,
    ]),
};

static ETH: AddressPattern = AddressPattern {
    wallet_type: WalletType::Eth,
    rule: Rule::OneOf(ERC20_SHAPES),
};

static LTC: AddressPattern = AddressPattern {
    wallet_type: WalletType::Ltc,
    rule: Rule::OneOf(&[
        Shape {
            prefixes: &["ltc1"],
            alphabet: Alphabet::Bech32,
            min_body: 39,
            max_body: 39,
        },
        Shape {
            prefixes: &["L", "M", "3"],
            alphabet: Alphabet::Base58,
            min_body: 25,
            max_body: 33,
        },
    ]),
};

static BCH: AddressPattern = AddressPattern {
    wallet_type: WalletType::Bch,
    rule: Rule::OneOf(&[
        LEGACY_BASE58,
        // CashAddr, with or without the network prefix
        Shape {
            prefixes: &["bitcoincash:q", "bitcoincash:p", "q", "p"],
            alphabet: Alphabet::Alphanumeric,
            min_body: 41,
            max_body: 41,
        },
    ]),
};

static XRP: AddressPattern = AddressPattern {
    wallet_type: WalletType::Xrp,
    rule: Rule::OneOf(&[Shape {
        prefixes: &["r"],
        alphabet: Alphabet::Base58,
        min_body: 24,
        max_body: 34,
    }]),
};

static ADA: AddressPattern = AddressPattern {
    wallet_type: WalletType::Ada,
    rule: Rule::OneOf(&[Shape {
        prefixes: &["addr1", "Ae2"],
        alphabet: Alphabet::Alphanumeric,
        min_body: 50,
        max_body: 120,
    }]),
};

static DOT: AddressPattern = AddressPattern {
    wallet_type: WalletType::Dot,
    rule: Rule::OneOf(&[Shape {
        prefixes: &[],
        alphabet: Alphabet::Base58,
        min_body: 47,
        max_body: 48,
    }]),
};

static LINK: AddressPattern = AddressPattern {
    wallet_type: WalletType::Link,
    rule: Rule::OneOf(ERC20_SHAPES),
};

static SOL: AddressPattern = AddressPattern {
    wallet_type: WalletType::Sol,
    rule: Rule::OneOf(&[Shape {
        prefixes: &[],
        alphabet: Alphabet::Base58,
        min_body: 32,
        max_body: 44,
    }]),
};

static TRX: AddressPattern = AddressPattern {
    wallet_type: WalletType::Trx,
    rule: Rule::OneOf(&[Shape {
        prefixes: &["T"],
        alphabet: Alphabet::Base58,
        min_body: 33,
        max_body: 33,
    }]),
};

static UNKNOWN: AddressPattern = AddressPattern {
    wallet_type: WalletType::Unknown,
    rule: Rule::Anything,
};

/// Returns the shape rule registered for `wallet_type`.
///
/// Total over [`WalletType`]: the exhaustive match makes a missing entry a
/// compile error rather than a runtime failure.
pub fn lookup(wallet_type: WalletType) -> &'static AddressPattern {
    match wallet_type {
        WalletType::Btc => &BTC,
        WalletType::Eth => &ETH,
        WalletType::Ltc => &LTC,
        WalletType::Bch => &BCH,
        WalletType::Xrp => &XRP,
        WalletType::Ada => &ADA,
        WalletType::Dot => &DOT,
        WalletType::Link => &LINK,
        WalletType::Sol => &SOL,
        WalletType::Trx => &TRX,
        WalletType::Unknown => &UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total() {
        for wallet_type in WalletType::ALL {
            assert_eq!(lookup(wallet_type).wallet_type, wallet_type);
        }
    }

    #[test]
    fn test_eth_and_link_share_rule() {
        assert_eq!(lookup(WalletType::Eth).rule, lookup(WalletType::Link).rule);
    }

    #[test]
    fn test_unknown_matches_everything() {
        let unknown = lookup(WalletType::Unknown);
        assert!(unknown.matches(""));
        assert!(unknown.matches("anything at all ✓"));
    }

    #[test]
    fn test_alphabets() {
        assert!(Alphabet::Base58.accepts("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(!Alphabet::Base58.accepts("0OIl"));
        assert!(Alphabet::Hex.accepts("742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(!Alphabet::Hex.accepts("742d35Cc6634C0532925a3b844Bc454e4438f44g"));
        assert!(Alphabet::Bech32.accepts("qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"));
        assert!(!Alphabet::Bech32.accepts("qarOsrrr"));
        assert!(!Alphabet::Alphanumeric.accepts("abc-def"));
    }

    #[test]
    fn test_btc_lengths() {
        let btc = lookup(WalletType::Btc);
        assert!(btc.matches("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(btc.matches("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"));
        assert!(btc.matches("bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297"));
        // 24 chars is one short of the legacy minimum
        assert!(!btc.matches("1A1zP1eP5QGefi2DMPTfTL5S"));
        // 35 chars is one past the legacy maximum
        assert!(!btc.matches("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNaa"));
    }

    #[test]
    fn test_eth_requires_exact_length() {
        let eth = lookup(WalletType::Eth);
        assert!(eth.matches("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(!eth.matches("0x742d35Cc6634C0532925a3b844Bc454e4438f44"));
        assert!(!eth.matches("0x742d35Cc6634C0532925a3b844Bc454e4438f44e0"));
        assert!(!eth.matches("742d35Cc6634C0532925a3b844Bc454e4438f44e00"));
    }

    #[test]
    fn test_bch_cashaddr() {
        let bch = lookup(WalletType::Bch);
        assert!(bch.matches("qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"));
        assert!(bch.matches("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"));
        assert!(!bch.matches("qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6"));
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(
            lookup(WalletType::Btc).rule.to_string(),
            "bc1 + 39 bech32 or bc1 + 59 bech32 or 1|3 + 24-33 base58"
        );
        assert_eq!(lookup(WalletType::Sol).rule.to_string(), "32-44 base58");
        assert_eq!(lookup(WalletType::Eth).rule.to_string(), "0x + 40 hex");
        assert_eq!(lookup(WalletType::Unknown).rule.to_string(), "anything");
    }

    #[test]
    fn test_non_ascii_rejected() {
        // body is exactly 33 bytes, the TRX body length
        let trx = lookup(WalletType::Trx);
        assert!(!trx.matches("Tééééééééééééééééa"));
    }
}
