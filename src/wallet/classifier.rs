use crate::wallet::patterns::lookup;
use crate::wallet::WalletType;

/// Priority in which shape rules are tried.
///
/// Several shapes overlap (legacy `1`/`3` base58 is valid for BTC, BCH and
/// partly LTC; ETH and LINK are identical), so the first match wins.
/// Reordering this list changes results for ambiguous input.
pub const CLASSIFICATION_ORDER: [WalletType; 10] = [
    WalletType::Btc,
    WalletType::Bch,
    WalletType::Ltc,
    WalletType::Eth,
    WalletType::Trx,
    WalletType::Sol,
    WalletType::Xrp,
    WalletType::Ada,
    WalletType::Dot,
    WalletType::Link,
];

/// Detects which address family a scanned string belongs to.
///
/// Greedy first match over [`CLASSIFICATION_ORDER`], after trimming
/// surrounding whitespace. Never fails: anything unrecognised, including
/// the empty string, is [`WalletType::Unknown`].
pub fn classify(address: &str) -> WalletType {
    let address = address.trim();
    if address.is_empty() {
        return WalletType::Unknown;
    }

    let wallet_type = CLASSIFICATION_ORDER
        .iter()
        .copied()
        .find(|wallet_type| lookup(*wallet_type).matches(address))
        .unwrap_or(WalletType::Unknown);
    log::debug!("Classified address of {} chars as {wallet_type}", address.len());
    wallet_type
}

pub fn is_valid_wallet_address(address: &str) -> bool {
    !address.trim().is_empty() && !classify(address).is_unknown()
}
