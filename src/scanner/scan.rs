use crate::wallet::{classify, format_address, WalletType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of decoding one QR payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub address: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl ScanResult {
    /// Classifies a decoded payload.
    ///
    /// The untrimmed payload is kept in `raw_content` only when nothing
    /// recognised it, so it can still be copied or saved.
    pub fn from_payload(payload: &str, timestamp: i64) -> ScanResult {
        let address = payload.trim().to_string();
        let wallet_type = classify(&address);
        let raw_content = wallet_type.is_unknown().then(|| payload.to_string());
        ScanResult {
            address,
            wallet_type,
            timestamp,
            is_favorite: false,
            raw_content,
        }
    }

    pub fn display_address(&self, max_length: usize) -> String {
        format_address(&self.address, max_length)
    }
}

/// A scan the user chose to keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWallet {
    pub id: String,
    pub address: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub timestamp: i64,
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SavedWallet {
    pub fn from_scan(result: ScanResult) -> SavedWallet {
        SavedWallet {
            id: Uuid::new_v4().to_string(),
            address: result.address,
            wallet_type: result.wallet_type,
            timestamp: result.timestamp,
            is_favorite: result.is_favorite,
            raw_content: result.raw_content,
            notes: None,
        }
    }

    pub fn display_address(&self, max_length: usize) -> String {
        format_address(&self.address, max_length)
    }
}
