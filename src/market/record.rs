use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only snapshot of one asset as returned by a `/coins/markets` style
/// price list.
///
/// Everything except the identity fields may be missing. Unknown fields in
/// the source JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl CurrencyRecord {
    pub fn new(id: &str, symbol: &str, name: &str) -> CurrencyRecord {
        CurrencyRecord {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> CurrencyRecord {
        self.current_price = Some(price);
        self
    }

    pub fn with_change_24h(mut self, percentage: f64) -> CurrencyRecord {
        self.price_change_percentage_24h = Some(percentage);
        self
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> CurrencyRecord {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> CurrencyRecord {
        self.total_volume = Some(volume);
        self
    }

    /// A record needs both an identifier and a display name to be listed
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }
}
