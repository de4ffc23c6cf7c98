use crate::error::{CoinLensError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch
pub fn current_timestamp() -> Result<i64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| CoinLensError::Clock(format!("System time is before the Unix epoch: {e}")))?
        .as_millis();

    i64::try_from(duration).map_err(|_| CoinLensError::Clock("Timestamp overflow".to_string()))
}
