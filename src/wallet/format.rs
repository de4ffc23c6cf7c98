/// Default display width used by scan results and history listings
pub const DEFAULT_DISPLAY_LENGTH: usize = 20;

/// Smallest width honoured by [`format_address`]; below this the head and
/// tail would be empty.
pub const MIN_DISPLAY_LENGTH: usize = 8;

/// Shortens an address for display as `head...tail`.
///
/// Addresses no longer than `max_length` characters come back unchanged.
/// Otherwise head and tail each keep `max_length / 2 - 2` characters.
/// `max_length` is clamped to [`MIN_DISPLAY_LENGTH`].
pub fn format_address(address: &str, max_length: usize) -> String {
    let max_length = max_length.max(MIN_DISPLAY_LENGTH);
    let char_count = address.chars().count();
    if char_count <= max_length {
        return address.to_string();
    }

    let keep = max_length / 2 - 2;
    let head: String = address.chars().take(keep).collect();
    let tail: String = address.chars().skip(char_count - keep).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address_unchanged() {
        assert_eq!(format_address("0x1234", 20), "0x1234");
        let exactly_twenty = "abcdefghijklmnopqrst";
        assert_eq!(format_address(exactly_twenty, 20), exactly_twenty);
    }

    #[test]
    fn test_long_address_truncated() {
        assert_eq!(
            format_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", DEFAULT_DISPLAY_LENGTH),
            "1A1zP1eP...v7DivfNa"
        );
        assert_eq!(
            format_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e", 12),
            "0x74...f44e"
        );
    }

    #[test]
    fn test_tiny_length_is_clamped() {
        assert_eq!(format_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 0), "1A...Na");
        assert_eq!(format_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 3), "1A...Na");
        assert_eq!(format_address("abcdefgh", 2), "abcdefgh");
    }

    #[test]
    fn test_multibyte_characters() {
        let address = "ééééééééééééééééééééééé";
        let formatted = format_address(address, 20);
        assert_eq!(formatted, "éééééééé...éééééééé");
    }
}
