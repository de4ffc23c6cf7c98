//! Display formatting for prices, market caps and percentage changes.
//!
//! Non-finite input (NaN or infinity) formats as zero.

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Enough fractional digits to print any f64 exactly, so no rounding
/// happens before ours
const EXACT_DIGITS: usize = 1100;

/// `abs` at `decimals` places, ties rounded up on the exact binary value
fn fixed_unsigned(abs: f64, decimals: usize) -> String {
    let decimals = decimals.min(EXACT_DIGITS - 1);
    let exact = format!("{:.*}", EXACT_DIGITS, abs);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - decimals);
    let int_digits = String::from_utf8_lossy(int_digits);
    if decimals == 0 {
        int_digits.into_owned()
    } else {
        format!("{int_digits}.{}", String::from_utf8_lossy(frac_digits))
    }
}

// -0.001 at two decimals rounds to zero and must not print as "-0.00"
fn sign(value: f64, fixed: &str) -> &'static str {
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        "-"
    } else {
        ""
    }
}

/// Fixed-point text like JavaScript's `toFixed`: exact ties round away from
/// zero (`0.125` at 2 places is `0.13`) and a zero result carries no sign.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let value = finite_or_zero(value);
    let fixed = fixed_unsigned(value.abs(), decimals);
    format!("{}{fixed}", sign(value, &fixed))
}

/// Fixed decimals with `,` thousands separators, e.g. `1,234,567.89`
pub fn format_number(value: f64, decimals: usize) -> String {
    let value = finite_or_zero(value);
    let fixed = fixed_unsigned(value.abs(), decimals);
    let sign = sign(value, &fixed);
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(&fixed)),
    }
}

/// Large values with a K/M/B suffix, e.g. `1.2B`
pub fn format_compact(value: f64, decimals: usize) -> String {
    let value = finite_or_zero(value);
    let abs = value.abs();

    if abs >= 1e9 {
        format!("{:.*}B", decimals, value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.*}M", decimals, value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.*}K", decimals, value / 1e3)
    } else {
        format!("{:.*}", decimals, value)
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, finite_or_zero(value))
}
