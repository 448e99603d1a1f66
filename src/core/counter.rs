//! Signup counter arithmetic
//!
//! The counter lives in the page as text. Reading it back is lenient: leading
//! whitespace, an optional sign and the leading run of decimal digits. Anything
//! else, hex prefixes included, reads as zero.

/// Parse the decimal integer at the start of a displayed counter
pub fn parse_displayed(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// Text to display after one more signup
pub fn next_display(current: &str) -> String {
    parse_displayed(current).saturating_add(1).to_string()
}
