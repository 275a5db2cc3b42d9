//! Phone number handling for the national `+998` format.
//!
//! Numbers are stored normalized (`+998XXXXXXXXX`) and compared digits-only,
//! so punctuation and spacing in user input never affect lookups.

/// Country calling code shared by every stored number.
pub const COUNTRY_CODE: &str = "998";

/// Digits in a local subscriber number.
pub const LOCAL_DIGITS: usize = 9;

/// Strip everything but ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize arbitrary input to `+998XXXXXXXXX`.
///
/// Drops a leading country code if present, truncates the local part to
/// nine digits, and returns an empty string for input with no digits.
pub fn normalize(input: &str) -> String {
    let digits = digits_only(input);
    let local = digits.strip_prefix(COUNTRY_CODE).unwrap_or(&digits);
    let trimmed: String = local.chars().take(LOCAL_DIGITS).collect();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("+{COUNTRY_CODE}{trimmed}")
    }
}

/// Check that a value is exactly `+998` followed by nine digits.
pub fn is_normalized(value: &str) -> bool {
    match value.strip_prefix("+998") {
        Some(rest) => rest.len() == LOCAL_DIGITS && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Format a normalized number for display: `+998 (XX) XXX-XX-XX`.
///
/// Short input is padded with underscores (masked-input style); values
/// without the country code pass through unchanged.
pub fn format_display(normalized: &str) -> String {
    let digits: String = digits_only(normalized).chars().take(12).collect();
    if !digits.starts_with(COUNTRY_CODE) {
        return normalized.to_string();
    }
    let local: Vec<char> = digits.chars().skip(3).collect();
    let segment = |from: usize, to: usize| -> String {
        let to = to.min(local.len());
        let from = from.min(to);
        local[from..to].iter().collect()
    };
    format!(
        "+998 ({}) {}-{}-{}",
        pad(&segment(0, 2), 2),
        pad(&segment(2, 5), 3),
        pad(&segment(5, 7), 2),
        pad(&segment(7, 9), 2),
    )
}

fn pad(part: &str, width: usize) -> String {
    let mut out = part.to_string();
    while out.chars().count() < width {
        out.push('_');
    }
    out
}
