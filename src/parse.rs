//! Extraction of numeric samples from free-form text.
//!
//! Measurements are typically pasted or typed by hand, so the parser is
//! permissive: values may be separated by any mix of whitespace, commas and
//! semicolons, and tokens that are not finite numbers are skipped rather than
//! reported.

/// Returns `true` for characters that separate tokens.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

/// Parses every finite number in `text`, preserving entry order.
///
/// Tokens are split on runs of whitespace (including tabs and newlines),
/// commas and semicolons. Tokens that do not parse as `f64`, or that parse to
/// NaN or an infinity, are dropped silently.
///
/// # Examples
///
/// ```
/// use sigmax::parse::parse_sample;
///
/// assert_eq!(parse_sample("10 20, 30;40"), vec![10.0, 20.0, 30.0, 40.0]);
/// assert_eq!(parse_sample("abc 5 NaN"), vec![5.0]);
/// assert!(parse_sample("").is_empty());
/// ```
pub fn parse_sample(text: &str) -> Vec<f64> {
    text.split(is_separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
