//! Splitting raw comma-separated text into typed sequences.

use crate::error::ParseError;

/// Splits comma-separated class interval text into trimmed tokens.
///
/// Empty tokens are kept so that they surface as parse errors when the
/// distribution is built.
///
/// # Examples
///
/// ```
/// use tendency_stats::input;
///
/// let tokens = input::split_intervals("0-10, 10-20 ,20-30");
/// assert_eq!(tokens, ["0-10", "10-20", "20-30"]);
/// ```
#[must_use]
pub fn split_intervals(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_owned()).collect()
}

/// Parses comma-separated base-10 integer frequencies.
///
/// Negative values parse successfully; they are rejected when the
/// distribution is built.
///
/// # Examples
///
/// ```
/// use tendency_stats::input;
///
/// assert_eq!(input::parse_frequencies("5, 8, 12").unwrap(), [5, 8, 12]);
/// assert!(input::parse_frequencies("5, eight").is_err());
/// ```
pub fn parse_frequencies(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::Frequency {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Parses comma-separated real-valued observations.
///
/// Blank tokens (e.g. a trailing comma) are skipped. Non-finite values are
/// rejected.
///
/// # Examples
///
/// ```
/// use tendency_stats::input;
///
/// assert_eq!(input::parse_values("3, 1.5, 2,").unwrap(), [3.0, 1.5, 2.0]);
/// ```
pub fn parse_values(text: &str) -> Result<Vec<f64>, ParseError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::Value {
                    token: token.to_owned(),
                })
        })
        .collect()
}
