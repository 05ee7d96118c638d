//! Class interval parsing.
//!
//! A class interval token is either a range written as `lower-upper`
//! (e.g. `"10-20"`, `" 2.5 - 7.5 "`) or a bare number (e.g. `"42"`), which is
//! treated as a degenerate interval of width zero.

use crate::error::ParseError;

/// Numeric boundaries of one parsed class interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower boundary.
    pub lower: f64,
    /// Upper boundary. Equal to `lower` for a bare value.
    pub upper: f64,
    /// `(lower + upper) / 2`.
    pub midpoint: f64,
    /// `upper - lower`. Zero for a bare value, negative for a reversed range.
    pub width: f64,
}

impl Interval {
    fn range(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            midpoint: (lower + upper) / 2.0,
            width: upper - lower,
        }
    }

    fn single(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
            midpoint: value,
            width: 0.0,
        }
    }

    /// Returns `true` if the upper boundary lies below the lower boundary.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.upper < self.lower
    }
}

/// Parses a class interval token.
///
/// Leading minus signs and exponent signs belong to the number they precede,
/// so `"-10--5"` is the range from -10 to -5 and `"1e-3"` is a bare value.
/// Reversed ranges are not rejected here; their width is negative.
///
/// # Examples
///
/// ```
/// use tendency_stats::interval;
///
/// let iv = interval::parse("10-20").unwrap();
/// assert_eq!((iv.lower, iv.upper, iv.midpoint, iv.width), (10.0, 20.0, 15.0, 10.0));
///
/// let iv = interval::parse(" 7 ").unwrap();
/// assert_eq!((iv.lower, iv.upper, iv.midpoint, iv.width), (7.0, 7.0, 7.0, 0.0));
///
/// assert!(interval::parse("ten-twenty").is_err());
/// ```
pub fn parse(token: &str) -> Result<Interval, ParseError> {
    let invalid = || ParseError::Interval {
        token: token.to_owned(),
    };

    let trimmed = token.trim();
    match find_separator(trimmed) {
        Some(idx) => {
            let lower = parse_number(&trimmed[..idx]).ok_or_else(invalid)?;
            let upper = parse_number(&trimmed[idx + 1..]).ok_or_else(invalid)?;
            Ok(Interval::range(lower, upper))
        }
        None => parse_number(trimmed)
            .map(Interval::single)
            .ok_or_else(invalid),
    }
}

/// Byte index of the hyphen separating the two bounds, if any.
///
/// The separator is the first hyphen that directly follows a digit or a
/// decimal point, ignoring whitespace in between.
fn find_separator(token: &str) -> Option<usize> {
    let mut prev = None;
    for (idx, ch) in token.char_indices() {
        if ch == '-' && prev.is_some_and(|p: char| p.is_ascii_digit() || p == '.') {
            return Some(idx);
        }
        if !ch.is_whitespace() {
            prev = Some(ch);
        }
    }
    None
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let iv = parse("0-10").unwrap();
        assert_eq!(iv.lower, 0.0);
        assert_eq!(iv.upper, 10.0);
        assert_eq!(iv.midpoint, 5.0);
        assert_eq!(iv.width, 10.0);
        assert!(!iv.is_reversed());
    }

    #[test]
    fn test_parse_trims_whitespace_around_parts() {
        let iv = parse("  2.5 -  7.5 ").unwrap();
        assert_eq!(iv.lower, 2.5);
        assert_eq!(iv.upper, 7.5);
        assert_eq!(iv.midpoint, 5.0);
    }

    #[test]
    fn test_parse_single_value() {
        let iv = parse("42").unwrap();
        assert_eq!(iv, Interval::single(42.0));
        assert_eq!(iv.width, 0.0);
    }

    #[test]
    fn test_parse_negative_bounds() {
        let iv = parse("-10--5").unwrap();
        assert_eq!(iv.lower, -10.0);
        assert_eq!(iv.upper, -5.0);
        assert_eq!(iv.width, 5.0);

        let iv = parse("-3").unwrap();
        assert_eq!(iv, Interval::single(-3.0));
    }

    #[test]
    fn test_parse_exponent_is_not_separator() {
        let iv = parse("1e-3").unwrap();
        assert_eq!(iv, Interval::single(0.001));
    }

    #[test]
    fn test_reversed_range_has_negative_width() {
        let iv = parse("20-10").unwrap();
        assert_eq!(iv.width, -10.0);
        assert!(iv.is_reversed());
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["", "abc", "10-", "-", "10-20-30", "1-x", "NaN", "inf-10"] {
            let err = parse(token).unwrap_err();
            assert_eq!(
                err,
                ParseError::Interval {
                    token: token.to_owned()
                },
                "token {token:?} should be rejected"
            );
        }
    }
}
