use std::fmt;

/// A token that could not be read as a number, a frequency, or a class interval.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    #[display("invalid class interval: '{token}'")]
    Interval { token: String },
    #[display("invalid frequency: '{token}' (expected a base-10 integer)")]
    Frequency { token: String },
    #[display("invalid data value: '{token}'")]
    Value { token: String },
}

/// The input sequences do not have a usable shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    #[display(
        "number of class intervals ({intervals}) and frequencies ({frequencies}) must be equal"
    )]
    LengthMismatch { intervals: usize, frequencies: usize },
    #[display("no data to analyze")]
    Empty,
}

/// The computation that rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    StepDeviationMean,
    GroupedMedian,
    GroupedMode,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl Computation {
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Computation::StepDeviationMean => "step-deviation mean",
            Computation::GroupedMedian => "grouped median",
            Computation::GroupedMode => "grouped mode",
        }
    }

    /// What the caller should use instead when the class width is zero.
    #[must_use]
    pub fn zero_width_alternative(self) -> &'static str {
        match self {
            Computation::StepDeviationMean => "use the direct or assumed-mean method instead",
            Computation::GroupedMedian | Computation::GroupedMode => {
                "use individual data analysis instead"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("{_0}")]
    Parse(#[error(not(source))] ParseError),
    #[display("{_0}")]
    Shape(#[error(not(source))] ShapeError),
    #[display("class {index} has negative frequency {frequency}")]
    NegativeFrequency { index: usize, frequency: i64 },
    #[display("class interval '{label}' is reversed (upper bound {upper} < lower bound {lower})")]
    ReversedInterval { label: String, lower: f64, upper: f64 },
    #[display("class width must be positive and finite, got {width}")]
    InvalidClassWidth { width: f64 },
    #[display("total frequency is zero")]
    ZeroTotalFrequency,
    #[display("total frequency exceeds {}", u64::MAX)]
    FrequencyOverflow,
    #[display("cannot expand {total} observations (limit {limit})")]
    TooManyObservations { total: u64, limit: u64 },
    #[display(
        "{computation} requires a non-zero class width (h = 0 means single values); {}",
        computation.zero_width_alternative()
    )]
    ZeroWidth { computation: Computation },
    #[display("frequency of the median class '{label}' (class {index}) is zero; check the frequency data")]
    ZeroClassFrequency { index: usize, label: String },
}

impl StatsError {
    /// Returns `true` when the error only rules out the grouped formula and an
    /// individual-data algorithm can stand in for it.
    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        matches!(self, StatsError::ZeroWidth { .. })
    }
}

impl From<ParseError> for StatsError {
    fn from(err: ParseError) -> Self {
        StatsError::Parse(err)
    }
}

impl From<ShapeError> for StatsError {
    fn from(err: ShapeError) -> Self {
        StatsError::Shape(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_message_names_alternative() {
        let err = StatsError::ZeroWidth {
            computation: Computation::StepDeviationMean,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("step-deviation mean requires a non-zero class width"));
        assert!(msg.ends_with("use the direct or assumed-mean method instead"));
        assert!(err.is_zero_width());
    }

    #[test]
    fn test_wrapped_errors_display_inner_message() {
        let err = StatsError::from(ParseError::Interval {
            token: "a-b".to_owned(),
        });
        assert_eq!(err.to_string(), "invalid class interval: 'a-b'");
        assert!(!err.is_zero_width());

        let err = StatsError::from(ShapeError::LengthMismatch {
            intervals: 3,
            frequencies: 2,
        });
        assert_eq!(
            err.to_string(),
            "number of class intervals (3) and frequencies (2) must be equal"
        );
    }

    #[test]
    fn test_wrapped_errors_are_not_repeated_as_source() {
        use std::error::Error as _;

        let err = StatsError::from(ParseError::Frequency {
            token: "x".to_owned(),
        });
        assert!(err.source().is_none());
        let err = StatsError::from(ShapeError::Empty);
        assert!(err.source().is_none());
    }
}
