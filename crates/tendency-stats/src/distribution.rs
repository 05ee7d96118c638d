//! Frequency distributions built from class intervals and counts.

use serde::Serialize;

use crate::{
    counts::ValueCounts,
    error::{ShapeError, StatsError},
    individual::IndividualDataset,
    input,
    interval::{self, Interval},
};

/// Largest number of observations [`Distribution::to_individual`] will expand.
pub const MAX_EXPANDED_OBSERVATIONS: u64 = 10_000_000;

/// One frequency class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRecord {
    /// The interval text as entered.
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub midpoint: f64,
    /// `upper - lower`; zero for a bare value.
    pub width: f64,
    pub frequency: u64,
}

impl ClassRecord {
    fn new(label: String, interval: Interval, frequency: u64) -> Self {
        Self {
            label,
            lower: interval.lower,
            upper: interval.upper,
            midpoint: interval.midpoint,
            width: interval.width,
            frequency,
        }
    }

    /// `frequency × midpoint`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn product(&self) -> f64 {
        self.frequency as f64 * self.midpoint
    }
}

/// A dataset in grouped form.
///
/// Classes keep their input order, which decides cumulative frequencies and
/// the tie-break between equally frequent modal classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    classes: Vec<ClassRecord>,
    class_width: f64,
    total_frequency: u64,
    weighted_sum: f64,
}

impl Distribution {
    /// Builds a distribution from parallel interval tokens and frequencies.
    ///
    /// # Errors
    ///
    /// * [`StatsError::Shape`] - the sequences are empty or differ in length
    /// * [`StatsError::Parse`] - a token is not a number or `number-number`
    /// * [`StatsError::NegativeFrequency`] - a frequency is below zero
    /// * [`StatsError::ReversedInterval`] - a range has `upper < lower`
    /// * [`StatsError::FrequencyOverflow`] - the frequencies sum past `u64::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::distribution::Distribution;
    ///
    /// let dist = Distribution::build(
    ///     &["0-10", "10-20", "20-30", "30-40", "40-50"],
    ///     &[5, 8, 12, 7, 3],
    /// )
    /// .unwrap();
    /// assert_eq!(dist.total_frequency(), 35);
    /// assert_eq!(dist.class_width(), 10.0);
    /// assert_eq!(dist.weighted_sum(), 825.0);
    /// ```
    pub fn build<S>(intervals: &[S], frequencies: &[i64]) -> Result<Self, StatsError>
    where
        S: AsRef<str>,
    {
        if intervals.len() != frequencies.len() {
            return Err(ShapeError::LengthMismatch {
                intervals: intervals.len(),
                frequencies: frequencies.len(),
            }
            .into());
        }
        if intervals.is_empty() {
            return Err(ShapeError::Empty.into());
        }

        let classes = intervals
            .iter()
            .zip(frequencies)
            .enumerate()
            .map(|(index, (token, &frequency))| -> Result<_, StatsError> {
                let token = token.as_ref();
                let interval = interval::parse(token)?;
                let frequency = u64::try_from(frequency)
                    .map_err(|_| StatsError::NegativeFrequency { index, frequency })?;
                if interval.is_reversed() {
                    return Err(StatsError::ReversedInterval {
                        label: token.trim().to_owned(),
                        lower: interval.lower,
                        upper: interval.upper,
                    });
                }
                Ok(ClassRecord::new(token.trim().to_owned(), interval, frequency))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_classes(classes)
    }

    /// Builds a distribution from raw comma-separated interval and frequency text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::distribution::Distribution;
    ///
    /// let dist = Distribution::parse("0-10, 10-20", "3, 4").unwrap();
    /// assert_eq!(dist.classes().len(), 2);
    /// assert_eq!(dist.classes()[1].label, "10-20");
    /// ```
    pub fn parse(intervals: &str, frequencies: &str) -> Result<Self, StatsError> {
        let intervals = input::split_intervals(intervals);
        let frequencies = input::parse_frequencies(frequencies)?;
        Self::build(&intervals, &frequencies)
    }

    pub(crate) fn from_classes(classes: Vec<ClassRecord>) -> Result<Self, StatsError> {
        debug_assert!(!classes.is_empty(), "distribution must have classes");
        let class_width = detect_class_width(&classes);
        let total_frequency = classes
            .iter()
            .try_fold(0_u64, |acc, c| acc.checked_add(c.frequency))
            .ok_or(StatsError::FrequencyOverflow)?;
        let weighted_sum = classes.iter().map(ClassRecord::product).sum();
        tracing::debug!(
            num_classes = classes.len(),
            class_width,
            total_frequency,
            weighted_sum,
            "built distribution"
        );
        Ok(Self {
            classes,
            class_width,
            total_frequency,
            weighted_sum,
        })
    }

    /// Returns a copy with the class width `h` set explicitly instead of
    /// auto-detected.
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidClassWidth`] if `class_width` is not positive and finite.
    pub fn with_class_width(&self, class_width: f64) -> Result<Self, StatsError> {
        if !(class_width.is_finite() && class_width > 0.0) {
            return Err(StatsError::InvalidClassWidth { width: class_width });
        }
        Ok(Self {
            class_width,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    /// The class width `h`; zero when every class is a bare value.
    #[must_use]
    pub fn class_width(&self) -> f64 {
        self.class_width
    }

    /// `N`, the sum of all frequencies.
    #[must_use]
    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// `Σ midpoint × frequency`.
    #[must_use]
    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    /// Midpoint of the middle class (`classes[len / 2]`), the default
    /// assumed mean.
    #[must_use]
    pub fn middle_midpoint(&self) -> f64 {
        self.classes[self.classes.len() / 2].midpoint
    }

    /// Cumulative frequency of every class, in input order.
    #[must_use]
    pub fn cumulative_frequencies(&self) -> Vec<u64> {
        // every partial sum is bounded by the total checked in `from_classes`
        self.classes
            .iter()
            .scan(0, |acc, c| {
                *acc += c.frequency;
                Some(*acc)
            })
            .collect()
    }

    /// Class midpoints with their frequencies, as a table of observations.
    ///
    /// Returns `None` when the total frequency is zero.
    #[must_use]
    pub fn value_counts(&self) -> Option<ValueCounts> {
        ValueCounts::from_pairs(self.classes.iter().map(|c| (c.midpoint, c.frequency)))
    }

    /// Expands each class midpoint `frequency` times into individual observations.
    ///
    /// # Errors
    ///
    /// * [`StatsError::ZeroTotalFrequency`] - there is nothing to expand
    /// * [`StatsError::TooManyObservations`] - `N` exceeds [`MAX_EXPANDED_OBSERVATIONS`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::distribution::Distribution;
    ///
    /// let dist = Distribution::build(&["10-20", "0-10"], &[1, 2]).unwrap();
    /// let data = dist.to_individual().unwrap();
    /// assert_eq!(data.values(), [5.0, 5.0, 15.0]);
    /// ```
    pub fn to_individual(&self) -> Result<IndividualDataset, StatsError> {
        if self.total_frequency > MAX_EXPANDED_OBSERVATIONS {
            return Err(StatsError::TooManyObservations {
                total: self.total_frequency,
                limit: MAX_EXPANDED_OBSERVATIONS,
            });
        }
        let values = self.classes.iter().flat_map(|c| {
            #[expect(clippy::cast_possible_truncation)]
            let count = c.frequency as usize;
            std::iter::repeat_n(c.midpoint, count)
        });
        IndividualDataset::new(values).ok_or(StatsError::ZeroTotalFrequency)
    }
}

/// Picks the class width `h`.
///
/// The most frequent width wins, ties going to the width seen first. A
/// winning width of zero is replaced by the first non-zero width, if any.
fn detect_class_width(classes: &[ClassRecord]) -> f64 {
    // (width, count) in order of first occurrence
    let mut counts: Vec<(f64, usize)> = vec![];
    for class in classes {
        match counts.iter_mut().find(|(w, _)| *w == class.width) {
            Some((_, count)) => *count += 1,
            None => counts.push((class.width, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for &(width, count) in &counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((width, count));
        }
    }

    match best {
        Some((width, _)) if width != 0.0 => width,
        _ => classes
            .iter()
            .map(|c| c.width)
            .find(|&w| w != 0.0)
            .unwrap_or(0.0),
    }
}
