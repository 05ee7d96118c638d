//! Raw observations, kept in ascending order.

use serde::Serialize;

use crate::{
    counts::ValueCounts,
    distribution::{ClassRecord, Distribution},
    error::{ShapeError, StatsError},
    input,
};

/// A non-empty set of individual observations sorted in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualDataset {
    values: Vec<f64>,
}

impl IndividualDataset {
    /// Collects and sorts the observations.
    ///
    /// Returns `None` if there are no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::individual::IndividualDataset;
    ///
    /// let data = IndividualDataset::new([3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(data.values(), [1.0, 2.0, 3.0]);
    /// assert!(IndividualDataset::new([]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);
        Some(Self { values })
    }

    /// Parses comma-separated observations.
    ///
    /// # Errors
    ///
    /// * [`StatsError::Parse`] - a token is not a finite number
    /// * [`StatsError::Shape`] - no values were given
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::individual::IndividualDataset;
    ///
    /// let data = IndividualDataset::parse("12, 15, 9").unwrap();
    /// assert_eq!(data.values(), [9.0, 12.0, 15.0]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, StatsError> {
        let values = input::parse_values(text)?;
        Self::new(values).ok_or(StatsError::Shape(ShapeError::Empty))
    }

    /// The observations, ascending.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The distinct observations with their occurrence counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::individual::IndividualDataset;
    ///
    /// let data = IndividualDataset::parse("3, 1, 3").unwrap();
    /// assert_eq!(data.value_counts().entries(), [(1.0, 1), (3.0, 2)]);
    /// ```
    #[must_use]
    pub fn value_counts(&self) -> ValueCounts {
        ValueCounts::from_sorted(&self.values)
    }

    /// Turns every observation into its own class with frequency 1.
    ///
    /// With `class_width == 0.0` each class is the bare value. Otherwise each
    /// class is the interval of that width centered on the value, and the
    /// distribution's class width is set to `class_width`.
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidClassWidth`] if `class_width` is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::individual::IndividualDataset;
    ///
    /// let data = IndividualDataset::new([4.0, 2.0]).unwrap();
    /// let dist = data.to_distribution(1.0).unwrap();
    /// assert_eq!(dist.class_width(), 1.0);
    /// assert_eq!(dist.classes()[0].lower, 1.5);
    /// assert_eq!(dist.classes()[0].upper, 2.5);
    /// ```
    pub fn to_distribution(&self, class_width: f64) -> Result<Distribution, StatsError> {
        if !(class_width.is_finite() && class_width >= 0.0) {
            return Err(StatsError::InvalidClassWidth { width: class_width });
        }
        let half = class_width / 2.0;
        let classes = self
            .values
            .iter()
            .map(|&v| {
                let (lower, upper) = (v - half, v + half);
                ClassRecord {
                    label: if class_width == 0.0 {
                        format!("{v}")
                    } else {
                        format!("{lower}-{upper}")
                    },
                    lower,
                    upper,
                    midpoint: v,
                    width: upper - lower,
                    frequency: 1,
                }
            })
            .collect();
        let dist = Distribution::from_classes(classes)?;
        if class_width == 0.0 {
            Ok(dist)
        } else {
            dist.with_class_width(class_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_values() {
        let data = IndividualDataset::parse("35, 12, 25, 25").unwrap();
        assert_eq!(data.values(), [12.0, 25.0, 25.0, 35.0]);
        assert_eq!(data.len(), 4);
        assert!(!data.is_empty());
        assert_eq!(data.sum(), 97.0);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert_eq!(
            IndividualDataset::parse(" , ").unwrap_err(),
            StatsError::Shape(ShapeError::Empty)
        );
        assert!(matches!(
            IndividualDataset::parse("1, two").unwrap_err(),
            StatsError::Parse(_)
        ));
    }

    #[test]
    fn test_to_distribution_bare_values() {
        let data = IndividualDataset::new([2.0, 1.0, 2.0]).unwrap();
        let dist = data.to_distribution(0.0).unwrap();
        assert_eq!(dist.class_width(), 0.0);
        assert_eq!(dist.total_frequency(), 3);
        let labels = dist.classes().iter().map(|c| c.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["1", "2", "2"]);
        assert!(dist.classes().iter().all(|c| c.frequency == 1 && c.width == 0.0));
    }

    #[test]
    fn test_to_distribution_rejects_invalid_width() {
        let data = IndividualDataset::new([1.0]).unwrap();
        assert!(data.to_distribution(-1.0).is_err());
        assert!(data.to_distribution(f64::NAN).is_err());
    }
}
