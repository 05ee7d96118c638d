use serde::Serialize;

use crate::{distribution::Distribution, individual::IndividualDataset};

/// Descriptive statistics summarizing a set of observations.
///
/// These accompany the central tendency measures: the size of the data, its
/// total, and its spread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of observations.
    pub count: u64,
    /// The sum of all observations.
    pub sum: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics of a dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tendency_stats::{descriptive::DescriptiveStats, individual::IndividualDataset};
    /// let data = IndividualDataset::new([5.0, 2.0, 4.0]).unwrap();
    /// let stats = DescriptiveStats::of(&data);
    /// assert_eq!(stats.count, 3);
    /// assert_eq!((stats.min, stats.max), (2.0, 5.0));
    /// ```
    #[must_use]
    pub fn of(data: &IndividualDataset) -> Self {
        let counts = data.value_counts();
        let (min, max) = (counts.min(), counts.max());
        Self {
            count: counts.total(),
            sum: data.sum(),
            min,
            max,
            range: max - min,
        }
    }

    /// Computes descriptive statistics of the observations a distribution
    /// represents, each class standing for `f` copies of its midpoint.
    ///
    /// The classes are never expanded, so this is cheap for any `N`.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the total frequency is positive
    /// * `None` - if every frequency is zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use tendency_stats::{descriptive::DescriptiveStats, distribution::Distribution};
    /// let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[2, 0, 1]).unwrap();
    /// let stats = DescriptiveStats::of_distribution(&dist).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.sum, 35.0);
    /// assert_eq!(stats.range, 20.0);
    /// ```
    #[must_use]
    pub fn of_distribution(dist: &Distribution) -> Option<Self> {
        let counts = dist.value_counts()?;
        let (min, max) = (counts.min(), counts.max());
        Some(Self {
            count: counts.total(),
            sum: dist.weighted_sum(),
            min,
            max,
            range: max - min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_stats() {
        let data = IndividualDataset::parse("35, 12, 15, 18, 22, 25, 25, 28, 30, 32").unwrap();
        let stats = DescriptiveStats::of(&data);
        assert_eq!(stats.count, 10);
        assert_eq!(stats.sum, 242.0);
        assert_eq!(stats.min, 12.0);
        assert_eq!(stats.max, 35.0);
        assert_eq!(stats.range, 23.0);
    }

    #[test]
    fn test_distribution_stats_match_expansion() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30", "30-40", "40-50"], &[5, 8, 12, 7, 3])
            .unwrap();
        let stats = DescriptiveStats::of_distribution(&dist).unwrap();
        assert_eq!(stats, DescriptiveStats::of(&dist.to_individual().unwrap()));
        assert_eq!(stats.count, 35);
        assert_eq!(stats.sum, 825.0);
        assert_eq!((stats.min, stats.max), (5.0, 45.0));
    }

    #[test]
    fn test_distribution_stats_without_expansion() {
        let dist = Distribution::build(&["0-10", "10-20"], &[5, 3_000_000_000]).unwrap();
        let stats = DescriptiveStats::of_distribution(&dist).unwrap();
        assert_eq!(stats.count, 3_000_000_005);
        assert_eq!((stats.min, stats.max), (5.0, 15.0));

        let empty = Distribution::build(&["0-10"], &[0]).unwrap();
        assert!(DescriptiveStats::of_distribution(&empty).is_none());
    }
}
