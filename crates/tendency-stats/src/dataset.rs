//! One entry point for both grouped and individual data.
//!
//! [`Dataset`] picks the algorithm family from the kind of data it holds. For
//! grouped data whose class width is zero, the median and mode fall back to
//! the individual-data algorithms on the class (value, frequency) table and
//! flag the substitution with [`Diagnostic::ZeroWidthFallback`].

use crate::{
    counts::ValueCounts,
    descriptive::DescriptiveStats,
    distribution::Distribution,
    error::StatsError,
    individual::IndividualDataset,
    mean::{self, MeanMethod},
    median, mode,
    result::{Diagnostic, StatResult},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Grouped(Distribution),
    Individual(IndividualDataset),
}

impl From<Distribution> for Dataset {
    fn from(dist: Distribution) -> Self {
        Dataset::Grouped(dist)
    }
}

impl From<IndividualDataset> for Dataset {
    fn from(data: IndividualDataset) -> Self {
        Dataset::Individual(data)
    }
}

impl Dataset {
    /// Computes the mean.
    ///
    /// Individual data always uses `Σx / n`; `method` only applies to grouped
    /// data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::{dataset::Dataset, distribution::Distribution, mean::MeanMethod};
    ///
    /// let dist = Distribution::build(&["0-10", "10-20"], &[1, 1]).unwrap();
    /// let mean = Dataset::from(dist).mean(MeanMethod::Direct).unwrap();
    /// assert_eq!(mean.value.as_single(), Some(10.0));
    /// ```
    pub fn mean(&self, method: MeanMethod) -> Result<StatResult, StatsError> {
        match self {
            Dataset::Grouped(dist) => mean::grouped(dist, method),
            Dataset::Individual(data) => Ok(mean::individual(data)),
        }
    }

    /// Computes the median.
    ///
    /// # Examples
    ///
    /// ```
    /// use tendency_stats::{dataset::Dataset, distribution::Distribution, result::Diagnostic};
    ///
    /// // bare values only: h = 0, so the order-statistic median is used
    /// let dist = Distribution::build(&["1", "2", "3"], &[1, 1, 2]).unwrap();
    /// let median = Dataset::from(dist).median().unwrap();
    /// assert_eq!(median.value.as_single(), Some(2.5));
    /// assert_eq!(median.diagnostic, Some(Diagnostic::ZeroWidthFallback));
    /// ```
    pub fn median(&self) -> Result<StatResult, StatsError> {
        match self {
            Dataset::Grouped(dist) => {
                with_individual_fallback(dist, median::grouped, median::order_statistic)
            }
            Dataset::Individual(data) => Ok(median::individual(data)),
        }
    }

    /// Computes the mode.
    pub fn mode(&self) -> Result<StatResult, StatsError> {
        match self {
            Dataset::Grouped(dist) => {
                with_individual_fallback(dist, mode::grouped, mode::frequency_count)
            }
            Dataset::Individual(data) => Ok(mode::individual(data)),
        }
    }

    /// Count, sum, and spread of the observations.
    ///
    /// `None` for a grouped distribution with zero total frequency.
    #[must_use]
    pub fn descriptive_stats(&self) -> Option<DescriptiveStats> {
        match self {
            Dataset::Grouped(dist) => DescriptiveStats::of_distribution(dist),
            Dataset::Individual(data) => Some(DescriptiveStats::of(data)),
        }
    }
}

fn with_individual_fallback<G, I>(
    dist: &Distribution,
    grouped: G,
    individual: I,
) -> Result<StatResult, StatsError>
where
    G: FnOnce(&Distribution) -> Result<StatResult, StatsError>,
    I: FnOnce(&ValueCounts) -> StatResult,
{
    match grouped(dist) {
        Err(err) if err.is_zero_width() => {
            tracing::warn!("{err}");
            let counts = dist.value_counts().ok_or(StatsError::ZeroTotalFrequency)?;
            Ok(individual(&counts).with_diagnostic(Diagnostic::ZeroWidthFallback))
        }
        result => result,
    }
}
