use serde::Serialize;

use crate::{
    dataset::Dataset,
    descriptive::DescriptiveStats,
    error::StatsError,
    mean::MeanMethod,
    result::{Modality, StatResult},
};

/// Mean, median, and mode of a dataset together.
///
/// This structure provides the closing overview of an analysis by combining:
/// - The mean (direct method for grouped data)
/// - The median and mode, with the individual-data fallback when the class width is zero
/// - The modality label of the mode
/// - Count, sum, and spread of the observations
///
/// # Examples
///
/// ```
/// use tendency_stats::{individual::IndividualDataset, summary::CentralTendency};
///
/// let data = IndividualDataset::parse("2, 4, 4, 6").unwrap();
/// let summary = CentralTendency::new(&data.into()).unwrap();
///
/// assert_eq!(summary.mean.value.as_single(), Some(4.0));
/// assert_eq!(summary.median.value.as_single(), Some(4.0));
/// assert_eq!(summary.mode.value.as_single(), Some(4.0));
/// assert_eq!(summary.stats.unwrap().range, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralTendency {
    pub mean: StatResult,
    pub median: StatResult,
    pub mode: StatResult,
    /// Number of modal classes for the grouped formula, otherwise the number
    /// of modal values.
    pub modality: Modality,
    /// Count, sum, and spread of the observations; `None` for a grouped
    /// distribution with zero total frequency.
    pub stats: Option<DescriptiveStats>,
}

impl CentralTendency {
    /// Computes all three measures.
    ///
    /// # Errors
    ///
    /// The first error raised by the mean, median, or mode computation.
    pub fn new(data: &Dataset) -> Result<Self, StatsError> {
        let mean = data.mean(MeanMethod::Direct)?;
        let median = data.median()?;
        let mode = data.mode()?;
        let modality = mode.modality.unwrap_or_else(|| Modality::of(&mode.value));
        let stats = data.descriptive_stats();

        Ok(Self {
            mean,
            median,
            mode,
            modality,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Distribution;

    #[test]
    fn test_grouped_summary() {
        let dist = Distribution::build(
            &["0-10", "10-20", "20-30", "30-40", "40-50"],
            &[5, 8, 12, 7, 3],
        )
        .unwrap();
        let summary = CentralTendency::new(&dist.into()).unwrap();
        assert_eq!(summary.median.value.as_single(), Some(23.75));
        assert_eq!(summary.modality, Modality::Unimodal);

        let stats = summary.stats.unwrap();
        assert_eq!(stats.count, 35);
        assert_eq!(stats.sum, 825.0);
        assert_eq!((stats.min, stats.max), (5.0, 45.0));
    }

    #[test]
    fn test_grouped_summary_counts_tied_classes() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30", "30-40"], &[2, 6, 6, 1]).unwrap();
        let summary = CentralTendency::new(&dist.into()).unwrap();
        assert_eq!(summary.modality, Modality::Bimodal);
        assert_eq!(summary.mode.modal_classes, [1, 2]);
    }

    #[test]
    fn test_grouped_summary_with_huge_frequency() {
        let dist = Distribution::build(&["0-10", "10-20"], &[5, 3_000_000_000]).unwrap();
        let summary = CentralTendency::new(&dist.into()).unwrap();
        let stats = summary.stats.unwrap();
        assert_eq!(stats.count, 3_000_000_005);
        assert_eq!(stats.range, 10.0);
    }

    #[test]
    fn test_summary_propagates_errors() {
        let dist = Distribution::build(&["0-10"], &[0]).unwrap();
        assert_eq!(
            CentralTendency::new(&dist.into()).unwrap_err(),
            StatsError::ZeroTotalFrequency
        );
    }

    #[test]
    fn test_bimodal_summary() {
        let data = crate::individual::IndividualDataset::parse("1, 1, 2, 3, 3").unwrap();
        let summary = CentralTendency::new(&data.into()).unwrap();
        assert_eq!(summary.modality, Modality::Bimodal);
        assert_eq!(summary.mode.value.values(), [1.0, 3.0]);
    }
}
