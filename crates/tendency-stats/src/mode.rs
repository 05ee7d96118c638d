//! Mode by the grouped formula or by frequency count.

use crate::{
    counts::ValueCounts,
    distribution::Distribution,
    error::{Computation, StatsError},
    individual::IndividualDataset,
    result::{Diagnostic, Modality, StatResult, Step, StepKind},
};

/// Grouped mode `Z = L + ((f₁ - f₀) / (2f₁ - f₀ - f₂)) × h`.
///
/// Every class with the highest frequency is a modal class, and their count
/// decides the modality. The formula is applied to the first of them; `f₀`
/// and `f₂` are the frequencies of its neighbours (0 at either end). When the
/// denominator is zero the formula is undefined and the modal class midpoint
/// is returned with [`Diagnostic::UndefinedModeFormula`].
///
/// # Errors
///
/// [`StatsError::ZeroWidth`] when the class width is zero.
///
/// # Examples
///
/// ```
/// use tendency_stats::{distribution::Distribution, mode, result::Modality};
///
/// let dist = Distribution::build(
///     &["0-10", "10-20", "20-30", "30-40", "40-50"],
///     &[5, 8, 12, 7, 3],
/// )
/// .unwrap();
/// let result = mode::grouped(&dist).unwrap();
/// assert_eq!(result.class, Some(2));
/// assert_eq!(result.modality, Some(Modality::Unimodal));
/// let z = result.value.as_single().unwrap();
/// assert!((z - (20.0 + 4.0 / 9.0 * 10.0)).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn grouped(dist: &Distribution) -> Result<StatResult, StatsError> {
    let h = dist.class_width();
    if h == 0.0 {
        return Err(StatsError::ZeroWidth {
            computation: Computation::GroupedMode,
        });
    }

    let classes = dist.classes();
    let modal_classes = modal_class_indices(dist);
    let index = modal_classes.first().copied().unwrap_or(0);
    let class = &classes[index];
    tracing::debug!(
        index,
        label = %class.label,
        num_modal_classes = modal_classes.len(),
        "selected modal class"
    );

    let f1 = class.frequency as f64;
    let f0 = index
        .checked_sub(1)
        .map_or(0.0, |i| classes[i].frequency as f64);
    let f2 = classes.get(index + 1).map_or(0.0, |c| c.frequency as f64);
    let lowest = classes.iter().map(|c| c.frequency).min().unwrap_or(0);
    let l = class.lower;
    let numerator = f1 - f0;
    let denominator = 2.0 * f1 - f0 - f2;

    let steps = vec![
        Step::new(StepKind::LowerBoundary, l),
        Step::new(StepKind::ModalFrequency, f1),
        Step::new(StepKind::PrecedingFrequency, f0),
        Step::new(StepKind::FollowingFrequency, f2),
        Step::new(StepKind::LowestFrequency, lowest as f64),
        Step::new(StepKind::ClassWidth, h),
        Step::new(StepKind::Numerator, numerator),
        Step::new(StepKind::Denominator, denominator),
        Step::new(StepKind::Midpoint, class.midpoint),
    ];

    if denominator == 0.0 {
        tracing::warn!(
            index,
            midpoint = class.midpoint,
            "mode formula denominator is zero, using modal class midpoint"
        );
        return Ok(StatResult::single(class.midpoint, steps)
            .with_class(index)
            .with_modal_classes(modal_classes)
            .with_diagnostic(Diagnostic::UndefinedModeFormula {
                midpoint: class.midpoint,
            }));
    }

    let mode = l + (numerator / denominator) * h;
    Ok(StatResult::single(mode, steps)
        .with_class(index)
        .with_modal_classes(modal_classes))
}

/// Indices of all classes with the highest frequency, in class order.
///
/// Empty when every frequency is zero.
fn modal_class_indices(dist: &Distribution) -> Vec<usize> {
    let max = dist.classes().iter().map(|c| c.frequency).max().unwrap_or(0);
    if max == 0 {
        return vec![];
    }
    dist.classes()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.frequency == max)
        .map(|(i, _)| i)
        .collect()
}

/// Modal values of individual observations.
///
/// # Examples
///
/// ```
/// use tendency_stats::{individual::IndividualDataset, mode};
///
/// let data = IndividualDataset::new([3.0, 1.0, 3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(mode::individual(&data).value.values(), [1.0, 3.0]);
/// ```
#[must_use]
pub fn individual(data: &IndividualDataset) -> StatResult {
    frequency_count(&data.value_counts())
}

/// Modal values of a table of observations.
///
/// Every distinct value sharing the highest occurrence count is a mode, in
/// ascending order. The steps list each distinct value followed by its
/// occurrence count, then the maximum count.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn frequency_count(counts: &ValueCounts) -> StatResult {
    let entries = counts.entries();
    let max_count = entries.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let modes = entries
        .iter()
        .filter(|&&(_, c)| c == max_count)
        .map(|&(v, _)| v)
        .collect::<Vec<_>>();

    let mut steps = entries
        .iter()
        .flat_map(|&(v, c)| {
            [
                Step::new(StepKind::DistinctValue, v),
                Step::new(StepKind::Occurrences, c as f64),
            ]
        })
        .collect::<Vec<_>>();
    steps.push(Step::new(StepKind::MaxOccurrences, max_count as f64));

    let modality = Modality::from_count(modes.len());
    StatResult::multiple(modes, steps).with_modality(modality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::StatValue;

    #[test]
    fn test_grouped_sample_terms() {
        let dist = Distribution::build(
            &["0-10", "10-20", "20-30", "30-40", "40-50"],
            &[5, 8, 12, 7, 3],
        )
        .unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.class, Some(2));
        assert_eq!(result.step(StepKind::LowerBoundary), Some(20.0));
        assert_eq!(result.step(StepKind::ModalFrequency), Some(12.0));
        assert_eq!(result.step(StepKind::PrecedingFrequency), Some(8.0));
        assert_eq!(result.step(StepKind::FollowingFrequency), Some(7.0));
        assert_eq!(result.step(StepKind::Numerator), Some(4.0));
        assert_eq!(result.step(StepKind::Denominator), Some(9.0));
        assert_eq!(result.step(StepKind::LowestFrequency), Some(3.0));
        assert_eq!(result.value.as_single(), Some(20.0 + (4.0 / 9.0) * 10.0));
        assert_eq!(result.modal_classes, [2]);
        assert_eq!(result.modality, Some(Modality::Unimodal));
        assert!(result.diagnostic.is_none());
    }

    #[test]
    fn test_grouped_modal_class_at_edges() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[9, 4, 1]).unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.class, Some(0));
        assert_eq!(result.step(StepKind::PrecedingFrequency), Some(0.0));
        // 0 + (9 - 0) / (18 - 0 - 4) * 10
        assert_eq!(result.value.as_single(), Some((9.0 / 14.0) * 10.0));

        let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[1, 4, 9]).unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.class, Some(2));
        assert_eq!(result.step(StepKind::FollowingFrequency), Some(0.0));
    }

    #[test]
    fn test_grouped_tied_classes_are_bimodal() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30", "30-40"], &[2, 6, 6, 1]).unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.class, Some(1));
        assert_eq!(result.modal_classes, [1, 2]);
        assert_eq!(result.modality, Some(Modality::Bimodal));
        assert_eq!(result.step(StepKind::LowestFrequency), Some(1.0));

        let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[4, 4, 4]).unwrap();
        assert_eq!(grouped(&dist).unwrap().modality, Some(Modality::Trimodal));
    }

    #[test]
    fn test_grouped_equal_frequencies_stay_finite() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[4, 4, 4]).unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.class, Some(0));
        assert!(result.value.as_single().unwrap().is_finite());
    }

    #[test]
    fn test_grouped_zero_denominator_falls_back_to_midpoint() {
        let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[0, 0, 0]).unwrap();
        let result = grouped(&dist).unwrap();
        assert_eq!(result.step(StepKind::Denominator), Some(0.0));
        assert_eq!(result.value.as_single(), Some(5.0));
        assert_eq!(
            result.diagnostic,
            Some(Diagnostic::UndefinedModeFormula { midpoint: 5.0 })
        );
        assert!(result.modal_classes.is_empty());
        assert_eq!(result.modality, Some(Modality::None));
    }

    #[test]
    fn test_grouped_requires_class_width() {
        let dist = Distribution::build(&["1", "2"], &[1, 2]).unwrap();
        assert_eq!(
            grouped(&dist).unwrap_err(),
            StatsError::ZeroWidth {
                computation: Computation::GroupedMode
            }
        );
    }

    #[test]
    fn test_individual_sample_is_unimodal() {
        let data = IndividualDataset::new([
            12.0, 15.0, 18.0, 22.0, 25.0, 25.0, 28.0, 30.0, 32.0, 35.0, 35.0, 35.0, 40.0, 42.0,
            45.0,
        ])
        .unwrap();
        let result = individual(&data);
        assert_eq!(result.value, StatValue::Multiple(vec![35.0]));
        assert_eq!(result.value.as_single(), Some(35.0));
        assert_eq!(result.step(StepKind::MaxOccurrences), Some(3.0));
        assert_eq!(result.modality, Some(Modality::Unimodal));
    }

    #[test]
    fn test_individual_counts_each_distinct_value() {
        let data = IndividualDataset::new([2.0, 1.0, 2.0]).unwrap();
        let result = individual(&data);
        let steps = result
            .steps
            .iter()
            .map(|s| (s.kind, s.value))
            .collect::<Vec<_>>();
        assert_eq!(
            steps,
            [
                (StepKind::DistinctValue, 1.0),
                (StepKind::Occurrences, 1.0),
                (StepKind::DistinctValue, 2.0),
                (StepKind::Occurrences, 2.0),
                (StepKind::MaxOccurrences, 2.0),
            ]
        );
    }

    #[test]
    fn test_individual_all_distinct_is_multimodal() {
        let data = IndividualDataset::new([4.0, 3.0, 2.0, 1.0]).unwrap();
        let result = individual(&data);
        assert_eq!(result.value.values(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(result.modality, Some(Modality::Multimodal));
    }

    #[test]
    fn test_individual_trimodal() {
        let data = IndividualDataset::new([1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0]).unwrap();
        let result = individual(&data);
        assert_eq!(result.value.values(), [1.0, 2.0, 3.0]);
        assert_eq!(result.modality, Some(Modality::Trimodal));
    }
}
