//! Median by grouped interpolation or by order statistic.

use crate::{
    counts::ValueCounts,
    distribution::Distribution,
    error::{Computation, StatsError},
    individual::IndividualDataset,
    result::{StatResult, Step, StepKind},
};

/// Interpolated median of grouped data.
///
/// `median = L + ((N/2 - CF) / f) × h`, where the median class is the first
/// class whose cumulative frequency reaches `N/2`, `L` its lower boundary,
/// `f` its frequency, and `CF` the cumulative frequency before it.
///
/// # Errors
///
/// * [`StatsError::ZeroWidth`] - the class width is zero
/// * [`StatsError::ZeroTotalFrequency`] - all frequencies are zero
/// * [`StatsError::ZeroClassFrequency`] - the median class has frequency zero
///
/// # Examples
///
/// ```
/// use tendency_stats::{distribution::Distribution, median};
///
/// let dist = Distribution::build(
///     &["0-10", "10-20", "20-30", "30-40", "40-50"],
///     &[5, 8, 12, 7, 3],
/// )
/// .unwrap();
/// let result = median::grouped(&dist).unwrap();
/// assert_eq!(result.class, Some(2));
/// assert_eq!(result.value.as_single(), Some(23.75));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn grouped(dist: &Distribution) -> Result<StatResult, StatsError> {
    let h = dist.class_width();
    if h == 0.0 {
        return Err(StatsError::ZeroWidth {
            computation: Computation::GroupedMedian,
        });
    }
    let n = dist.total_frequency();
    if n == 0 {
        return Err(StatsError::ZeroTotalFrequency);
    }

    let cumulative = dist.cumulative_frequencies();
    let position = n as f64 / 2.0;
    let index = cumulative
        .iter()
        .position(|&cf| cf as f64 >= position)
        .unwrap_or(cumulative.len() - 1);
    let class = &dist.classes()[index];
    let cf_before = if index == 0 { 0 } else { cumulative[index - 1] };
    tracing::debug!(index, label = %class.label, position, "selected median class");

    if class.frequency == 0 {
        return Err(StatsError::ZeroClassFrequency {
            index,
            label: class.label.clone(),
        });
    }

    let l = class.lower;
    let f = class.frequency as f64;
    let cf = cf_before as f64;

    let mut steps = cumulative
        .iter()
        .enumerate()
        .map(|(i, &cf)| Step::for_class(StepKind::CumulativeFrequency, i, cf as f64))
        .collect::<Vec<_>>();
    steps.extend([
        Step::new(StepKind::Count, n as f64),
        Step::new(StepKind::MedianPosition, position),
        Step::new(StepKind::LowerBoundary, l),
        Step::new(StepKind::CumulativeFrequencyBefore, cf),
        Step::new(StepKind::ClassFrequency, f),
        Step::new(StepKind::ClassWidth, h),
    ]);

    let median = l + ((position - cf) / f) * h;
    Ok(StatResult::single(median, steps).with_class(index))
}

/// Order-statistic median of individual observations.
///
/// # Examples
///
/// ```
/// use tendency_stats::{individual::IndividualDataset, median};
///
/// let odd = IndividualDataset::new([5.0, 1.0, 3.0]).unwrap();
/// assert_eq!(median::individual(&odd).value.as_single(), Some(3.0));
///
/// let even = IndividualDataset::new([4.0, 1.0, 3.0, 2.0]).unwrap();
/// assert_eq!(median::individual(&even).value.as_single(), Some(2.5));
/// ```
#[must_use]
pub fn individual(data: &IndividualDataset) -> StatResult {
    order_statistic(&data.value_counts())
}

/// Order-statistic median of a table of observations.
///
/// For odd `n` the value at 1-based position `(n+1)/2`; for even `n` the
/// average of the values at positions `n/2` and `n/2 + 1`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn order_statistic(counts: &ValueCounts) -> StatResult {
    let n = counts.total();
    let mut steps = vec![Step::new(StepKind::Count, n as f64)];

    let median = if n % 2 == 1 {
        let pos = n.div_ceil(2);
        let value = counts.value_at(pos);
        steps.push(Step::new(StepKind::OrderPosition, pos as f64));
        steps.push(Step::new(StepKind::OrderValue, value));
        value
    } else {
        let (pos1, pos2) = (n / 2, n / 2 + 1);
        let (v1, v2) = (counts.value_at(pos1), counts.value_at(pos2));
        steps.extend([
            Step::new(StepKind::OrderPosition, pos1 as f64),
            Step::new(StepKind::OrderValue, v1),
            Step::new(StepKind::OrderPosition, pos2 as f64),
            Step::new(StepKind::OrderValue, v2),
        ]);
        (v1 + v2) / 2.0
    };
    StatResult::single(median, steps)
}
