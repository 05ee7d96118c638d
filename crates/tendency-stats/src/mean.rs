//! Arithmetic mean by the direct, assumed-mean, and step-deviation methods.
//!
//! The three grouped methods are algebraically identical; they differ only in
//! the intermediate quantities a student writes down along the way.

use crate::{
    distribution::Distribution,
    error::{Computation, StatsError},
    individual::IndividualDataset,
    result::{StatResult, Step, StepKind},
};

/// Method for the mean of grouped data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanMethod {
    /// `x̄ = Σfx / N`
    Direct,
    /// `x̄ = A + Σfd / N` with `d = x - A`
    AssumedMean { assumed: Option<f64> },
    /// `x̄ = A + (Σfd / N) × h` with `d = (x - A) / h`
    StepDeviation { assumed: Option<f64> },
}

impl MeanMethod {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MeanMethod::Direct => "direct",
            MeanMethod::AssumedMean { .. } => "assumed mean",
            MeanMethod::StepDeviation { .. } => "step deviation",
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn total_frequency(dist: &Distribution) -> Result<f64, StatsError> {
    match dist.total_frequency() {
        0 => Err(StatsError::ZeroTotalFrequency),
        n => Ok(n as f64),
    }
}

/// Computes the mean of grouped data with the given method.
pub fn grouped(dist: &Distribution, method: MeanMethod) -> Result<StatResult, StatsError> {
    match method {
        MeanMethod::Direct => direct(dist),
        MeanMethod::AssumedMean { assumed } => assumed_mean(dist, assumed),
        MeanMethod::StepDeviation { assumed } => step_deviation(dist, assumed),
    }
}

/// Direct method: `Σfx / N`.
///
/// # Examples
///
/// ```
/// use tendency_stats::{distribution::Distribution, mean};
///
/// let dist = Distribution::build(&["0-10", "10-20"], &[1, 3]).unwrap();
/// let result = mean::direct(&dist).unwrap();
/// assert_eq!(result.value.as_single(), Some(12.5));
/// ```
pub fn direct(dist: &Distribution) -> Result<StatResult, StatsError> {
    let n = total_frequency(dist)?;
    let mut steps = dist
        .classes()
        .iter()
        .enumerate()
        .map(|(i, c)| Step::for_class(StepKind::Product, i, c.product()))
        .collect::<Vec<_>>();
    steps.push(Step::new(StepKind::WeightedSum, dist.weighted_sum()));
    steps.push(Step::new(StepKind::TotalFrequency, n));
    Ok(StatResult::single(dist.weighted_sum() / n, steps))
}

/// Assumed-mean method. `A` defaults to the midpoint of the middle class.
///
/// # Examples
///
/// ```
/// use tendency_stats::{distribution::Distribution, mean, result::StepKind};
///
/// let dist = Distribution::build(&["0-10", "10-20", "20-30"], &[2, 5, 3]).unwrap();
/// let result = mean::assumed_mean(&dist, None).unwrap();
/// assert_eq!(result.step(StepKind::AssumedMean), Some(15.0));
/// assert_eq!(result.class_steps(StepKind::Deviation), [-10.0, 0.0, 10.0]);
/// assert_eq!(result.value.as_single(), Some(16.0));
/// ```
pub fn assumed_mean(dist: &Distribution, assumed: Option<f64>) -> Result<StatResult, StatsError> {
    let n = total_frequency(dist)?;
    let a = assumed.unwrap_or_else(|| dist.middle_midpoint());
    let (mut steps, sum_fd) = deviation_steps(dist, a, |x| x - a);
    let correction = sum_fd / n;
    steps.push(Step::new(StepKind::SumWeightedDeviation, sum_fd));
    steps.push(Step::new(StepKind::TotalFrequency, n));
    steps.push(Step::new(StepKind::Correction, correction));
    Ok(StatResult::single(a + correction, steps))
}

/// Step-deviation method. `A` defaults to the midpoint of the middle class.
///
/// # Errors
///
/// [`StatsError::ZeroWidth`] when the class width is zero.
pub fn step_deviation(
    dist: &Distribution,
    assumed: Option<f64>,
) -> Result<StatResult, StatsError> {
    let h = dist.class_width();
    if h == 0.0 {
        return Err(StatsError::ZeroWidth {
            computation: Computation::StepDeviationMean,
        });
    }
    let n = total_frequency(dist)?;
    let a = assumed.unwrap_or_else(|| dist.middle_midpoint());
    let (mut steps, sum_fd) = deviation_steps(dist, a, |x| (x - a) / h);
    steps.insert(1, Step::new(StepKind::ClassWidth, h));
    let correction = (sum_fd / n) * h;
    steps.push(Step::new(StepKind::SumWeightedDeviation, sum_fd));
    steps.push(Step::new(StepKind::TotalFrequency, n));
    steps.push(Step::new(StepKind::Correction, correction));
    Ok(StatResult::single(a + correction, steps))
}

/// Emits `A`, then `d`, `fd` and the running `Σfd` for every class.
#[expect(clippy::cast_precision_loss)]
fn deviation_steps<F>(dist: &Distribution, a: f64, deviation: F) -> (Vec<Step>, f64)
where
    F: Fn(f64) -> f64,
{
    let mut steps = vec![Step::new(StepKind::AssumedMean, a)];
    let mut sum_fd = 0.0;
    for (i, class) in dist.classes().iter().enumerate() {
        let d = deviation(class.midpoint);
        let fd = class.frequency as f64 * d;
        sum_fd += fd;
        steps.push(Step::for_class(StepKind::Deviation, i, d));
        steps.push(Step::for_class(StepKind::WeightedDeviation, i, fd));
        steps.push(Step::for_class(StepKind::RunningSum, i, sum_fd));
    }
    (steps, sum_fd)
}

/// Mean of individual observations: `Σx / n`.
///
/// # Examples
///
/// ```
/// use tendency_stats::{individual::IndividualDataset, mean};
///
/// let data = IndividualDataset::new([2.0, 4.0, 9.0]).unwrap();
/// assert_eq!(mean::individual(&data).value.as_single(), Some(5.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn individual(data: &IndividualDataset) -> StatResult {
    let sum = data.sum();
    let n = data.len() as f64;
    let steps = vec![Step::new(StepKind::Sum, sum), Step::new(StepKind::Count, n)];
    StatResult::single(sum / n, steps)
}
