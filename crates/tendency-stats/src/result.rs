//! Computation results and their derivation steps.

use std::fmt;

use serde::Serialize;

/// The final value of a computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A single number.
    Single(f64),
    /// Every value sharing the maximum occurrence count, ascending.
    Multiple(Vec<f64>),
}

impl StatValue {
    /// Returns the value if it is a single number, or the only element of a
    /// one-element set.
    #[must_use]
    pub fn as_single(&self) -> Option<f64> {
        match self {
            StatValue::Single(v) => Some(*v),
            StatValue::Multiple(vs) if vs.len() == 1 => Some(vs[0]),
            StatValue::Multiple(_) => None,
        }
    }

    /// Returns every value, one for [`StatValue::Single`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            StatValue::Single(v) => std::slice::from_ref(v),
            StatValue::Multiple(vs) => vs,
        }
    }
}

/// What an intermediate quantity represents.
///
/// The display form is the conventional textbook symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Number of observations or classes, `N` / `n`.
    #[display("N")]
    Count,
    /// `Σfᵢ`.
    #[display("Σf")]
    TotalFrequency,
    /// `fᵢ × xᵢ` for one class.
    #[display("fx")]
    Product,
    /// `Σfᵢxᵢ`.
    #[display("Σfx")]
    WeightedSum,
    /// Assumed mean `A`.
    #[display("A")]
    AssumedMean,
    /// Class width `h`.
    #[display("h")]
    ClassWidth,
    /// Deviation `dᵢ` of a class midpoint from `A` (scaled by `h` for step deviation).
    #[display("d")]
    Deviation,
    /// `fᵢ × dᵢ` for one class.
    #[display("fd")]
    WeightedDeviation,
    /// Running total of `fᵢdᵢ` up to and including a class.
    #[display("Σfd (running)")]
    RunningSum,
    /// `Σfᵢdᵢ`.
    #[display("Σfd")]
    SumWeightedDeviation,
    /// The amount added to `A`: `Σfd/N`, times `h` for step deviation.
    #[display("correction")]
    Correction,
    /// Cumulative frequency of a class.
    #[display("CF")]
    CumulativeFrequency,
    /// `N/2`.
    #[display("N/2")]
    MedianPosition,
    /// Lower boundary `L` of the selected class.
    #[display("L")]
    LowerBoundary,
    /// Frequency `f` of the median class.
    #[display("f")]
    ClassFrequency,
    /// Cumulative frequency before the median class.
    #[display("CF (before)")]
    CumulativeFrequencyBefore,
    /// Frequency `f₁` of the modal class.
    #[display("f₁")]
    ModalFrequency,
    /// Frequency `f₀` of the class preceding the modal class.
    #[display("f₀")]
    PrecedingFrequency,
    /// Frequency `f₂` of the class following the modal class.
    #[display("f₂")]
    FollowingFrequency,
    /// Lowest class frequency.
    #[display("lowest f")]
    LowestFrequency,
    #[display("numerator")]
    Numerator,
    #[display("denominator")]
    Denominator,
    /// Midpoint of the selected class.
    #[display("x")]
    Midpoint,
    /// 1-based position of an order statistic.
    #[display("position")]
    OrderPosition,
    /// The value at an order-statistic position.
    #[display("x₍ᵢ₎")]
    OrderValue,
    /// Sum of observations, `Σxᵢ`.
    #[display("Σx")]
    Sum,
    /// A distinct observed value.
    #[display("value")]
    DistinctValue,
    /// Number of occurrences of the preceding distinct value.
    #[display("occurrences")]
    Occurrences,
    /// Maximum occurrence count among distinct values.
    #[display("max occurrences")]
    MaxOccurrences,
}

/// One labeled intermediate quantity of a derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    /// Zero-based class index, for per-class quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<usize>,
    pub value: f64,
}

impl Step {
    #[must_use]
    pub fn new(kind: StepKind, value: f64) -> Self {
        Self {
            kind,
            class: None,
            value,
        }
    }

    #[must_use]
    pub fn for_class(kind: StepKind, class: usize, value: f64) -> Self {
        Self {
            kind,
            class: Some(class),
            value,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            Some(class) => write!(f, "{}[{class}] = ", self.kind)?,
            None => write!(f, "{} = ", self.kind)?,
        }
        fmt::Display::fmt(&self.value, f)
    }
}

/// A note about how a result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The class width is zero, so the grouped formula was replaced by the
    /// individual-data algorithm on the expanded observations.
    #[display("class width (h) is zero; used the individual-data algorithm instead")]
    ZeroWidthFallback,
    /// The mode formula denominator `2f₁ - f₀ - f₂` is zero; the modal class
    /// midpoint is reported as an approximation.
    #[display("mode formula denominator (2f₁ - f₀ - f₂) is zero; approximated the mode by the modal class midpoint {midpoint}")]
    UndefinedModeFormula { midpoint: f64 },
}

/// Result of a mean, median, or mode computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResult {
    pub value: StatValue,
    /// Intermediate quantities, in derivation order.
    pub steps: Vec<Step>,
    /// Index of the median or modal class selected by a grouped algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<usize>,
    /// Every class sharing the highest frequency, for the grouped mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modal_classes: Vec<usize>,
    /// Number of modes, for mode results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl StatResult {
    #[must_use]
    pub fn single(value: f64, steps: Vec<Step>) -> Self {
        Self {
            value: StatValue::Single(value),
            steps,
            class: None,
            modal_classes: vec![],
            modality: None,
            diagnostic: None,
        }
    }

    #[must_use]
    pub fn multiple(values: Vec<f64>, steps: Vec<Step>) -> Self {
        Self {
            value: StatValue::Multiple(values),
            steps,
            class: None,
            modal_classes: vec![],
            modality: None,
            diagnostic: None,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: usize) -> Self {
        self.class = Some(class);
        self
    }

    /// Records the tied modal classes and derives the modality from their count.
    #[must_use]
    pub fn with_modal_classes(mut self, modal_classes: Vec<usize>) -> Self {
        self.modality = Some(Modality::from_count(modal_classes.len()));
        self.modal_classes = modal_classes;
        self
    }

    #[must_use]
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = Some(modality);
        self
    }

    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }

    /// Returns the first step of the given kind, ignoring per-class steps.
    #[must_use]
    pub fn step(&self, kind: StepKind) -> Option<f64> {
        self.steps
            .iter()
            .find(|s| s.kind == kind && s.class.is_none())
            .map(|s| s.value)
    }

    /// Returns the per-class values of the given kind, in class order.
    #[must_use]
    pub fn class_steps(&self, kind: StepKind) -> Vec<f64> {
        self.steps
            .iter()
            .filter(|s| s.kind == kind && s.class.is_some())
            .map(|s| s.value)
            .collect()
    }
}

/// Derived label for the number of modal values or modal classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    #[display("no mode")]
    None,
    #[display("unimodal")]
    Unimodal,
    #[display("bimodal")]
    Bimodal,
    #[display("trimodal")]
    Trimodal,
    #[display("multimodal")]
    Multimodal,
}

impl Modality {
    #[must_use]
    pub fn from_count(num_modes: usize) -> Self {
        match num_modes {
            0 => Modality::None,
            1 => Modality::Unimodal,
            2 => Modality::Bimodal,
            3 => Modality::Trimodal,
            _ => Modality::Multimodal,
        }
    }

    #[must_use]
    pub fn of(value: &StatValue) -> Self {
        Self::from_count(value.values().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_lookup_separates_class_steps() {
        let result = StatResult::single(
            3.0,
            vec![
                Step::for_class(StepKind::CumulativeFrequency, 0, 2.0),
                Step::for_class(StepKind::CumulativeFrequency, 1, 5.0),
                Step::new(StepKind::MedianPosition, 2.5),
            ],
        );
        assert_eq!(result.step(StepKind::MedianPosition), Some(2.5));
        assert_eq!(result.step(StepKind::CumulativeFrequency), None);
        assert_eq!(
            result.class_steps(StepKind::CumulativeFrequency),
            [2.0, 5.0]
        );
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::new(StepKind::AssumedMean, 25.0).to_string(), "A = 25");
        assert_eq!(
            Step::for_class(StepKind::Deviation, 2, -1.5).to_string(),
            "d[2] = -1.5"
        );
    }

    #[test]
    fn test_modality_labels() {
        assert_eq!(Modality::of(&StatValue::Single(1.0)), Modality::Unimodal);
        assert_eq!(
            Modality::of(&StatValue::Multiple(vec![1.0, 2.0])),
            Modality::Bimodal
        );
        assert_eq!(Modality::from_count(3), Modality::Trimodal);
        assert_eq!(Modality::from_count(7).to_string(), "multimodal");
        assert_eq!(Modality::from_count(0), Modality::None);
    }

    #[test]
    fn test_serialized_shape() {
        let result = StatResult::single(20.0, vec![Step::new(StepKind::LowerBoundary, 20.0)])
            .with_class(2)
            .with_diagnostic(Diagnostic::UndefinedModeFormula { midpoint: 25.0 });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 20.0,
                "steps": [{ "kind": "lower_boundary", "value": 20.0 }],
                "class": 2,
                "diagnostic": { "kind": "undefined_mode_formula", "midpoint": 25.0 },
            })
        );

        let modes = StatResult::multiple(vec![1.0, 2.0], vec![]);
        let json = serde_json::to_value(&modes).unwrap();
        assert_eq!(json["value"], serde_json::json!([1.0, 2.0]));
        assert!(json.get("diagnostic").is_none());
    }
}
