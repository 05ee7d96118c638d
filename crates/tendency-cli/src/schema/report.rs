use chrono::{DateTime, Utc};
use serde::Serialize;
use tendency_stats::{
    StatsError,
    descriptive::DescriptiveStats,
    distribution::Distribution,
    individual::IndividualDataset,
    result::{Modality, StatResult},
    summary::CentralTendency,
};

/// Full analysis of one input, as written by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,
    /// The parsed input data
    pub data: DataReport,
    /// One entry per computed measure, in display order
    pub measures: Vec<MeasureReport>,
    /// Closing overview, present when all measures were computed successfully
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CentralTendency>,
}

impl Report {
    pub fn new(data: DataReport, measures: Vec<MeasureReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            data,
            measures,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: Option<CentralTendency>) -> Self {
        self.summary = summary;
        self
    }
}

/// The parsed input data
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataReport {
    Grouped {
        distribution: Distribution,
    },
    Individual {
        observations: IndividualDataset,
        stats: DescriptiveStats,
    },
}

impl DataReport {
    pub fn individual(data: &IndividualDataset) -> Self {
        DataReport::Individual {
            observations: data.clone(),
            stats: DescriptiveStats::of(data),
        }
    }

    pub fn distribution(&self) -> Option<&Distribution> {
        match self {
            DataReport::Grouped { distribution } => Some(distribution),
            DataReport::Individual { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum MeasureKind {
    #[display("Mean")]
    Mean,
    #[display("Median")]
    Median,
    #[display("Mode")]
    Mode,
}

/// Outcome of one measure computation.
///
/// Errors are local to the computation: a failed step-deviation mean does not
/// prevent the other methods from being reported.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureReport {
    pub measure: MeasureKind,
    /// Method or algorithm name (e.g. "assumed mean", "grouped formula")
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<StatResult>,
    /// Modality label, for modes: the number of modal classes for the
    /// grouped formula, of modal values otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MeasureReport {
    pub fn new(
        measure: MeasureKind,
        method: &'static str,
        outcome: Result<StatResult, StatsError>,
    ) -> Self {
        match outcome {
            Ok(result) => {
                let modality = (measure == MeasureKind::Mode)
                    .then(|| result.modality.unwrap_or_else(|| Modality::of(&result.value)));
                Self {
                    measure,
                    method,
                    result: Some(result),
                    modality,
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(%measure, method, "{err}");
                Self {
                    measure,
                    method,
                    result: None,
                    modality: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
