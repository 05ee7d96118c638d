use std::path::PathBuf;

use anyhow::Context as _;
use tendency_stats::{
    StatsError,
    dataset::Dataset,
    mean::MeanMethod,
    result::{Diagnostic, StatResult},
    summary::CentralTendency,
};

use crate::{
    schema::report::{MeasureKind, MeasureReport, Report},
    util::Output,
    view::TextView,
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Measure {
    Mean,
    Median,
    Mode,
    #[default]
    All,
}

impl Measure {
    fn includes(self, kind: MeasureKind) -> bool {
        match self {
            Measure::All => true,
            Measure::Mean => kind == MeasureKind::Mean,
            Measure::Median => kind == MeasureKind::Median,
            Measure::Mode => kind == MeasureKind::Mode,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct OutputArg {
    /// Report format: text or json
    #[arg(long, default_value = "text")]
    pub(crate) format: Format,
    /// Decimal places for non-integral numbers in text reports
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub(crate) precision: u8,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

impl Default for OutputArg {
    fn default() -> Self {
        Self {
            format: Format::Text,
            precision: 4,
            output: None,
        }
    }
}

/// Computes the requested measures. A failing computation becomes an error
/// entry and does not stop the others.
pub(crate) fn measure_reports(
    data: &Dataset,
    measure: Measure,
    mean_methods: &[MeanMethod],
) -> Vec<MeasureReport> {
    let mut reports = vec![];

    if measure.includes(MeasureKind::Mean) {
        match data {
            Dataset::Grouped(_) => {
                for &method in mean_methods {
                    reports.push(MeasureReport::new(
                        MeasureKind::Mean,
                        method.name(),
                        data.mean(method),
                    ));
                }
            }
            Dataset::Individual(_) => {
                reports.push(MeasureReport::new(
                    MeasureKind::Mean,
                    "Σx / n",
                    data.mean(MeanMethod::Direct),
                ));
            }
        }
    }

    if measure.includes(MeasureKind::Median) {
        let result = data.median();
        let method = if uses_grouped_formula(data, &result) {
            "grouped interpolation"
        } else {
            "order statistic"
        };
        reports.push(MeasureReport::new(MeasureKind::Median, method, result));
    }

    if measure.includes(MeasureKind::Mode) {
        let result = data.mode();
        let method = if uses_grouped_formula(data, &result) {
            "grouped formula"
        } else {
            "frequency count"
        };
        reports.push(MeasureReport::new(MeasureKind::Mode, method, result));
    }

    reports
}

/// The combined summary, only for `--measure all`.
pub(crate) fn summary(data: &Dataset, measure: Measure) -> Option<CentralTendency> {
    if measure != Measure::All {
        return None;
    }
    CentralTendency::new(data)
        .inspect_err(|err| tracing::debug!("summary skipped: {err}"))
        .ok()
}

fn uses_grouped_formula(data: &Dataset, result: &Result<StatResult, StatsError>) -> bool {
    let fell_back =
        matches!(result, Ok(r) if r.diagnostic == Some(Diagnostic::ZeroWidthFallback));
    matches!(data, Dataset::Grouped(_)) && !fell_back
}

pub(crate) fn write_report(report: &Report, arg: &OutputArg) -> anyhow::Result<()> {
    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        Format::Json => output.write_json(report)?,
        Format::Text => {
            TextView::new(arg.precision)
                .render(&mut output, report)
                .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
            output.finish()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tendency_stats::{
        distribution::Distribution, individual::IndividualDataset, result::Modality,
    };

    use super::*;

    const ALL_MEANS: [MeanMethod; 3] = [
        MeanMethod::Direct,
        MeanMethod::AssumedMean { assumed: None },
        MeanMethod::StepDeviation { assumed: None },
    ];

    fn methods(reports: &[MeasureReport]) -> Vec<(MeasureKind, &'static str)> {
        reports.iter().map(|r| (r.measure, r.method)).collect()
    }

    #[test]
    fn test_grouped_all_measures() {
        let dist = Distribution::parse("0-10, 10-20, 20-30, 30-40, 40-50", "5, 8, 12, 7, 3")
            .unwrap();
        let reports = measure_reports(&dist.into(), Measure::All, &ALL_MEANS);
        assert_eq!(
            methods(&reports),
            [
                (MeasureKind::Mean, "direct"),
                (MeasureKind::Mean, "assumed mean"),
                (MeasureKind::Mean, "step deviation"),
                (MeasureKind::Median, "grouped interpolation"),
                (MeasureKind::Mode, "grouped formula"),
            ]
        );
        assert!(reports.iter().all(|r| r.error.is_none()));
    }

    #[test]
    fn test_zero_width_errors_are_local() {
        let dist = Distribution::parse("1, 2, 3", "1, 1, 2").unwrap();
        let reports = measure_reports(&dist.into(), Measure::All, &ALL_MEANS);

        let step = &reports[2];
        assert_eq!(step.method, "step deviation");
        assert!(step.result.is_none());
        assert!(step.error.as_deref().unwrap().contains("class width"));

        assert_eq!(reports[3].method, "order statistic");
        assert_eq!(reports[3].result.as_ref().unwrap().value.as_single(), Some(2.5));
        assert_eq!(reports[4].method, "frequency count");
        assert_eq!(reports[4].result.as_ref().unwrap().value.values(), [3.0]);
    }

    #[test]
    fn test_individual_single_mean() {
        let data = IndividualDataset::parse("1, 2, 6").unwrap();
        let reports = measure_reports(&data.into(), Measure::Mean, &ALL_MEANS);
        assert_eq!(methods(&reports), [(MeasureKind::Mean, "Σx / n")]);
        assert_eq!(reports[0].result.as_ref().unwrap().value.as_single(), Some(3.0));
    }

    #[test]
    fn test_summary_only_for_all() {
        let data = Dataset::from(IndividualDataset::parse("1, 2, 2").unwrap());
        assert!(summary(&data, Measure::Mean).is_none());
        let overview = summary(&data, Measure::All).unwrap();
        assert_eq!(overview.median.value.as_single(), Some(2.0));

        let empty = Dataset::from(Distribution::parse("0-10", "0").unwrap());
        assert!(summary(&empty, Measure::All).is_none());
    }

    #[test]
    fn test_grouped_tied_classes_report_modality() {
        let dist = Distribution::parse("0-10, 10-20, 20-30, 30-40", "2, 6, 6, 1").unwrap();
        let reports = measure_reports(&dist.into(), Measure::Mode, &ALL_MEANS);
        assert_eq!(methods(&reports), [(MeasureKind::Mode, "grouped formula")]);
        assert_eq!(reports[0].modality, Some(Modality::Bimodal));
    }

    #[test]
    fn test_measure_selection() {
        let data = IndividualDataset::parse("1, 2, 2").unwrap();
        let reports = measure_reports(&data.into(), Measure::Mode, &ALL_MEANS);
        assert_eq!(methods(&reports), [(MeasureKind::Mode, "frequency count")]);
    }
}
