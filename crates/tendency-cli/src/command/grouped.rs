use anyhow::Context as _;
use tendency_stats::{dataset::Dataset, distribution::Distribution, mean::MeanMethod};

use crate::{
    command::common::{self, Measure, OutputArg},
    schema::report::{DataReport, Report},
};

const SAMPLE_INTERVALS: &str = "0-10, 10-20, 20-30, 30-40, 40-50";
const SAMPLE_FREQUENCIES: &str = "5, 8, 12, 7, 3";

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum MeanMethodArg {
    Direct,
    Assumed,
    Step,
    #[default]
    All,
}

impl MeanMethodArg {
    fn methods(self, assumed: Option<f64>) -> Vec<MeanMethod> {
        let assumed_mean = MeanMethod::AssumedMean { assumed };
        let step_deviation = MeanMethod::StepDeviation { assumed };
        match self {
            MeanMethodArg::Direct => vec![MeanMethod::Direct],
            MeanMethodArg::Assumed => vec![assumed_mean],
            MeanMethodArg::Step => vec![step_deviation],
            MeanMethodArg::All => vec![MeanMethod::Direct, assumed_mean, step_deviation],
        }
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct GroupedArg {
    /// Comma-separated class intervals ("lower-upper" or single values)
    #[arg(long, default_value = SAMPLE_INTERVALS, allow_hyphen_values = true)]
    intervals: String,
    /// Comma-separated frequencies, one per interval
    #[arg(long, default_value = SAMPLE_FREQUENCIES)]
    frequencies: String,
    /// Which measure to compute: mean, median, mode, or all
    #[arg(long, default_value = "all")]
    measure: Measure,
    /// Mean method: direct, assumed, step, or all
    #[arg(long, default_value = "all")]
    mean_method: MeanMethodArg,
    /// Assumed mean A (default: midpoint of the middle class)
    #[arg(long, allow_negative_numbers = true)]
    assumed_mean: Option<f64>,
    /// Class width h, overriding auto-detection
    #[arg(long)]
    class_width: Option<f64>,
    /// Expand the classes into observations and analyze those instead
    #[arg(long, default_value_t = false)]
    as_individual: bool,
    #[clap(flatten)]
    output: OutputArg,
}

impl Default for GroupedArg {
    fn default() -> Self {
        Self {
            intervals: SAMPLE_INTERVALS.to_owned(),
            frequencies: SAMPLE_FREQUENCIES.to_owned(),
            measure: Measure::default(),
            mean_method: MeanMethodArg::default(),
            assumed_mean: None,
            class_width: None,
            as_individual: false,
            output: OutputArg::default(),
        }
    }
}

pub(crate) fn run(arg: &GroupedArg) -> anyhow::Result<()> {
    let GroupedArg {
        intervals,
        frequencies,
        measure,
        mean_method,
        assumed_mean,
        class_width,
        as_individual,
        output,
    } = arg;

    let mut dist = Distribution::parse(intervals, frequencies)
        .context("Failed to read the frequency distribution")?;
    if let Some(h) = class_width {
        dist = dist.with_class_width(*h)?;
    }
    tracing::info!(
        classes = dist.classes().len(),
        total_frequency = dist.total_frequency(),
        class_width = dist.class_width(),
        "Loaded frequency distribution"
    );

    let (data, data_report) = if *as_individual {
        let observations = dist
            .to_individual()
            .context("Cannot expand the distribution into observations")?;
        let report = DataReport::individual(&observations);
        (Dataset::from(observations), report)
    } else {
        (
            Dataset::from(dist.clone()),
            DataReport::Grouped { distribution: dist },
        )
    };

    let methods = mean_method.methods(*assumed_mean);
    let report = Report::new(
        data_report,
        common::measure_reports(&data, *measure, &methods),
    )
    .with_summary(common::summary(&data, *measure));
    common::write_report(&report, output)
}
