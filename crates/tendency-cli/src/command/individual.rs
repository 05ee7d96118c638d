use anyhow::Context as _;
use tendency_stats::{dataset::Dataset, individual::IndividualDataset};

use crate::{
    command::common::{self, Measure, OutputArg},
    schema::report::{DataReport, Report},
};

const SAMPLE_VALUES: &str = "12, 15, 18, 22, 25, 25, 28, 30, 32, 35, 35, 35, 40, 42, 45";

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct IndividualArg {
    /// Comma-separated observations
    #[arg(long, default_value = SAMPLE_VALUES, allow_hyphen_values = true)]
    pub(crate) values: String,
    /// Which measure to compute: mean, median, mode, or all
    #[arg(long, default_value = "all")]
    pub(crate) measure: Measure,
    #[clap(flatten)]
    pub(crate) output: OutputArg,
}

impl Default for IndividualArg {
    fn default() -> Self {
        Self {
            values: SAMPLE_VALUES.to_owned(),
            measure: Measure::default(),
            output: OutputArg::default(),
        }
    }
}

pub(crate) fn run(arg: &IndividualArg) -> anyhow::Result<()> {
    let IndividualArg {
        values,
        measure,
        output,
    } = arg;

    let data = IndividualDataset::parse(values).context("Failed to read the observations")?;
    tracing::info!(count = data.len(), "Loaded observations");

    let report_data = DataReport::individual(&data);
    let data = Dataset::from(data);
    let report = Report::new(report_data, common::measure_reports(&data, *measure, &[]))
        .with_summary(common::summary(&data, *measure));
    common::write_report(&report, output)
}
