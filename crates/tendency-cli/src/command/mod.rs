use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use self::{grouped::GroupedArg, individual::IndividualArg};

mod common;
mod grouped;
mod individual;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// What kind of data to analyze
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze a grouped frequency distribution
    Grouped(#[clap(flatten)] GroupedArg),
    /// Analyze individual observations
    Individual(#[clap(flatten)] IndividualArg),
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose, args.quiet);
    match args.mode.unwrap_or(Mode::Grouped(GroupedArg::default())) {
        Mode::Grouped(arg) => grouped::run(&arg)?,
        Mode::Individual(arg) => individual::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;
    use crate::command::common::{Format, Measure};

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let args = CommandArgs::try_parse_from(["tendency"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_grouped_defaults_match_clap_defaults() {
        let args = CommandArgs::try_parse_from(["tendency", "grouped"]).unwrap();
        let Some(Mode::Grouped(parsed)) = args.mode else {
            panic!("expected grouped mode");
        };
        assert_eq!(parsed, GroupedArg::default());
    }

    #[test]
    fn test_individual_args() {
        let args = CommandArgs::try_parse_from([
            "tendency",
            "individual",
            "--values",
            "1, 2, 3",
            "--measure",
            "median",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let Some(Mode::Individual(arg)) = args.mode else {
            panic!("expected individual mode");
        };
        assert_eq!(arg.values, "1, 2, 3");
        assert_eq!(arg.measure, Measure::Median);
        assert_eq!(arg.output.format, Format::Json);
        assert_eq!(arg.output.precision, 4);
    }

    #[test]
    fn test_precision_range() {
        for bad in ["0", "5"] {
            assert!(
                CommandArgs::try_parse_from(["tendency", "grouped", "--precision", bad]).is_err()
            );
        }
        assert!(CommandArgs::try_parse_from(["tendency", "grouped", "--precision", "1"]).is_ok());
    }
}
