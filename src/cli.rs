//! Command line surface: `stats mean|median|mode [-v] [--format] <numbers>...`.

use std::io::{self, Write};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::{error, info};

use crate::engine::{compute_mean, compute_median, compute_mode};
use crate::error::{ExitStatus, Result, StatsError};
use crate::input::NumberList;
use crate::report::{Report, Statistic};

/// Mean, median and mode of a set of numbers.
#[derive(Parser, Debug)]
#[command(name = "stats")]
#[command(version)]
#[command(about = "Calculate the mean, median or mode of a set of numbers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// The average of a set of numbers
    #[command(long_about = "The mean is the average of a set of numbers. It is calculated by \
adding all the numbers together and dividing by the number of numbers.

For example, the mean of 1, 2, 3, 4, 5 is (1 + 2 + 3 + 4 + 5) / 5 = 3.

To use this command, provide a set of numbers as arguments. For example:
$ stats mean 1 2 3 4 5")]
    Mean(StatArgs),

    /// The median or middle number of a sorted set of input
    #[command(long_about = "The median is the middle number in a set of numbers. It is \
calculated by sorting the numbers and finding the middle number. If there is an even number of \
numbers, the median is the average of the two middle numbers.

For example, the median of 1, 2, 3, 4, 5 is 3. The median of 1, 2, 3, 4 is (2 + 3) / 2 = 2.5.

To use this command, provide a set of numbers as arguments. For example:
$ stats median 1 2 3 4 5")]
    Median(StatArgs),

    /// The mode is the most common number in the set
    #[command(long_about = "The mode is the most common number in the set of numbers. If \
there are no repeat numbers, the result is \"no mode\". When two or more numbers share the \
highest count the result is bimodal or multimodal.

For example, the mode of 1, 2, 3, 2, 5, 6, 2, 8 is 2.
The mode of 1, 2, 3, 4, 5 is no mode.

To use this command, provide a set of numbers as arguments. For example:
$ stats mode 1 2 3 4 5 3")]
    Mode(StatArgs),
}

/// Arguments shared by every statistic.
#[derive(Args, Debug, Clone)]
pub struct StatArgs {
    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "STATS_FORMAT")]
    pub format: OutputFormat,

    /// Numbers to calculate over
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// A single JSON object
    Json,
}

impl Commands {
    pub fn statistic(&self) -> Statistic {
        match self {
            Commands::Mean(_) => Statistic::Mean,
            Commands::Median(_) => Statistic::Median,
            Commands::Mode(_) => Statistic::Mode,
        }
    }

    pub fn args(&self) -> &StatArgs {
        match self {
            Commands::Mean(args) | Commands::Median(args) | Commands::Mode(args) => args,
        }
    }
}

/// Validate input and compute the requested statistic.
pub fn compute(statistic: Statistic, args: &StatArgs) -> Result<Report> {
    let numbers = NumberList::parse(&args.numbers)?;
    info!("calculating {} over {} numbers", statistic, numbers.values().len());

    let report = match statistic {
        Statistic::Mean => {
            Report::from_value(statistic, compute_mean(numbers.values(), args.verbose))
        }
        Statistic::Median => {
            Report::from_value(statistic, compute_median(numbers.values(), args.verbose))
        }
        Statistic::Mode => Report::from_mode(compute_mode(numbers.keys(), args.verbose)),
    };
    Ok(report)
}

/// Run a parsed command line, writing the rendered report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let args = cli.command.args();
    let report = compute(cli.command.statistic(), args)?;

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", report.to_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

/// Write the subcommand's long help to `err`.
pub fn write_help<W: Write>(statistic: Statistic, err: &mut W) -> io::Result<()> {
    let mut command = Cli::command();
    command.build();
    match command.find_subcommand_mut(statistic.to_string()) {
        Some(subcommand) => subcommand.write_long_help(err),
        None => command.write_long_help(err),
    }
}

/// Print a failure to `err`. Empty input is preceded by the subcommand help.
pub fn report_failure<W: Write>(
    statistic: Statistic,
    failure: &StatsError,
    err: &mut W,
) -> io::Result<()> {
    if let StatsError::EmptyInput = failure {
        write_help(statistic, err)?;
    }
    writeln!(err, "{}", failure)
}

/// Run a parsed command line and turn the outcome into an exit status.
/// Reports go to `out`, failures to `err`.
pub fn execute<O, E>(cli: &Cli, out: &mut O, err: &mut E) -> ExitStatus
where
    O: Write,
    E: Write,
{
    match run(cli, out) {
        Ok(()) => ExitStatus::Success,
        Err(failure) => {
            error!("{:?}", failure);
            if let Err(io_err) = report_failure(cli.command.statistic(), &failure, err) {
                error!("unable to write to stderr: {}", io_err);
            }
            ExitStatus::from(&failure)
        }
    }
}
