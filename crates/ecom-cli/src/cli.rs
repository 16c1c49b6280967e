//! CLI argument definitions for the ETL.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ecom_model::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ecom-etl",
    version,
    about = "E-commerce order ETL - split a flat order export into related tables",
    long_about = "Read a flat e-commerce order export (CSV or XLSX), drop rows without\n\
                  order or customer ids, normalize order dates, and write customer,\n\
                  product, orders, payment and shipping tables to a dated directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow customer values (names, e-mail, phone, address) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the ETL over one input file.
    Run(RunArgs),

    /// List the output tables and their columns.
    Tables,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source order export (.csv or .xlsx).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Root directory for the dated output folder.
    #[arg(
        long = "output-root",
        value_name = "DIR",
        default_value = ecom_output::DEFAULT_OUTPUT_ROOT
    )]
    pub output_root: PathBuf,

    /// Date naming the output folder (default: today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Output file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xlsx,
    Parquet,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
            OutputFormatArg::Parquet => OutputFormat::Parquet,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["ecom-etl", "run", "orders.csv"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.input, PathBuf::from("orders.csv"));
        assert_eq!(args.output_root, PathBuf::from("processed-data"));
        assert!(args.date.is_none());
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Csv);
        assert!(!cli.log_data);
    }

    #[test]
    fn run_with_options() {
        let cli = Cli::try_parse_from([
            "ecom-etl",
            "run",
            "orders.xlsx",
            "--output-root",
            "out",
            "--date",
            "2024-02-29",
            "--format",
            "parquet",
            "--json",
            "--log-data",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Parquet);
        assert!(args.json);
        assert!(cli.log_data);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["ecom-etl", "run", "a.csv", "--format", "feather"]).is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["ecom-etl", "run", "a.csv", "--date", "29/02/2024"]).is_err());
    }
}
