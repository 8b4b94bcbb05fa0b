//! CLI argument definitions for the encounter dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use enc_cli::selection::{Selection, parse_cli_date};
use enc_metrics::DEFAULT_TOP_N;
use enc_model::{CareClass, PayerClass};

#[derive(Parser)]
#[command(
    name = "encounter-dashboard",
    version,
    about = "Encounter dashboard - KPIs, rankings and series from hospital encounter exports",
    long_about = "Summarize a semicolon-delimited hospital encounter export.\n\n\
                  Prints encounter totals, daily and monthly averages, the SUS / non-SUS\n\
                  split, urgency share, top specialties and the encounter series."
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

    /// Log output format.
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the dashboard for one filter selection.
    Report(ReportArgs),

    /// List the values available to each filter.
    Options(OptionsArgs),
}

#[derive(Args)]
pub struct ReportArgs {
    /// Encounter export (`;`-delimited, UTF-8 or Latin-1).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// First day of the period, DD/MM/YYYY (default: first date in the file).
    #[arg(long = "from", value_name = "DATE", value_parser = parse_cli_date)]
    pub from: Option<NaiveDate>,

    /// Last day of the period, DD/MM/YYYY (default: last date in the file).
    #[arg(long = "to", value_name = "DATE", value_parser = parse_cli_date)]
    pub to: Option<NaiveDate>,

    /// Payer class to include; repeat for several (default: all observed).
    #[arg(long = "payer", value_name = "CLASS")]
    pub payers: Vec<PayerClass>,

    /// Deselect every payer class (empty report).
    #[arg(long = "no-payer", conflicts_with = "payers")]
    pub no_payer: bool,

    /// Care class code (A, U or I); repeat for several (default: all).
    #[arg(long = "care", value_name = "CODE")]
    pub care: Vec<CareClass>,

    /// Deselect every care class (empty report).
    #[arg(long = "no-care", conflicts_with = "care")]
    pub no_care: bool,

    /// Specialty, as written in the export; repeat for several.
    #[arg(long = "specialty", value_name = "NAME")]
    pub specialties: Vec<String>,

    /// Encounter type, as written in the export; repeat for several.
    #[arg(long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Number of specialties in the ranking.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl ReportArgs {
    pub fn selection(&self) -> Selection {
        Selection {
            from: self.from,
            to: self.to,
            payers: self.payers.clone(),
            no_payers: self.no_payer,
            care: self.care.clone(),
            no_care: self.no_care,
            specialties: self.specialties.clone(),
            types: self.types.clone(),
        }
    }
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Encounter export (`;`-delimited, UTF-8 or Latin-1).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// How results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
