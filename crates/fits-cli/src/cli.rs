//! CLI argument definitions for the FITS table writer.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fits-table-writer",
    version,
    about = "Write numeric columns to a FITS binary table",
    long_about = "Write equal-length 32-bit integer and float columns to a FITS file.\n\n\
                  The file holds an empty primary HDU followed by one BINTABLE extension."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the built-in five-row demo table.
    Demo(DemoArgs),

    /// Convert a headed CSV file of numeric columns.
    Convert(ConvertArgs),
}

/// Options shared by every command that writes a file.
#[derive(Args)]
pub struct WriteArgs {
    /// UTC timestamp for the header (YYYY-MM-DDTHH:MM:SS); defaults to now.
    #[arg(long = "timestamp", value_name = "DATETIME", value_parser = parse_timestamp)]
    pub timestamp: Option<NaiveDateTime>,

    /// Data buffer size in bytes.
    #[arg(long = "buffer-size", value_name = "BYTES")]
    pub buffer_size: Option<usize>,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Output FITS file.
    #[arg(value_name = "OUTPUT", default_value = "example.fits")]
    pub output: PathBuf,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output FITS file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Add a COMMENT card (repeatable, at most 68 characters each).
    #[arg(long = "comment", value_name = "TEXT")]
    pub comments: Vec<String>,

    /// Store this column as float even if every value is an integer (repeatable).
    #[arg(long = "float", value_name = "COLUMN")]
    pub float_columns: Vec<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
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
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "fits-table-writer",
            "convert",
            "in.csv",
            "out.fits",
            "--comment",
            "first",
            "--float",
            "id",
            "--timestamp",
            "2024-03-15T14:30:45",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.comments, vec!["first"]);
        assert_eq!(args.float_columns, vec!["id"]);
        assert!(args.write.timestamp.is_some());
    }

    #[test]
    fn test_demo_default_output() {
        let cli = Cli::try_parse_from(["fits-table-writer", "demo"]).unwrap();
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.output, PathBuf::from("example.fits"));
    }

    #[test]
    fn test_bad_timestamp() {
        assert!(
            Cli::try_parse_from(["fits-table-writer", "demo", "--timestamp", "yesterday"]).is_err()
        );
    }
}
