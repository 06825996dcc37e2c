//! Command-line argument definitions for the bulk validator
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{Config, default_reference_dir};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the waste movement bulk validator
///
/// Validates spreadsheet-style bulk waste movement uploads against the
/// movement rules and reference data, reporting every field problem per row.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waste-bulk-validator",
    version,
    about = "Validate bulk waste movement uploads row by row",
    long_about = "Validates flattened waste movement rows taken from a bulk upload spreadsheet. \
                  Every row is normalized and checked section by section against the movement \
                  rules and the reference tables. A batch is accepted only when every non-blank \
                  row is valid; otherwise every failing row is reported with its spreadsheet index."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a batch of flattened rows from a JSON or CSV file
    Validate(ValidateArgs),
    /// Load the reference tables and report what they contain
    Reference(ReferenceArgs),
}

/// Input file layouts accepted by the validate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Pick the layout from the file extension
    Auto,
    /// A JSON batch request with accountId, padIndex and values
    Json,
    /// A CSV file whose header row holds the flattened field names
    Csv,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON response envelope for scripting
    Json,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Batch file to validate
    ///
    /// Either a JSON batch request or a CSV export of the upload spreadsheet.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Batch file to validate (JSON request or CSV)"
    )]
    pub input: PathBuf,

    /// Layout of the input file
    #[arg(
        long = "input-format",
        value_enum,
        default_value = "auto",
        help = "Layout of the input file"
    )]
    pub input_format: InputFormat,

    /// Directory holding the reference data JSON files
    ///
    /// If not specified, uses the platform data directory.
    #[arg(
        short = 'r',
        long = "reference-dir",
        value_name = "PATH",
        help = "Directory holding the reference data JSON files"
    )]
    pub reference_dir: Option<PathBuf>,

    /// Account the batch is submitted for
    ///
    /// Required for CSV input. For JSON input it replaces the request's accountId.
    #[arg(
        short = 'a',
        long = "account-id",
        value_name = "ID",
        help = "Account the batch is submitted for"
    )]
    pub account_id: Option<String>,

    /// Spreadsheet rows before the first data row
    ///
    /// For CSV input this defaults to 1, the header row. For JSON input it
    /// replaces the request's padIndex.
    #[arg(
        long = "pad-index",
        value_name = "ROWS",
        help = "Spreadsheet rows before the first data row"
    )]
    pub pad_index: Option<usize>,

    /// Number of row chunks validated concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of row chunks validated concurrently"
    )]
    pub workers: Option<usize>,

    /// Rows handed to each concurrent task
    #[arg(
        long = "chunk-size",
        value_name = "ROWS",
        help = "Rows handed to each concurrent task"
    )]
    pub chunk_size: Option<usize>,

    /// Output format for the validation result
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation result"
    )]
    pub output_format: OutputFormat,

    /// Write the JSON response envelope to this file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the JSON response envelope to a file"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the reference command
#[derive(Debug, Clone, Parser)]
pub struct ReferenceArgs {
    /// Directory holding the reference data JSON files
    #[arg(
        short = 'r',
        long = "reference-dir",
        value_name = "PATH",
        help = "Directory holding the reference data JSON files"
    )]
    pub reference_dir: Option<PathBuf>,

    /// Output format for the table summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the table summary"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Validate the command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if self.resolved_input_format() == InputFormat::Csv && self.account_id.is_none() {
            return Err(Error::configuration(
                "CSV input needs --account-id".to_string(),
            ));
        }

        if let Some(output_file) = &self.output_file
            && let Some(parent) = output_file.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(Error::configuration(format!(
                "Output file directory does not exist: {}",
                parent.display()
            )));
        }

        Ok(())
    }

    /// Input layout, resolving `auto` from the file extension
    pub fn resolved_input_format(&self) -> InputFormat {
        match self.input_format {
            InputFormat::Auto => {
                let is_csv = self
                    .input
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Json
                }
            }
            format => format,
        }
    }

    /// Build the validation configuration from defaults and overrides
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(chunk_size) = self.chunk_size {
            config = config.with_chunk_size(chunk_size);
        }
        if let Some(reference_dir) = &self.reference_dir {
            config = config.with_reference_dir(reference_dir);
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ReferenceArgs {
    pub fn reference_dir(&self) -> PathBuf {
        self.reference_dir
            .clone()
            .unwrap_or_else(default_reference_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
