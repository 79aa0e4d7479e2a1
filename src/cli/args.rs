//! Command-line argument definitions for the ARFF parser
//!
//! Defines the CLI interface using the clap derive API and maps the
//! flags onto a [`ProcessingConfig`].

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ProcessingConfig;
use crate::error::Result;

/// CLI arguments for the ARFF parser
///
/// Parses and validates ARFF (Attribute-Relation File Format) datasets,
/// reporting the relation, attribute schema and row count of each file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "arff_parser",
    version,
    about = "Parse and validate ARFF dataset files",
    long_about = "Parses ARFF (Attribute-Relation File Format) files into a typed schema and \
                  validated data rows. Each file is checked line by line; the first error in a \
                  file is reported with its line number. Directories are scanned for .arff files \
                  and parsed concurrently."
)]
pub struct Args {
    /// ARFF files or directories to parse
    #[arg(value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Descend into sub-directories when a directory is given
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Number of files parsed concurrently (defaults to the CPU count)
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// File extensions picked up from directories (comma-separated, no dot)
    #[arg(
        short = 'e',
        long = "extensions",
        value_name = "LIST",
        value_delimiter = ','
    )]
    pub extensions: Vec<String>,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Stop at the first file that fails to parse
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured human-readable summary
    Summary,
    /// A single JSON document with every record or error
    Json,
}

impl Args {
    /// Log level derived from `-v` / `-q`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }

    /// Build the processing configuration from defaults and CLI overrides
    pub fn to_config(&self) -> Result<ProcessingConfig> {
        let mut config = ProcessingConfig::default()
            .with_recursive(self.recursive)
            .with_fail_fast(self.fail_fast)
            .with_progress(self.show_progress());

        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions.iter().cloned());
        }

        config.validate()?;
        Ok(config)
    }
}
