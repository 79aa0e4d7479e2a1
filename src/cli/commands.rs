//! Command implementations for the ARFF parser CLI
//!
//! Sets up logging, runs the batch processor and reports results as a
//! coloured summary or a JSON document.

use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::{Args, OutputFormat};
use crate::constants::{LOG_TARGET, markers};
use crate::models::Record;
use crate::processor::{BatchProcessor, BatchReport, BatchStats};
use crate::stats::ParseStats;

/// Main command runner
///
/// Returns `Ok(true)` when every file parsed successfully.
pub async fn run(args: Args) -> anyhow::Result<bool> {
    setup_logging(&args);

    info!("Starting ARFF parser");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config().context("Invalid command line options")?;
    let processor = BatchProcessor::new(config)?;

    let report = processor
        .run(&args.inputs)
        .await
        .context("Batch parsing failed")?;

    match args.format {
        OutputFormat::Summary => print_summary(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(report.is_successful())
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // try_init: a subscriber may already be installed (e.g. in tests)
    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

fn print_summary(report: &BatchReport) {
    for outcome in &report.outcomes {
        println!();
        match &outcome.result {
            Ok(parsed) => {
                println!(
                    "{} {}",
                    "✓".bright_green(),
                    outcome.path.display().to_string().bright_cyan()
                );
                print!("{}", parsed.record);
                if !parsed.stats.reached_data() {
                    println!(
                        "  {} input ended in the {} section (no {} marker)",
                        "warning:".bright_yellow(),
                        parsed.stats.final_phase,
                        markers::DATA
                    );
                }
            }
            Err(error) => {
                println!(
                    "{} {}",
                    "✗".bright_red(),
                    outcome.path.display().to_string().bright_cyan()
                );
                println!("  {}", error.to_string().red());
            }
        }
    }

    let stats = &report.stats;
    println!();
    println!("{}", "Summary".bright_green().bold());
    println!("  {} {}", "Files parsed:".bright_cyan(), stats.files_parsed);
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_cyan(),
            stats.files_failed.to_string().bright_red()
        );
    }
    println!("  {} {}", "Attributes:".bright_cyan(), stats.total_attributes);
    println!("  {} {}", "Rows:".bright_cyan(), stats.total_rows);
    println!("  {} {}ms", "Elapsed:".bright_cyan(), stats.processing_time_ms);
}

#[derive(Serialize)]
struct JsonFileReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a ParseStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number: Option<usize>,
}

#[derive(Serialize)]
struct JsonBatchReport<'a> {
    files: Vec<JsonFileReport<'a>>,
    stats: &'a BatchStats,
}

fn to_json_report(report: &BatchReport) -> JsonBatchReport<'_> {
    let files = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(parsed) => JsonFileReport {
                path: &outcome.path,
                record: Some(&parsed.record),
                stats: Some(&parsed.stats),
                error: None,
            },
            Err(error) => JsonFileReport {
                path: &outcome.path,
                record: None,
                stats: None,
                error: Some(JsonError {
                    message: error.to_string(),
                    line_number: error.line_number(),
                }),
            },
        })
        .collect();

    JsonBatchReport {
        files,
        stats: &report.stats,
    }
}

fn print_json(report: &BatchReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_report(report))
        .context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessingConfig;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_report_shape() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.arff");
        let bad = temp_dir.path().join("bad.arff");
        fs::write(&good, "@RELATION r\n@ATTRIBUTE c {a,b}\n@DATA\na\n").unwrap();
        fs::write(&bad, "@RELATION r\n@ATTRIBUTE c {a,b}\n@DATA\nz\n").unwrap();

        let processor =
            BatchProcessor::new(ProcessingConfig::default().with_progress(false)).unwrap();
        let report = processor.process(vec![good, bad]).await.unwrap();

        let value = serde_json::to_value(to_json_report(&report)).unwrap();
        let files = value["files"].as_array().unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["record"]["relation_name"], "r");
        assert_eq!(files[0]["record"]["rows"][0][0], "a");
        assert!(files[0].get("error").is_none());

        assert!(files[1].get("record").is_none());
        assert_eq!(files[1]["error"]["line_number"], 4);
        assert_eq!(value["stats"]["files_failed"], 1);
    }
}
