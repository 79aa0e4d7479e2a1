//! Concurrent batch parsing of ARFF files.
//!
//! Discovers input files, parses each one on the blocking thread pool with
//! a bounded number in flight and gathers per-file outcomes in input order.
//! Every parse is an independent call with no shared state.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task;
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;
use crate::error::{ArffError, Result};
use crate::models::Record;
use crate::parser::parse_file;
use crate::stats::ParseResult;

/// Outcome of parsing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ParseResult>,
}

/// Aggregate counters for a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub files_parsed: usize,
    pub files_failed: usize,
    pub total_attributes: usize,
    pub total_rows: usize,
    pub processing_time_ms: u128,
}

/// Per-file outcomes, in input order, plus totals
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub stats: BatchStats,
}

impl BatchReport {
    /// True when every file parsed
    pub fn is_successful(&self) -> bool {
        self.stats.files_failed == 0
    }

    /// Successfully parsed records
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .map(|result| &result.record)
    }

    /// Files that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ArffError)> + '_ {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|err| (outcome.path.as_path(), err))
        })
    }
}

/// Parses many ARFF files concurrently
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: ProcessingConfig,
}

impl BatchProcessor {
    /// Create a processor; the configuration is validated up front
    pub fn new(config: ProcessingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Discover then parse every input
    pub async fn run(&self, inputs: &[PathBuf]) -> Result<BatchReport> {
        let files = self.discover_inputs(inputs)?;
        self.process(files).await
    }

    /// Expand directories into ARFF files; explicit file arguments are kept as given
    pub fn discover_inputs(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                let max_depth = if self.config.recursive { usize::MAX } else { 1 };
                for entry in WalkDir::new(input).max_depth(max_depth) {
                    let entry = entry?;
                    if entry.file_type().is_file() && self.config.matches_extension(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
            } else {
                return Err(ArffError::InputNotFound {
                    path: input.clone(),
                });
            }
        }

        files.sort();
        files.dedup();

        debug!("Discovered {} ARFF files from {} inputs", files.len(), inputs.len());
        Ok(files)
    }

    /// Parse the given files with at most `workers` in flight
    pub async fn process(&self, files: Vec<PathBuf>) -> Result<BatchReport> {
        let start_time = Instant::now();
        let total = files.len();
        let concurrent_limit = self.config.workers.min(total).max(1);

        info!(
            "Parsing {} files with up to {} workers",
            total, concurrent_limit
        );

        let progress = self.progress_bar(total);

        let mut pending = stream::iter(files.into_iter().enumerate())
            .map(|(index, path)| {
                let progress = progress.clone();
                async move {
                    if let Some(pb) = &progress {
                        if let Some(file_name) = path.file_name() {
                            pb.set_message(format!("Parsing: {}", file_name.to_string_lossy()));
                        }
                    }

                    let task_path = path.clone();
                    let result = match task::spawn_blocking(move || parse_file(&task_path)).await
                    {
                        Ok(result) => result,
                        Err(e) => Err(ArffError::task_failed(format!(
                            "{}: {}",
                            path.display(),
                            e
                        ))),
                    };

                    if let Some(pb) = &progress {
                        pb.inc(1);
                    }
                    (index, FileOutcome { path, result })
                }
            })
            .buffer_unordered(concurrent_limit);

        let mut indexed = Vec::with_capacity(total);
        let mut stats = BatchStats::default();

        while let Some((index, outcome)) = pending.next().await {
            match outcome.result {
                Err(e) if self.config.fail_fast => {
                    if let Some(pb) = &progress {
                        pb.abandon_with_message("Aborted");
                    }
                    error!("Aborting batch: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    error!("Failed to parse {}: {}", outcome.path.display(), e);
                    stats.files_failed += 1;
                    indexed.push((
                        index,
                        FileOutcome {
                            path: outcome.path,
                            result: Err(e),
                        },
                    ));
                }
                Ok(parsed) => {
                    debug!(
                        "Parsed {}: {} rows",
                        outcome.path.display(),
                        parsed.stats.rows_parsed
                    );
                    stats.files_parsed += 1;
                    stats.total_attributes += parsed.record.attributes().len();
                    stats.total_rows += parsed.record.rows().len();
                    indexed.push((
                        index,
                        FileOutcome {
                            path: outcome.path,
                            result: Ok(parsed),
                        },
                    ));
                }
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("Parsing complete");
        }

        indexed.sort_by_key(|(index, _)| *index);
        stats.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Parsed {} files ({} failed): {} attributes, {} rows in {}ms",
            stats.files_parsed,
            stats.files_failed,
            stats.total_attributes,
            stats.total_rows,
            stats.processing_time_ms
        );

        Ok(BatchReport {
            outcomes: indexed.into_iter().map(|(_, outcome)| outcome).collect(),
            stats,
        })
    }

    fn progress_bar(&self, total: usize) -> Option<ProgressBar> {
        if !self.config.show_progress || total == 0 {
            return None;
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message("Parsing files");
        Some(pb)
    }
}
