//! Configuration management and validation.
//!
//! Provides the settings that drive batch parsing: worker count, input
//! discovery rules and reporting behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::DEFAULT_EXTENSIONS;
use crate::error::{ArffError, Result};

/// Configuration for parsing a batch of ARFF files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Maximum number of files parsed concurrently
    pub workers: usize,

    /// Descend into sub-directories of directory inputs
    pub recursive: bool,

    /// File extensions (without the dot) picked up from directories
    pub extensions: Vec<String>,

    /// Abort the batch on the first file that fails to parse
    pub fail_fast: bool,

    /// Show a progress bar while parsing
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            recursive: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            fail_fast: false,
            show_progress: true,
        }
    }
}

impl ProcessingConfig {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Enable recursive directory discovery
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Replace the accepted file extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Stop at the first failing file
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ArffError::configuration("workers must be at least 1"));
        }

        if self.extensions.is_empty() {
            return Err(ArffError::configuration(
                "at least one file extension is required",
            ));
        }

        if let Some(ext) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ArffError::configuration(format!(
                "invalid extension '{}': give the extension without a leading dot",
                ext
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Whether a discovered path has one of the accepted extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessingConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.extensions, vec!["arff".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = ProcessingConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(ArffError::Configuration { .. })
        ));
    }

    #[test]
    fn test_extension_rules() {
        let config = ProcessingConfig::default().with_extensions(Vec::<String>::new());
        assert!(config.validate().is_err());

        let config = ProcessingConfig::default().with_extensions([".arff"]);
        assert!(config.validate().is_err());

        let config = ProcessingConfig::default().with_extensions(["arff", "txt"]);
        assert!(config.validate().is_ok());
        assert!(config.matches_extension(Path::new("data/cars.ARFF")));
        assert!(config.matches_extension(Path::new("notes.txt")));
        assert!(!config.matches_extension(Path::new("cars.csv")));
        assert!(!config.matches_extension(Path::new("README")));
    }
}
