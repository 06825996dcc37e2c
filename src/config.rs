//! Configuration management and validation.
//!
//! Provides the processing parameters for batch validation and the location
//! of the reference data directory.

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_PARALLEL_THRESHOLD, REFERENCE_DIR_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for bulk validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of row chunks validated at the same time
    pub workers: usize,

    /// Rows handed to one blocking task during concurrent validation
    pub chunk_size: usize,

    /// Batches with fewer rows than this are validated on the calling task
    pub parallel_threshold: usize,

    /// Directory holding the reference data JSON files
    pub reference_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            reference_dir: default_reference_dir(),
        }
    }
}

impl Config {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create configuration with custom chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Create configuration with custom parallel threshold
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Create configuration with a custom reference data directory
    pub fn with_reference_dir(mut self, reference_dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = reference_dir.into();
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration("Worker count must be greater than 0"));
        }

        if self.chunk_size == 0 {
            return Err(Error::configuration("Chunk size must be greater than 0"));
        }

        if self.reference_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Reference data directory must be set"));
        }

        debug!(
            "Configuration valid: {} workers, chunks of {} rows, parallel from {} rows",
            self.workers, self.chunk_size, self.parallel_threshold
        );
        Ok(())
    }
}

/// Platform data directory location for reference data
///
/// Falls back to a relative `reference` directory when the platform has no
/// data directory.
pub fn default_reference_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(REFERENCE_DIR_NAME).join("reference"))
        .unwrap_or_else(|| PathBuf::from("reference"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.workers >= 1);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_workers(2)
            .with_chunk_size(10)
            .with_parallel_threshold(0)
            .with_reference_dir("/tmp/reference");

        assert_eq!(config.workers, 2);
        assert_eq!(config.chunk_size, 10);
        assert_eq!(config.parallel_threshold, 0);
        assert_eq!(config.reference_dir, PathBuf::from("/tmp/reference"));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        assert!(Config::default().with_workers(0).validate().is_err());
        assert!(Config::default().with_chunk_size(0).validate().is_err());
        assert!(Config::default().with_reference_dir("").validate().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default().with_workers(3);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
