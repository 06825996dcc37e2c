//! Reference data loading statistics and table summaries

use serde::Serialize;
use std::time::Duration;

/// Statistics about loading reference data from disk
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of JSON files read
    pub files_loaded: usize,

    /// Total entries deserialized across all files
    pub entries_loaded: usize,

    /// Optional files that were not present
    pub files_missing: Vec<String>,

    /// Time taken to read and index the tables
    pub load_duration: Duration,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} entries from {} reference files in {:.2}s",
            self.entries_loaded,
            self.files_loaded,
            self.load_duration.as_secs_f64()
        )
    }
}

/// Number of entries held in each reference table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSummary {
    pub ewc_codes: usize,
    pub hazardous_codes: usize,
    pub pops: usize,
    pub local_authorities: usize,
    pub sic_codes: usize,
    pub duplicates_skipped: usize,
}

impl ReferenceSummary {
    pub fn total_entries(&self) -> usize {
        self.ewc_codes + self.hazardous_codes + self.pops + self.local_authorities + self.sic_codes
    }
}
