//! Batch result assembly
//!
//! Any rejected row turns the whole batch invalid: the result then carries
//! only the row errors and the valid rows are dropped. Blank rows never
//! appear in either list.

use super::row::RowOutcome;
use super::stats::ValidationStats;
use crate::app::models::{BatchResult, RowError, Submission};

/// Collects row outcomes in row order
#[derive(Debug, Default)]
pub struct BatchAssembler {
    submissions: Vec<Submission>,
    row_errors: Vec<RowError>,
    stats: ValidationStats,
}

impl BatchAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: RowOutcome) {
        self.stats.record(&outcome);
        match outcome {
            RowOutcome::Skipped => {}
            RowOutcome::Valid(submission) => self.submissions.push(submission),
            RowOutcome::Invalid(row_error) => self.row_errors.push(row_error),
        }
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// Build the batch result and hand back the statistics
    pub fn finish(self, account_id: impl Into<String>) -> (BatchResult, ValidationStats) {
        let account_id = account_id.into();
        let result = if self.row_errors.is_empty() {
            BatchResult::Valid {
                account_id,
                values: self.submissions,
            }
        } else {
            BatchResult::Invalid {
                account_id,
                values: self.row_errors,
            }
        };
        (result, self.stats)
    }
}

impl Extend<RowOutcome> for BatchAssembler {
    fn extend<I: IntoIterator<Item = RowOutcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.push(outcome);
        }
    }
}

/// Assemble ordered row outcomes into a batch result
pub fn assemble(
    account_id: impl Into<String>,
    outcomes: impl IntoIterator<Item = RowOutcome>,
) -> BatchResult {
    let mut assembler = BatchAssembler::new();
    assembler.extend(outcomes);
    assembler.finish(account_id).0
}
