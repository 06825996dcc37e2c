//! Batch validation statistics

use super::row::RowOutcome;
use std::time::Duration;

/// Counts gathered while assembling a batch result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationStats {
    /// Rows in the request, including blank ones
    pub total_rows: usize,
    /// Blank rows left out of both output lists
    pub skipped_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    /// Field errors across all rejected rows
    pub field_errors: usize,
    /// Wall-clock time spent validating
    pub duration: Duration,
}

impl ValidationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one row outcome
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.total_rows += 1;
        match outcome {
            RowOutcome::Skipped => self.skipped_rows += 1,
            RowOutcome::Valid(_) => self.valid_rows += 1,
            RowOutcome::Invalid(row_error) => {
                self.invalid_rows += 1;
                self.field_errors += row_error.field_format_errors.len();
            }
        }
    }

    /// Rows that were actually evaluated
    pub fn evaluated_rows(&self) -> usize {
        self.valid_rows + self.invalid_rows
    }

    /// Percentage of evaluated rows that passed
    pub fn success_rate(&self) -> f64 {
        if self.evaluated_rows() == 0 {
            100.0
        } else {
            (self.valid_rows as f64 / self.evaluated_rows() as f64) * 100.0
        }
    }

    /// Get a summary string of the validation run
    pub fn summary(&self) -> String {
        format!(
            "Validated {} rows in {:.2}s: {} valid, {} invalid ({} field errors), {} blank",
            self.total_rows,
            self.duration.as_secs_f64(),
            self.valid_rows,
            self.invalid_rows,
            self.field_errors,
            self.skipped_rows
        )
    }
}
