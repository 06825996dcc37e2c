//! Batch validation service
//!
//! Drives the row orchestrator over every row of a [`BatchRequest`] and
//! assembles the outcomes into a [`BatchResult`]. Rows are independent, so
//! large batches are split into chunks that run on the blocking thread pool;
//! outcomes are put back into input order before assembly so the result is
//! identical to a sequential run.

pub mod assembler;
pub mod row;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use assembler::{BatchAssembler, assemble};
pub use row::{RowOutcome, RowValidator, row_index};
pub use stats::ValidationStats;

use crate::app::models::{BatchRequest, BatchResult, FlatRow, ValidationResponse};
use crate::app::services::reference_data::ReferenceTables;
use crate::config::Config;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info};

/// Validates whole batches of flattened rows
#[derive(Debug, Clone)]
pub struct BatchValidator {
    rows: RowValidator,
    config: Config,
}

impl BatchValidator {
    pub fn new(reference: Arc<ReferenceTables>, config: Config) -> Self {
        Self {
            rows: RowValidator::new(reference),
            config,
        }
    }

    /// Validate a batch on the calling thread
    pub fn validate(&self, request: &BatchRequest) -> BatchResult {
        self.validate_with_stats(request).0
    }

    /// Validate a batch on the calling thread, also returning statistics
    pub fn validate_with_stats(&self, request: &BatchRequest) -> (BatchResult, ValidationStats) {
        let start_time = Instant::now();
        info!(
            "Validating {} rows for account {}",
            request.values.len(),
            request.account_id
        );

        let mut assembler = BatchAssembler::new();
        assembler.extend(
            request
                .values
                .iter()
                .enumerate()
                .map(|(position, row)| {
                    self.rows
                        .evaluate(row_index(request.pad_index, position), row)
                }),
        );

        self.finish(assembler, &request.account_id, start_time)
    }

    /// Validate a batch on the blocking thread pool, in chunks for large inputs
    ///
    /// # Errors
    /// * `Error::Internal` if a validation task panicked or was cancelled
    pub async fn validate_concurrent(&self, request: BatchRequest) -> Result<BatchResult> {
        Ok(self.validate_concurrent_with_stats(request).await?.0)
    }

    /// Concurrent validation, also returning statistics
    pub async fn validate_concurrent_with_stats(
        &self,
        request: BatchRequest,
    ) -> Result<(BatchResult, ValidationStats)> {
        if request.values.len() < self.config.parallel_threshold {
            debug!(
                "{} rows is below the parallel threshold of {}, validating in one task",
                request.values.len(),
                self.config.parallel_threshold
            );
            let validator = self.clone();
            return task::spawn_blocking(move || validator.validate_with_stats(&request))
                .await
                .map_err(task_failed);
        }

        let start_time = Instant::now();
        let BatchRequest {
            account_id,
            pad_index,
            values,
        } = request;
        let total_rows = values.len();
        let chunk_size = self.config.chunk_size.max(1);
        let concurrent_limit = self.config.workers.max(1);

        info!(
            "Validating {} rows for account {} in chunks of {} ({} concurrent)",
            total_rows, account_id, chunk_size, concurrent_limit
        );

        let rows: Arc<Vec<FlatRow>> = Arc::new(values);
        let starts: Vec<usize> = (0..total_rows).step_by(chunk_size).collect();

        let results = stream::iter(starts)
            .map(|start| {
                let rows = Arc::clone(&rows);
                let validator = self.rows.clone();
                let end = (start + chunk_size).min(total_rows);
                task::spawn_blocking(move || {
                    let outcomes: Vec<RowOutcome> = rows[start..end]
                        .iter()
                        .enumerate()
                        .map(|(offset, row)| {
                            validator.evaluate(row_index(pad_index, start + offset), row)
                        })
                        .collect();
                    (start, outcomes)
                })
            })
            .buffer_unordered(concurrent_limit)
            .collect::<Vec<_>>()
            .await;

        let mut chunks = Vec::with_capacity(results.len());
        for result in results {
            let chunk = result.map_err(task_failed)?;
            chunks.push(chunk);
        }
        chunks.sort_by_key(|(start, _)| *start);

        let mut assembler = BatchAssembler::new();
        for (_, outcomes) in chunks {
            assembler.extend(outcomes);
        }

        Ok(self.finish(assembler, &account_id, start_time))
    }

    /// Check the request, validate it, and wrap the outcome in the response envelope
    pub async fn respond(&self, request: BatchRequest) -> ValidationResponse {
        let result = match check_request(&request) {
            Ok(()) => self.validate_concurrent(request).await,
            Err(e) => Err(e),
        };
        ValidationResponse::from(result)
    }

    fn finish(
        &self,
        assembler: BatchAssembler,
        account_id: &str,
        start_time: Instant,
    ) -> (BatchResult, ValidationStats) {
        let (result, mut stats) = assembler.finish(account_id);
        stats.duration = start_time.elapsed();
        info!("{}", stats.summary());
        (result, stats)
    }
}

/// A validation task that panicked or was cancelled
pub(crate) fn task_failed(error: task::JoinError) -> Error {
    Error::internal(format!("Row validation task failed: {}", error))
}

/// Reject requests that cannot be validated at all
pub fn check_request(request: &BatchRequest) -> Result<()> {
    if request.account_id.trim().is_empty() {
        return Err(Error::invalid_request("accountId must not be empty"));
    }
    if request.pad_index.checked_add(request.values.len()).is_none() {
        return Err(Error::invalid_request(format!(
            "padIndex {} is too large for {} rows",
            request.pad_index,
            request.values.len()
        )));
    }
    Ok(())
}
