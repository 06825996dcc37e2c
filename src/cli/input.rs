//! Batch file reading for the validate command
//!
//! A batch is either a JSON request in the wire shape (`accountId`,
//! `padIndex`, `values`) or a CSV export of the upload spreadsheet whose
//! header row holds the flattened field names.

use crate::app::models::{BatchRequest, FlatRow};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Spreadsheet rows consumed by a CSV export's header line
pub const CSV_HEADER_ROWS: usize = 1;

/// Read a JSON batch request
pub async fn read_json_batch(path: &Path) -> Result<BatchRequest> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    let request: BatchRequest = serde_json::from_str(&contents)
        .map_err(|e| Error::json(format!("Invalid batch request in {}", path.display()), e))?;

    debug!(
        "Read {} rows for account {} from {}",
        request.values.len(),
        request.account_id,
        path.display()
    );
    Ok(request)
}

/// Read a CSV export into a batch request
///
/// Empty cells are left out of the row so they read as absent.
pub async fn read_csv_batch(path: &Path, account_id: &str, pad_index: usize) -> Result<BatchRequest> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let file = path.display().to_string();

    let values = parse_csv_rows(&contents, &file)?;
    debug!("Read {} CSV rows from {}", values.len(), file);

    Ok(BatchRequest {
        account_id: account_id.to_string(),
        pad_index,
        values,
    })
}

/// Parse CSV bytes into flattened rows keyed by the header names
pub fn parse_csv_rows(contents: &[u8], file: &str) -> Result<Vec<FlatRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(file, "Failed to read CSV headers", Some(e)))?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    if headers.iter().all(|header| header.is_empty()) {
        return Err(Error::csv_parsing(file, "CSV header row is empty", None));
    }

    let mut rows = Vec::new();
    for (position, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(file, format!("Failed to read record {}", position + 1), Some(e))
        })?;

        let row: FlatRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, value)| !header.is_empty() && !value.is_empty())
            .map(|(header, value)| (header.as_str(), value))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
