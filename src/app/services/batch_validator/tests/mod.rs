//! Tests for row orchestration, batch assembly and concurrent validation

pub mod assembler_tests;
pub mod row_tests;

use crate::app::models::{BatchRequest, FlatRow};

pub fn request(rows: Vec<FlatRow>) -> BatchRequest {
    BatchRequest {
        account_id: "acc-123".to_string(),
        pad_index: 0,
        values: rows,
    }
}

pub fn blank_row() -> FlatRow {
    FlatRow::new()
        .with("producerReference", "  ")
        .with("firstWasteTypeEwcCode", "\t")
}
