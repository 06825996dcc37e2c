//! Tests for batch assembly and statistics

use crate::app::models::{FieldFormatError, FieldKey, RowError, Section, Violation};
use crate::app::services::batch_validator::{
    BatchAssembler, RowOutcome, RowValidator, ValidationStats, assemble,
};
use crate::app::services::test_support::{fixture_reference_tables, valid_row};

fn submission_outcome() -> RowOutcome {
    RowValidator::new(fixture_reference_tables()).evaluate(1, &valid_row())
}

fn error_outcome(index: usize) -> RowOutcome {
    RowOutcome::Invalid(RowError::new(
        index,
        vec![FieldFormatError::new(
            Section::Producer,
            FieldKey::Reference,
            Violation::Empty,
        )],
    ))
}

#[test]
fn test_all_valid_batch() {
    let result = assemble(
        "acc-1",
        vec![submission_outcome(), RowOutcome::Skipped, submission_outcome()],
    );

    assert!(result.is_valid());
    assert_eq!(result.account_id(), "acc-1");
    assert_eq!(result.submissions().unwrap().len(), 2);
}

#[test]
fn test_any_error_makes_batch_invalid() {
    let result = assemble(
        "acc-1",
        vec![submission_outcome(), error_outcome(3), error_outcome(5)],
    );

    assert!(!result.is_valid());
    let indices: Vec<usize> = result
        .row_errors()
        .unwrap()
        .iter()
        .map(|row_error| row_error.index)
        .collect();
    assert_eq!(indices, vec![3, 5]);
    assert!(result.submissions().is_none());
}

#[test]
fn test_empty_and_all_blank_batches_are_valid() {
    assert!(assemble("acc-1", Vec::new()).is_valid());

    let result = assemble("acc-1", vec![RowOutcome::Skipped, RowOutcome::Skipped]);
    assert!(result.is_valid());
    assert!(result.submissions().unwrap().is_empty());
}

#[test]
fn test_assembler_statistics() {
    let mut assembler = BatchAssembler::new();
    assembler.push(submission_outcome());
    assembler.push(RowOutcome::Skipped);
    assembler.push(error_outcome(3));
    assert_eq!(assembler.stats().total_rows, 3);

    let (_, stats) = assembler.finish("acc-1");
    assert_eq!(stats.total_rows, 3);
    assert_eq!(stats.skipped_rows, 1);
    assert_eq!(stats.valid_rows, 1);
    assert_eq!(stats.invalid_rows, 1);
    assert_eq!(stats.field_errors, 1);
    assert_eq!(stats.evaluated_rows(), 2);
    assert_eq!(stats.success_rate(), 50.0);
}

#[test]
fn test_stats_summary() {
    let stats = ValidationStats::new();
    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.summary().starts_with("Validated 0 rows"));
}
