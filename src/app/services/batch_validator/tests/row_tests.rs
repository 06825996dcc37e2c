//! Tests for the per-row orchestrator

use super::blank_row;
use crate::app::models::FlatRow;
use crate::app::services::batch_validator::{RowOutcome, RowValidator, row_index};
use crate::app::services::test_support::{
    fixture_reference_tables, valid_row, valid_row_with,
};

const COLLECTION_ADDRESS_FIELDS: [&str; 5] = [
    "wasteCollectionAddressLine1",
    "wasteCollectionAddressLine2",
    "wasteCollectionTownCity",
    "wasteCollectionPostcode",
    "wasteCollectionCountry",
];

#[test]
fn test_row_index() {
    assert_eq!(row_index(0, 0), 1);
    assert_eq!(row_index(1, 0), 2);
    assert_eq!(row_index(10, 4), 15);
}

#[test]
fn test_blank_row_is_skipped() {
    let validator = RowValidator::new(fixture_reference_tables());
    assert_eq!(validator.evaluate(1, &blank_row()), RowOutcome::Skipped);
    assert_eq!(validator.evaluate(1, &FlatRow::new()), RowOutcome::Skipped);
}

#[test]
fn test_valid_row_produces_submission() {
    let validator = RowValidator::new(fixture_reference_tables());

    match validator.evaluate(2, &valid_row()) {
        RowOutcome::Valid(submission) => {
            assert_eq!(submission.producer.reference, "ref123");
            assert_eq!(submission.waste_collection.address.address_line1, "4 Quarry Road");
            assert_eq!(submission.waste_types.len(), 1);
        }
        other => panic!("expected valid row, got {:?}", other),
    }
}

#[test]
fn test_invalid_row_carries_index_and_all_section_errors() {
    let validator = RowValidator::new(fixture_reference_tables());
    let row = valid_row_with("producerContactEmail", "bad")
        .with("carrierPostcode", "bad")
        .with("firstWasteTypeWasteQuantity", "0");

    match validator.evaluate(7, &row) {
        RowOutcome::Invalid(row_error) => {
            assert_eq!(row_error.index, 7);
            assert!(row_error.invalid_structure_errors.is_empty());
            let codes: Vec<String> = row_error
                .field_format_errors
                .iter()
                .map(|error| error.code.to_string())
                .collect();
            assert_eq!(
                codes,
                vec![
                    "PRODUCER_CONTACT_EMAIL_INVALID",
                    "CARRIER_POSTCODE_INVALID",
                    "WASTE_TYPE_1_WASTE_QUANTITY_NOT_GREATER_THAN_ZERO",
                ]
            );
        }
        other => panic!("expected invalid row, got {:?}", other),
    }
}

#[test]
fn test_collection_address_defaults_to_producer_address() {
    let validator = RowValidator::new(fixture_reference_tables());
    let mut row = valid_row();
    for field in COLLECTION_ADDRESS_FIELDS {
        row.remove(field);
    }

    match validator.evaluate(1, &row) {
        RowOutcome::Valid(submission) => {
            assert_eq!(submission.waste_collection.address, submission.producer.address);
        }
        other => panic!("expected valid row, got {:?}", other),
    }
}

#[test]
fn test_default_address_not_applied_to_invalid_rows() {
    let validator = RowValidator::new(fixture_reference_tables());
    let mut row = valid_row().with("producerReference", "");
    for field in COLLECTION_ADDRESS_FIELDS {
        row.remove(field);
    }

    match validator.evaluate(1, &row) {
        RowOutcome::Invalid(row_error) => {
            assert!(row_error.has_code("PRODUCER_REFERENCE_EMPTY"));
            assert_eq!(row_error.field_format_errors.len(), 1);
        }
        other => panic!("expected invalid row, got {:?}", other),
    }
}

#[test]
fn test_input_row_is_not_modified() {
    let validator = RowValidator::new(fixture_reference_tables());
    let row = valid_row_with("producerCountry", "  england ");
    let before = row.clone();

    assert!(matches!(validator.evaluate(1, &row), RowOutcome::Valid(_)));
    assert_eq!(row, before);
}
