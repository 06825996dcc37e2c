//! Tests for the section validators

use crate::app::models::FieldFormatError;

pub mod party_tests;
pub mod waste_collection_tests;

/// Error codes in reporting order
pub fn codes(errors: &[FieldFormatError]) -> Vec<String> {
    errors.iter().map(|error| error.code.to_string()).collect()
}
