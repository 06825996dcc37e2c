//! Tests for waste type slot validation

pub mod slot_tests;

use crate::app::models::{FieldFormatError, FlatRow};
use crate::app::services::test_support::valid_row;

pub fn codes(errors: &[FieldFormatError]) -> Vec<String> {
    errors.iter().map(|error| error.code.to_string()).collect()
}

/// Valid row with a complete second waste type slot added
pub fn row_with_second_slot() -> FlatRow {
    valid_row()
        .with("secondWasteTypeEwcCode", "17 05 04")
        .with("secondWasteTypeWasteDescription", "Soil")
        .with("secondWasteTypePhysicalForm", "mixed")
        .with("secondWasteTypeWasteQuantity", "2.5")
        .with("secondWasteTypeWasteQuantityUnit", "cubic metres")
        .with("secondWasteTypeWasteQuantityType", "Actual")
        .with("secondWasteTypeChemicalAndBiologicalComponentsString", "Clay")
        .with(
            "secondWasteTypeChemicalAndBiologicalComponentsConcentrationsString",
            "100",
        )
        .with(
            "secondWasteTypeChemicalAndBiologicalComponentsConcentrationUnitsString",
            "%",
        )
        .with("secondWasteTypeHasHazardousProperties", "n")
        .with("secondWasteTypeContainsPops", "N")
}
