//! Tests for single-slot rules and slot selection

use super::{codes, row_with_second_slot};
use crate::app::models::{FlatRow, PhysicalForm, QuantityType, QuantityUnit, Section};
use crate::app::services::test_support::{
    fixture_reference_tables, valid_row, valid_row_with, valid_row_without,
};
use crate::app::services::waste_type_validator::{SlotFields, validate_slot, validate_waste_types};

#[test]
fn test_slot_fields_binding() {
    let slot = SlotFields::new(3).unwrap();
    assert_eq!(slot.ordinal(), "third");
    assert_eq!(slot.section(), Section::WasteType(3));
    assert_eq!(slot.field_name("EwcCode"), "thirdWasteTypeEwcCode");
    assert!(!slot.is_mandatory());

    assert!(SlotFields::new(0).is_none());
    assert!(SlotFields::new(11).is_none());
    assert_eq!(SlotFields::all().count(), 10);
    assert_eq!(SlotFields::all().last().unwrap().ordinal(), "tenth");
}

#[test]
fn test_valid_first_slot() {
    let tables = fixture_reference_tables();
    let waste_types = validate_waste_types(&valid_row().normalized(), &tables).unwrap();

    assert_eq!(waste_types.len(), 1);
    let waste_type = &waste_types[0];
    assert_eq!(waste_type.ewc_code, "010101");
    assert_eq!(waste_type.physical_form, PhysicalForm::Solid);
    assert_eq!(waste_type.waste_quantity, 100.0);
    assert_eq!(waste_type.quantity_unit, QuantityUnit::Tonne);
    assert_eq!(waste_type.quantity_type, QuantityType::Estimate);

    let components = &waste_type.chemical_and_biological_components;
    assert_eq!(components.len(), 2);
    assert_eq!(components[1].name, "Silica");
    assert_eq!(components[1].concentration, 40.0);
    assert_eq!(components[1].concentration_unit, "%");

    assert!(waste_type.has_hazardous_properties);
    assert_eq!(waste_type.hazardous_waste_codes, vec!["HP1"]);
    assert!(waste_type.contains_pops);
    assert_eq!(waste_type.pops[0].name, "Endosulfan");
    assert_eq!(waste_type.pops[0].concentration, 0.1);
}

#[test]
fn test_blank_first_slot_reports_mandatory_fields() {
    let tables = fixture_reference_tables();
    let errors = validate_waste_types(&FlatRow::new().normalized(), &tables).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_TYPE_1_EWC_CODE_EMPTY",
            "WASTE_TYPE_1_WASTE_DESCRIPTION_EMPTY",
            "WASTE_TYPE_1_PHYSICAL_FORM_EMPTY",
            "WASTE_TYPE_1_WASTE_QUANTITY_EMPTY",
            "WASTE_TYPE_1_QUANTITY_UNIT_EMPTY",
            "WASTE_TYPE_1_QUANTITY_TYPE_EMPTY",
            "WASTE_TYPE_1_CHEMICAL_COMPONENTS_EMPTY",
            "WASTE_TYPE_1_HAS_HAZARDOUS_PROPERTIES_EMPTY",
            "WASTE_TYPE_1_CONTAINS_POPS_EMPTY",
        ]
    );
}

#[test]
fn test_unused_slots_are_skipped() {
    let tables = fixture_reference_tables();
    // Description without an EWC code does not make a slot "in use"
    let row = valid_row().with("thirdWasteTypeWasteDescription", "Orphaned");

    let waste_types = validate_waste_types(&row.normalized(), &tables).unwrap();
    assert_eq!(waste_types.len(), 1);
}

#[test]
fn test_second_slot_validated_when_ewc_code_given() {
    let tables = fixture_reference_tables();
    let waste_types = validate_waste_types(&row_with_second_slot().normalized(), &tables).unwrap();

    assert_eq!(waste_types.len(), 2);
    let second = &waste_types[1];
    assert_eq!(second.ewc_code, "170504");
    assert_eq!(second.physical_form, PhysicalForm::Mixed);
    assert_eq!(second.quantity_unit, QuantityUnit::CubicMetre);
    assert_eq!(second.waste_quantity, 2.5);
    assert!(!second.has_hazardous_properties);
    assert!(second.hazardous_waste_codes.is_empty());
    assert!(second.pops.is_empty());
}

#[test]
fn test_errors_are_namespaced_by_slot() {
    let tables = fixture_reference_tables();
    let row = row_with_second_slot()
        .with("firstWasteTypePhysicalForm", "Plasma")
        .with("secondWasteTypePhysicalForm", "Plasma");

    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_TYPE_1_PHYSICAL_FORM_INVALID",
            "WASTE_TYPE_2_PHYSICAL_FORM_INVALID",
        ]
    );
    assert_eq!(errors[0].field, errors[1].field);
    assert_eq!(
        errors[1].message(),
        "Enter a valid physical form for the second waste type"
    );
}

#[test]
fn test_ewc_code_rules() {
    let tables = fixture_reference_tables();

    let row = valid_row_with("firstWasteTypeEwcCode", "'20 01 21*'");
    let waste_types = validate_waste_types(&row.normalized(), &tables).unwrap();
    assert_eq!(waste_types[0].ewc_code, "200121");

    for code in ["999999", "01010", "abcdef"] {
        let row = valid_row_with("firstWasteTypeEwcCode", code);
        let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
        assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_EWC_CODE_INVALID"], "{}", code);
    }
}

#[test]
fn test_description_limit() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("firstWasteTypeWasteDescription", &"d".repeat(101));
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_WASTE_DESCRIPTION_TOO_LONG"]);
}

#[test]
fn test_quantity_is_rounded_before_minimum_check() {
    let tables = fixture_reference_tables();

    let row = valid_row_with("firstWasteTypeWasteQuantity", "0.125");
    let waste_types = validate_waste_types(&row.normalized(), &tables).unwrap();
    assert_eq!(waste_types[0].waste_quantity, 0.13);

    // Rounds to 0.00, which is not greater than zero
    let row = valid_row_with("firstWasteTypeWasteQuantity", "0.004");
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_WASTE_QUANTITY_NOT_GREATER_THAN_ZERO"]);

    let row = valid_row_with("firstWasteTypeWasteQuantity", "-3");
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_WASTE_QUANTITY_NOT_GREATER_THAN_ZERO"]);

    let row = valid_row_with("firstWasteTypeWasteQuantity", "ten");
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_WASTE_QUANTITY_INVALID"]);
}

#[test]
fn test_quantity_too_large_for_a_number_is_invalid() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("firstWasteTypeWasteQuantity", &"9".repeat(400));

    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_TYPE_1_WASTE_QUANTITY_INVALID"]);
}

#[test]
fn test_quantity_unit_and_type() {
    let tables = fixture_reference_tables();

    let row = valid_row_with("firstWasteTypeWasteQuantityUnit", "KG")
        .with("firstWasteTypeWasteQuantityType", " ACT UAL ");
    let waste_types = validate_waste_types(&row.normalized(), &tables).unwrap();
    assert_eq!(waste_types[0].quantity_unit, QuantityUnit::Kilogram);
    assert_eq!(waste_types[0].quantity_type, QuantityType::Actual);

    let row = valid_row_with("firstWasteTypeWasteQuantityUnit", "bushels")
        .with("firstWasteTypeWasteQuantityType", "guess");
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();
    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_TYPE_1_QUANTITY_UNIT_INVALID",
            "WASTE_TYPE_1_QUANTITY_TYPE_INVALID",
        ]
    );
}

#[test]
fn test_yes_no_flags_accept_single_letters_only() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("firstWasteTypeHasHazardousProperties", "yes")
        .with("firstWasteTypeContainsPops", "maybe");
    let errors = validate_waste_types(&row.normalized(), &tables).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_TYPE_1_HAS_HAZARDOUS_PROPERTIES_INVALID",
            "WASTE_TYPE_1_CONTAINS_POPS_INVALID",
        ]
    );
}

#[test]
fn test_validate_slot_directly() {
    let tables = fixture_reference_tables();
    let slot = SlotFields::new(1).unwrap();

    let row = valid_row_without("firstWasteTypeWasteDescription");
    let errors = validate_slot(&row.normalized(), slot, &tables).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "Enter the waste description for the first waste type"
    );
}
