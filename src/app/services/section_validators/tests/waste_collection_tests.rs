//! Tests for waste collection validation

use super::codes;
use crate::app::models::{CollectionDate, Country, WasteSource};
use crate::app::services::section_validators::{
    parse_collection_date, validate_producer, validate_waste_collection,
};
use crate::app::services::test_support::{
    fixture_reference_tables, valid_row, valid_row_with, valid_row_without,
};

const ADDRESS_FIELDS: [&str; 5] = [
    "wasteCollectionAddressLine1",
    "wasteCollectionAddressLine2",
    "wasteCollectionTownCity",
    "wasteCollectionPostcode",
    "wasteCollectionCountry",
];

#[test]
fn test_valid_waste_collection() {
    let tables = fixture_reference_tables();
    let section = validate_waste_collection(&valid_row().normalized(), &tables).unwrap();

    assert_eq!(section.waste_source, WasteSource::Commercial);
    assert_eq!(section.local_authority, "Hartlepool");
    assert_eq!(section.broker_registration_number.as_deref(), Some("CBDU123"));
    assert_eq!(
        section.expected_waste_collection_date,
        Some(CollectionDate {
            day: 1,
            month: 2,
            year: 2025
        })
    );

    let address = section.address.unwrap();
    assert_eq!(address.address_line1, "4 Quarry Road");
    assert_eq!(address.country, Country::England);
}

#[test]
fn test_waste_source_is_compacted_before_matching() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("wasteCollectionWasteSource", " local   authority ");
    let section = validate_waste_collection(&row.normalized(), &tables).unwrap();
    assert_eq!(section.waste_source, WasteSource::LocalAuthority);

    let row = valid_row_with("wasteCollectionWasteSource", "Agricultural");
    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_COLLECTION_WASTE_SOURCE_INVALID"]);
}

#[test]
fn test_local_authority_uses_reference_spelling() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("wasteCollectionLocalAuthority", "HARTLEPOOL");
    let section = validate_waste_collection(&row.normalized(), &tables).unwrap();
    assert_eq!(section.local_authority, "Hartlepool");

    let row = valid_row_with("wasteCollectionLocalAuthority", "Gotham");
    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_COLLECTION_LOCAL_AUTHORITY_INVALID"]);

    let row = valid_row_without("wasteCollectionLocalAuthority");
    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();
    assert_eq!(codes(&errors), vec!["WASTE_COLLECTION_LOCAL_AUTHORITY_EMPTY"]);
}

#[test]
fn test_blank_address_is_left_for_default() {
    let tables = fixture_reference_tables();
    let mut row = valid_row();
    for field in ADDRESS_FIELDS {
        row.set(field, " ");
    }

    let section = validate_waste_collection(&row.normalized(), &tables).unwrap();
    assert_eq!(section.address, None);

    let producer = validate_producer(&row.normalized()).unwrap();
    let detail = section.with_default_address(&producer.address);
    assert_eq!(detail.address, producer.address);
}

#[test]
fn test_given_address_is_not_replaced_by_default() {
    let tables = fixture_reference_tables();
    let row = valid_row();
    let section = validate_waste_collection(&row.normalized(), &tables).unwrap();
    let producer = validate_producer(&row.normalized()).unwrap();

    let detail = section.with_default_address(&producer.address);
    assert_eq!(detail.address.address_line1, "4 Quarry Road");
}

#[test]
fn test_partial_address_is_incomplete() {
    let tables = fixture_reference_tables();
    let mut row = valid_row();
    for field in ADDRESS_FIELDS {
        row.remove(field);
    }
    let row = row.with("wasteCollectionPostcode", "not valid");

    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_COLLECTION_ADDRESS_LINE_1_INCOMPLETE",
            "WASTE_COLLECTION_TOWN_CITY_INCOMPLETE",
            "WASTE_COLLECTION_COUNTRY_INCOMPLETE",
            "WASTE_COLLECTION_POSTCODE_INVALID",
        ]
    );
    assert_eq!(
        errors[0].message(),
        "Enter the waste collection address line 1 or leave the whole address blank"
    );
}

#[test]
fn test_registration_number_limits() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("wasteCollectionBrokerRegistrationNumber", &"B".repeat(51))
        .with("wasteCollectionCarrierRegistrationNumber", "C".repeat(51));
    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "WASTE_COLLECTION_BROKER_REGISTRATION_NUMBER_TOO_LONG",
            "WASTE_COLLECTION_CARRIER_REGISTRATION_NUMBER_TOO_LONG",
        ]
    );
}

#[test]
fn test_invalid_collection_date() {
    let tables = fixture_reference_tables();
    let row = valid_row_with("wasteCollectionExpectedWasteCollectionDate", "31/02/2025");
    let errors = validate_waste_collection(&row.normalized(), &tables).unwrap_err();
    assert_eq!(
        codes(&errors),
        vec!["WASTE_COLLECTION_EXPECTED_COLLECTION_DATE_INVALID"]
    );

    let row = valid_row_without("wasteCollectionExpectedWasteCollectionDate");
    let section = validate_waste_collection(&row.normalized(), &tables).unwrap();
    assert_eq!(section.expected_waste_collection_date, None);
}

#[test]
fn test_parse_collection_date_formats() {
    let expected = Some(CollectionDate {
        day: 5,
        month: 11,
        year: 2025,
    });

    assert_eq!(parse_collection_date("05/11/2025"), expected);
    assert_eq!(parse_collection_date("5/11/2025"), expected);
    assert_eq!(parse_collection_date("05-11-2025"), expected);
    assert_eq!(parse_collection_date("05.11.2025"), expected);

    assert_eq!(parse_collection_date("2025-11-05"), None);
    assert_eq!(parse_collection_date("05/11/25"), None);
    assert_eq!(parse_collection_date("05/13/2025"), None);
    assert_eq!(parse_collection_date("tomorrow"), None);
    assert_eq!(parse_collection_date("05/11-2025"), None);
}
