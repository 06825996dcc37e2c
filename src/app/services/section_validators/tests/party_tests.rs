//! Tests for receiver, carrier and waste transportation validation

use super::codes;
use crate::app::models::{Country, FlatRow};
use crate::app::services::section_validators::{
    validate_carrier, validate_receiver, validate_waste_transportation,
};
use crate::app::services::test_support::{valid_row, valid_row_with, valid_row_without};

#[test]
fn test_valid_receiver() {
    let receiver = validate_receiver(&valid_row().normalized()).unwrap();

    assert_eq!(receiver.authorization_type, "Permit");
    assert_eq!(
        receiver.environmental_permit_number.as_deref(),
        Some("EPR/AB1234CD")
    );
    assert_eq!(receiver.address.country, Country::Wales);
    assert_eq!(receiver.address.address_line2, None);
}

#[test]
fn test_receiver_authorisation_rules() {
    let row = valid_row_without("receiverAuthorizationType")
        .with("receiverEnvironmentalPermitNumber", "P".repeat(51));
    let errors = validate_receiver(&row.normalized()).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "RECEIVER_AUTHORIZATION_TYPE_EMPTY",
            "RECEIVER_ENVIRONMENTAL_PERMIT_NUMBER_TOO_LONG",
        ]
    );
}

#[test]
fn test_receiver_permit_number_is_optional() {
    let row = valid_row_without("receiverEnvironmentalPermitNumber");
    let receiver = validate_receiver(&row.normalized()).unwrap();
    assert_eq!(receiver.environmental_permit_number, None);
}

#[test]
fn test_valid_carrier() {
    let carrier = validate_carrier(&valid_row().normalized()).unwrap();

    assert_eq!(carrier.contact.name, "Ailsa Brown");
    assert_eq!(carrier.address.town_city, "Glasgow");
    assert_eq!(carrier.address.country, Country::Scotland);
}

#[test]
fn test_carrier_ignores_producer_only_fields() {
    let row = valid_row().with("carrierReference", "!!").with("carrierSicCode", "x");
    assert!(validate_carrier(&row.normalized()).is_ok());
}

#[test]
fn test_carrier_collects_all_errors() {
    let row = valid_row_with("carrierContactEmail", "nope")
        .with("carrierPostcode", "12345")
        .with("carrierCountry", "Atlantis");
    let errors = validate_carrier(&row.normalized()).unwrap_err();

    assert_eq!(
        codes(&errors),
        vec![
            "CARRIER_CONTACT_EMAIL_INVALID",
            "CARRIER_POSTCODE_INVALID",
            "CARRIER_COUNTRY_INVALID",
        ]
    );
    assert_eq!(errors[0].field, "Carrier email address");
}

#[test]
fn test_valid_waste_transportation() {
    let transport = validate_waste_transportation(&valid_row().normalized()).unwrap();

    assert_eq!(transport.number_and_type_of_containers, "2 skips");
    assert_eq!(
        transport.special_handling_requirements.as_deref(),
        Some("Keep dry")
    );
}

#[test]
fn test_waste_transportation_rules() {
    let errors = validate_waste_transportation(&FlatRow::new().normalized()).unwrap_err();
    assert_eq!(
        codes(&errors),
        vec!["WASTE_TRANSPORTATION_NUMBER_AND_TYPE_OF_CONTAINERS_EMPTY"]
    );

    let row = valid_row_with("wasteTransportationSpecialHandlingRequirements", &"h".repeat(501));
    let errors = validate_waste_transportation(&row.normalized()).unwrap_err();
    assert_eq!(
        codes(&errors),
        vec!["WASTE_TRANSPORTATION_SPECIAL_HANDLING_REQUIREMENTS_TOO_LONG"]
    );
}
