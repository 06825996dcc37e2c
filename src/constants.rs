//! Application constants for the bulk waste movement validator
//!
//! This module contains the flat-row field names, length limits, validation
//! patterns, synonym tables and default values used throughout the validator.

// =============================================================================
// Waste Type Slots
// =============================================================================

/// Maximum number of waste type slots carried by one flattened row
pub const MAX_WASTE_TYPE_SLOTS: usize = 10;

/// Ordinal words used to prefix the field names of each waste type slot
pub const SLOT_ORDINALS: [&str; MAX_WASTE_TYPE_SLOTS] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Delimiter for list-valued spreadsheet cells
pub const LIST_DELIMITER: char = ';';

// =============================================================================
// Field Name Prefixes
// =============================================================================

/// Flattened field names are built as `<prefix><Suffix>`
pub mod prefixes {
    pub const PRODUCER: &str = "producer";
    pub const RECEIVER: &str = "receiver";
    pub const CARRIER: &str = "carrier";
    pub const WASTE_COLLECTION: &str = "wasteCollection";
    pub const WASTE_TRANSPORTATION: &str = "wasteTransportation";
}

/// Field name suffixes shared by party sections and slots
pub mod suffixes {
    // Party sections
    pub const REFERENCE: &str = "Reference";
    pub const SIC_CODE: &str = "SicCode";
    pub const ORGANISATION_NAME: &str = "OrganisationName";
    pub const ADDRESS_LINE_1: &str = "AddressLine1";
    pub const ADDRESS_LINE_2: &str = "AddressLine2";
    pub const TOWN_CITY: &str = "TownCity";
    pub const POSTCODE: &str = "Postcode";
    pub const COUNTRY: &str = "Country";
    pub const CONTACT_NAME: &str = "ContactName";
    pub const CONTACT_EMAIL: &str = "ContactEmail";
    pub const CONTACT_PHONE: &str = "ContactPhone";
    pub const AUTHORIZATION_TYPE: &str = "AuthorizationType";
    pub const ENVIRONMENTAL_PERMIT_NUMBER: &str = "EnvironmentalPermitNumber";

    // Waste collection
    pub const LOCAL_AUTHORITY: &str = "LocalAuthority";
    pub const WASTE_SOURCE: &str = "WasteSource";
    pub const BROKER_REGISTRATION_NUMBER: &str = "BrokerRegistrationNumber";
    pub const CARRIER_REGISTRATION_NUMBER: &str = "CarrierRegistrationNumber";
    pub const EXPECTED_WASTE_COLLECTION_DATE: &str = "ExpectedWasteCollectionDate";

    // Waste transportation
    pub const NUMBER_AND_TYPE_OF_CONTAINERS: &str = "NumberAndTypeOfContainers";
    pub const SPECIAL_HANDLING_REQUIREMENTS: &str = "SpecialHandlingRequirements";

    // Waste type slots, prefixed by `<ordinal>WasteType`
    pub const EWC_CODE: &str = "EwcCode";
    pub const WASTE_DESCRIPTION: &str = "WasteDescription";
    pub const PHYSICAL_FORM: &str = "PhysicalForm";
    pub const WASTE_QUANTITY: &str = "WasteQuantity";
    pub const WASTE_QUANTITY_UNIT: &str = "WasteQuantityUnit";
    pub const WASTE_QUANTITY_TYPE: &str = "WasteQuantityType";
    pub const CHEMICAL_COMPONENTS: &str = "ChemicalAndBiologicalComponentsString";
    pub const CHEMICAL_CONCENTRATIONS: &str =
        "ChemicalAndBiologicalComponentsConcentrationsString";
    pub const CHEMICAL_CONCENTRATION_UNITS: &str =
        "ChemicalAndBiologicalComponentsConcentrationUnitsString";
    pub const HAS_HAZARDOUS_PROPERTIES: &str = "HasHazardousProperties";
    pub const HAZARDOUS_WASTE_CODES: &str = "HazardousWasteCodesString";
    pub const CONTAINS_POPS: &str = "ContainsPops";
    pub const POPS: &str = "PersistentOrganicPollutantsString";
    pub const POP_CONCENTRATIONS: &str = "PersistentOrganicPollutantsConcentrationsString";
    pub const POP_CONCENTRATION_UNITS: &str =
        "PersistentOrganicPollutantsConcentrationUnitsString";
}

/// Build a flattened field name from a prefix and suffix
pub fn field_name(prefix: &str, suffix: &str) -> String {
    format!("{}{}", prefix, suffix)
}

/// Build a waste type slot field name, e.g. `thirdWasteTypeEwcCode`
pub fn slot_field_name(ordinal: &str, suffix: &str) -> String {
    format!("{}WasteType{}", ordinal, suffix)
}

// =============================================================================
// Length Limits
// =============================================================================

/// Maximum character counts for free-text fields
pub mod limits {
    pub const REFERENCE: usize = 20;
    pub const FREE_TEXT: usize = 250;
    pub const EMAIL: usize = 250;
    pub const REGISTRATION_NUMBER: usize = 50;
    pub const ENVIRONMENTAL_PERMIT_NUMBER: usize = 50;
    pub const CONTAINER_DESCRIPTION: usize = 250;
    pub const SPECIAL_HANDLING_REQUIREMENTS: usize = 500;
    pub const WASTE_DESCRIPTION: usize = 100;
    pub const CHEMICAL_COMPONENTS_TOTAL: usize = 5000;
    pub const CONCENTRATION_UNIT: usize = 50;
}

// =============================================================================
// Validation Patterns
// =============================================================================

/// Regular expressions applied to normalized field values
pub mod patterns {
    /// UK postcode, including the GIR 0AA special case
    pub const UK_POSTCODE: &str =
        r"^([A-Za-z][A-Ha-hJ-Yj-y]?[0-9][A-Za-z0-9]? ?[0-9][A-Za-z]{2}|[Gg][Ii][Rr] ?0[Aa]{2})$";

    /// UK landline or mobile number with optional +44/0044 prefix and extension
    pub const UK_PHONE: &str = r"^(?:(?:\(?(?:0(?:0|11)\)?[\s-]?\(?|\+)44\)?[\s-]?(?:\(?0\)?[\s-]?)?)|(?:\(?0))(?:(?:\d{5}\)?[\s-]?\d{4,5})|(?:\d{4}\)?[\s-]?(?:\d{5}|\d{3}[\s-]?\d{3}))|(?:\d{3}\)?[\s-]?\d{3}[\s-]?\d{3,4})|(?:\d{2}\)?[\s-]?\d{4}[\s-]?\d{4}))(?:[\s-]?(?:x|ext\.?|#)\d{3,4})?$";

    pub const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

    /// Five digit Standard Industrial Classification code
    pub const SIC_CODE: &str = r"^\d{5}$";

    /// Signed decimal number, optionally without a leading integer part
    pub const DECIMAL: &str = r"^-?\d*\.?\d+$";

    /// Six digit European Waste Catalogue code with optional hazardous marker
    pub const EWC_CODE: &str = r"^\d{6}\*?$";
}

/// Accepted layouts for the expected waste collection date
pub const COLLECTION_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

// =============================================================================
// Synonym Tables
// =============================================================================

/// Quantity unit spellings mapped to their canonical unit name
///
/// Keys are compared after lowercasing and collapsing whitespace.
pub const QUANTITY_UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tonne", "Tonne"),
    ("tonnes", "Tonne"),
    ("t", "Tonne"),
    ("cubic metre", "Cubic Metre"),
    ("cubic metres", "Cubic Metre"),
    ("cubic meter", "Cubic Metre"),
    ("cubic meters", "Cubic Metre"),
    ("m3", "Cubic Metre"),
    ("kilogram", "Kilogram"),
    ("kilograms", "Kilogram"),
    ("kilogramme", "Kilogram"),
    ("kilogrammes", "Kilogram"),
    ("kg", "Kilogram"),
    ("kgs", "Kilogram"),
    ("litre", "Litre"),
    ("litres", "Litre"),
    ("liter", "Litre"),
    ("liters", "Litre"),
    ("l", "Litre"),
];

// =============================================================================
// Reference Data Files
// =============================================================================

/// File names expected inside the reference data directory
pub mod reference_files {
    pub const EWC_CODES: &str = "ewc-codes.json";
    pub const HAZARDOUS_CODES: &str = "hazardous-codes.json";
    pub const POPS: &str = "pops.json";
    pub const LOCAL_AUTHORITIES: &str = "local-authorities.json";
    /// Optional; SIC codes are not consulted by the row pipeline
    pub const SIC_CODES: &str = "sic-codes.json";
}

/// Directory name under the platform data directory holding reference data
pub const REFERENCE_DIR_NAME: &str = "waste-bulk-validator";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Rows handed to one blocking task during concurrent validation
pub const DEFAULT_CHUNK_SIZE: usize = 250;

/// Batches smaller than this are validated on the calling thread
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;
