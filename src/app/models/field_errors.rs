//! Field-level validation errors and row error records
//!
//! A [`FieldFormatError`] pairs a human-readable field label with a stable
//! machine code. Codes are built from the section, the field and the violated
//! rule so that every rule in every section has its own discriminant, and waste
//! type slots carry their slot number in both the code and the message.

use crate::constants::SLOT_ORDINALS;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Sections and Fields
// =============================================================================

/// The part of a submission an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Producer,
    Receiver,
    Carrier,
    WasteCollection,
    WasteTransportation,
    /// One-based waste type slot number
    WasteType(u8),
}

impl Section {
    /// Label prefix used in field labels
    pub fn label(&self) -> &'static str {
        match self {
            Section::Producer => "Producer",
            Section::Receiver => "Receiver",
            Section::Carrier => "Carrier",
            Section::WasteCollection => "Waste collection",
            Section::WasteTransportation => "Waste transportation",
            Section::WasteType(_) => "Waste type",
        }
    }

    /// Machine code prefix, e.g. `WASTE_TYPE_3`
    pub fn code_prefix(&self) -> String {
        match self {
            Section::Producer => "PRODUCER".to_string(),
            Section::Receiver => "RECEIVER".to_string(),
            Section::Carrier => "CARRIER".to_string(),
            Section::WasteCollection => "WASTE_COLLECTION".to_string(),
            Section::WasteTransportation => "WASTE_TRANSPORTATION".to_string(),
            Section::WasteType(slot) => format!("WASTE_TYPE_{}", slot),
        }
    }

    /// Ordinal word for waste type slots ("second", "tenth", ...)
    pub fn slot_ordinal(&self) -> Option<&'static str> {
        match self {
            Section::WasteType(slot) => SLOT_ORDINALS.get((*slot as usize).checked_sub(1)?).copied(),
            _ => None,
        }
    }
}

/// The field an error refers to, independent of its section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Reference,
    SicCode,
    OrganisationName,
    AddressLine1,
    AddressLine2,
    TownCity,
    Postcode,
    Country,
    ContactName,
    ContactEmail,
    ContactPhone,
    AuthorizationType,
    EnvironmentalPermitNumber,
    LocalAuthority,
    WasteSource,
    BrokerRegistrationNumber,
    CarrierRegistrationNumber,
    ExpectedCollectionDate,
    NumberAndTypeOfContainers,
    SpecialHandlingRequirements,
    EwcCode,
    WasteDescription,
    PhysicalForm,
    WasteQuantity,
    QuantityUnit,
    QuantityType,
    ChemicalComponents,
    ChemicalConcentrations,
    ChemicalConcentrationUnits,
    HasHazardousProperties,
    HazardousCodes,
    ContainsPops,
    Pops,
    PopConcentrations,
    PopConcentrationUnits,
}

impl FieldKey {
    /// Human-readable field description, shared by every section using it
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Reference => "reference",
            FieldKey::SicCode => "SIC code",
            FieldKey::OrganisationName => "organisation name",
            FieldKey::AddressLine1 => "address line 1",
            FieldKey::AddressLine2 => "address line 2",
            FieldKey::TownCity => "town or city",
            FieldKey::Postcode => "postcode",
            FieldKey::Country => "country",
            FieldKey::ContactName => "contact name",
            FieldKey::ContactEmail => "email address",
            FieldKey::ContactPhone => "phone number",
            FieldKey::AuthorizationType => "authorisation type",
            FieldKey::EnvironmentalPermitNumber => "environmental permit number",
            FieldKey::LocalAuthority => "local authority",
            FieldKey::WasteSource => "waste source",
            FieldKey::BrokerRegistrationNumber => "broker registration number",
            FieldKey::CarrierRegistrationNumber => "carrier registration number",
            FieldKey::ExpectedCollectionDate => "expected waste collection date",
            FieldKey::NumberAndTypeOfContainers => "number and type of containers",
            FieldKey::SpecialHandlingRequirements => "special handling requirements",
            FieldKey::EwcCode => "EWC code",
            FieldKey::WasteDescription => "waste description",
            FieldKey::PhysicalForm => "physical form",
            FieldKey::WasteQuantity => "waste quantity",
            FieldKey::QuantityUnit => "waste quantity unit",
            FieldKey::QuantityType => "quantity type",
            FieldKey::ChemicalComponents => "chemical and biological components",
            FieldKey::ChemicalConcentrations => "chemical and biological concentrations",
            FieldKey::ChemicalConcentrationUnits => "chemical and biological concentration units",
            FieldKey::HasHazardousProperties => "hazardous properties answer",
            FieldKey::HazardousCodes => "hazardous waste codes",
            FieldKey::ContainsPops => "persistent organic pollutants answer",
            FieldKey::Pops => "persistent organic pollutants",
            FieldKey::PopConcentrations => "persistent organic pollutant concentrations",
            FieldKey::PopConcentrationUnits => "persistent organic pollutant concentration units",
        }
    }

    /// Machine code fragment, e.g. `ORGANISATION_NAME`
    pub fn code_fragment(&self) -> &'static str {
        match self {
            FieldKey::Reference => "REFERENCE",
            FieldKey::SicCode => "SIC_CODE",
            FieldKey::OrganisationName => "ORGANISATION_NAME",
            FieldKey::AddressLine1 => "ADDRESS_LINE_1",
            FieldKey::AddressLine2 => "ADDRESS_LINE_2",
            FieldKey::TownCity => "TOWN_CITY",
            FieldKey::Postcode => "POSTCODE",
            FieldKey::Country => "COUNTRY",
            FieldKey::ContactName => "CONTACT_NAME",
            FieldKey::ContactEmail => "CONTACT_EMAIL",
            FieldKey::ContactPhone => "CONTACT_PHONE",
            FieldKey::AuthorizationType => "AUTHORIZATION_TYPE",
            FieldKey::EnvironmentalPermitNumber => "ENVIRONMENTAL_PERMIT_NUMBER",
            FieldKey::LocalAuthority => "LOCAL_AUTHORITY",
            FieldKey::WasteSource => "WASTE_SOURCE",
            FieldKey::BrokerRegistrationNumber => "BROKER_REGISTRATION_NUMBER",
            FieldKey::CarrierRegistrationNumber => "CARRIER_REGISTRATION_NUMBER",
            FieldKey::ExpectedCollectionDate => "EXPECTED_COLLECTION_DATE",
            FieldKey::NumberAndTypeOfContainers => "NUMBER_AND_TYPE_OF_CONTAINERS",
            FieldKey::SpecialHandlingRequirements => "SPECIAL_HANDLING_REQUIREMENTS",
            FieldKey::EwcCode => "EWC_CODE",
            FieldKey::WasteDescription => "WASTE_DESCRIPTION",
            FieldKey::PhysicalForm => "PHYSICAL_FORM",
            FieldKey::WasteQuantity => "WASTE_QUANTITY",
            FieldKey::QuantityUnit => "QUANTITY_UNIT",
            FieldKey::QuantityType => "QUANTITY_TYPE",
            FieldKey::ChemicalComponents => "CHEMICAL_COMPONENTS",
            FieldKey::ChemicalConcentrations => "CHEMICAL_CONCENTRATIONS",
            FieldKey::ChemicalConcentrationUnits => "CHEMICAL_CONCENTRATION_UNITS",
            FieldKey::HasHazardousProperties => "HAS_HAZARDOUS_PROPERTIES",
            FieldKey::HazardousCodes => "HAZARDOUS_CODES",
            FieldKey::ContainsPops => "CONTAINS_POPS",
            FieldKey::Pops => "POPS",
            FieldKey::PopConcentrations => "POP_CONCENTRATIONS",
            FieldKey::PopConcentrationUnits => "POP_CONCENTRATION_UNITS",
        }
    }

    /// The list a parallel list must line up with
    fn aligned_with(&self) -> Option<FieldKey> {
        match self {
            FieldKey::ChemicalConcentrations | FieldKey::ChemicalConcentrationUnits => {
                Some(FieldKey::ChemicalComponents)
            }
            FieldKey::PopConcentrations | FieldKey::PopConcentrationUnits => Some(FieldKey::Pops),
            _ => None,
        }
    }
}

// =============================================================================
// Violations and Codes
// =============================================================================

/// The rule a field failed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Mandatory value missing
    Empty,
    /// Value longer than the allowed number of characters
    TooLong { max: usize },
    /// Value has the wrong format or is not an allowed option
    Invalid,
    /// Part of a group of fields that must be given together
    Incomplete,
    /// Delimited list has a different element count from the list it pairs with
    WrongAmount,
    /// Numeric value is zero or negative
    NotGreaterThanZero,
    /// Listed values that do not match the reference data
    InvalidValues(Vec<String>),
}

impl Violation {
    pub fn code_fragment(&self) -> &'static str {
        match self {
            Violation::Empty => "EMPTY",
            Violation::TooLong { .. } => "TOO_LONG",
            Violation::Invalid => "INVALID",
            Violation::Incomplete => "INCOMPLETE",
            Violation::WrongAmount => "WRONG_AMOUNT",
            Violation::NotGreaterThanZero => "NOT_GREATER_THAN_ZERO",
            Violation::InvalidValues(_) => "INVALID_VALUES",
        }
    }
}

/// Machine-stable error code: one discriminant per rule per field per section
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub section: Section,
    pub field: FieldKey,
    pub violation: Violation,
}

impl ErrorCode {
    pub fn new(section: Section, field: FieldKey, violation: Violation) -> Self {
        Self {
            section,
            field,
            violation,
        }
    }

    /// Offending values carried by a parameterised code
    pub fn values(&self) -> Option<&[String]> {
        match &self.violation {
            Violation::InvalidValues(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.section.code_prefix(),
            self.field.code_fragment(),
            self.violation.code_fragment()
        )
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Field Format Error
// =============================================================================

/// A single field failing a syntactic or membership rule
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFormatError {
    /// Human-readable field label, e.g. "Producer organisation name"
    pub field: String,
    pub code: ErrorCode,
}

impl FieldFormatError {
    pub fn new(section: Section, field: FieldKey, violation: Violation) -> Self {
        Self {
            field: format!("{} {}", section.label(), field.label()),
            code: ErrorCode::new(section, field, violation),
        }
    }

    /// User-facing message for this error
    ///
    /// Waste type messages name their slot so that errors for different slots
    /// read differently while sharing the same field label.
    pub fn message(&self) -> String {
        let section = self.code.section;
        let subject = match section {
            Section::WasteType(_) => self.code.field.label().to_string(),
            _ => format!(
                "{} {}",
                section.label().to_lowercase(),
                self.code.field.label()
            ),
        };
        let slot_suffix = section
            .slot_ordinal()
            .map(|ordinal| format!(" for the {} waste type", ordinal))
            .unwrap_or_default();

        match &self.code.violation {
            Violation::Empty => format!("Enter the {}{}", subject, slot_suffix),
            Violation::TooLong { max } => format!(
                "The {}{} must be {} characters or less",
                subject, slot_suffix, max
            ),
            Violation::Invalid => format!("Enter a valid {}{}", subject, slot_suffix),
            Violation::Incomplete => format!(
                "Enter the {}{} or leave the whole address blank",
                subject, slot_suffix
            ),
            Violation::WrongAmount => {
                let aligned = self
                    .code
                    .field
                    .aligned_with()
                    .map(|key| key.label())
                    .unwrap_or("listed items");
                format!(
                    "The number of {}{} must match the number of {}",
                    subject, slot_suffix, aligned
                )
            }
            Violation::NotGreaterThanZero => {
                format!("The {}{} must be greater than 0", subject, slot_suffix)
            }
            Violation::InvalidValues(values) => format!(
                "The {}{} contain values that are not recognised: {}",
                subject,
                slot_suffix,
                values.join(", ")
            ),
        }
    }
}

impl fmt::Display for FieldFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message(), self.code)
    }
}

impl Serialize for FieldFormatError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values = self.code.values();
        let field_count = if values.is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("FieldFormatError", field_count)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message())?;
        if let Some(values) = values {
            state.serialize_field("values", values)?;
        }
        state.end()
    }
}

/// Cross-field structural error, reserved for future rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidAttributeCombinationError {
    pub fields: Vec<String>,
    pub message: String,
}

// =============================================================================
// Row Error
// =============================================================================

/// All errors for one rejected row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    /// One-based position of the row in the original spreadsheet
    pub index: usize,
    pub field_format_errors: Vec<FieldFormatError>,
    pub invalid_structure_errors: Vec<InvalidAttributeCombinationError>,
}

impl RowError {
    pub fn new(index: usize, field_format_errors: Vec<FieldFormatError>) -> Self {
        Self {
            index,
            field_format_errors,
            invalid_structure_errors: Vec::new(),
        }
    }

    /// Check whether the row carries a particular error code
    pub fn has_code(&self, code: &str) -> bool {
        self.field_format_errors
            .iter()
            .any(|error| error.code.to_string() == code)
    }
}
