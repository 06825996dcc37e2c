//! Data models for bulk waste movement validation
//!
//! This module contains the flattened spreadsheet row, the strongly typed
//! submission sections produced from it, and the batch request/result shapes
//! exchanged with callers.

pub mod field_errors;
pub mod reference;

pub use field_errors::{
    ErrorCode, FieldFormatError, FieldKey, InvalidAttributeCombinationError, RowError, Section,
    Violation,
};
pub use reference::{LocalAuthority, LocalizedText, Pop, ReferenceData, SicCode, WasteCode};

use crate::Error;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Flattened Rows
// =============================================================================

/// One spreadsheet row: flattened field names mapped to optional cell text
///
/// Rows are read-only once parsed. Normalization produces a separate
/// [`NormalizedRow`] instead of rewriting cells in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FlatRow {
    fields: BTreeMap<String, Option<String>>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mainly for constructing rows in code
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Some(value.into()));
    }

    /// Remove a cell, returning the previous text if any
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).flatten()
    }

    /// Raw cell text, untrimmed
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|value| value.as_deref())
    }

    /// True when every cell is missing, null, or whitespace only
    pub fn is_blank(&self) -> bool {
        self.fields
            .values()
            .all(|value| value.as_deref().is_none_or(|text| text.trim().is_empty()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = FlatRow::new();
        for (name, value) in iter {
            row.set(name, value);
        }
        row
    }
}

/// A row after the normalize stage: trimmed, blanks removed, and
/// field-specific normalizers applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRow {
    fields: BTreeMap<String, String>,
}

impl NormalizedRow {
    pub(crate) fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Normalized, non-blank cell text
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Enumerated Values
// =============================================================================

/// UK nations accepted for addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Country {
    England,
    Wales,
    Scotland,
    #[serde(rename = "Northern Ireland")]
    NorthernIreland,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::England,
        Country::Wales,
        Country::Scotland,
        Country::NorthernIreland,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::England => "England",
            Country::Wales => "Wales",
            Country::Scotland => "Scotland",
            Country::NorthernIreland => "Northern Ireland",
        }
    }

    /// Match a title-cased value
    pub fn from_normalized(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|country| country.as_str() == value)
    }
}

/// Where collected waste originates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum WasteSource {
    Household,
    LocalAuthority,
    Construction,
    Demolition,
    Commercial,
    Industrial,
}

impl WasteSource {
    pub const ALL: [WasteSource; 6] = [
        WasteSource::Household,
        WasteSource::LocalAuthority,
        WasteSource::Construction,
        WasteSource::Demolition,
        WasteSource::Commercial,
        WasteSource::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteSource::Household => "Household",
            WasteSource::LocalAuthority => "LocalAuthority",
            WasteSource::Construction => "Construction",
            WasteSource::Demolition => "Demolition",
            WasteSource::Commercial => "Commercial",
            WasteSource::Industrial => "Industrial",
        }
    }

    /// Match a title-cased, space-free value
    pub fn from_normalized(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == value)
    }
}

/// Physical form of a waste type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PhysicalForm {
    Gas,
    Liquid,
    Solid,
    Sludge,
    Powder,
    Mixed,
}

impl PhysicalForm {
    pub const ALL: [PhysicalForm; 6] = [
        PhysicalForm::Gas,
        PhysicalForm::Liquid,
        PhysicalForm::Solid,
        PhysicalForm::Sludge,
        PhysicalForm::Powder,
        PhysicalForm::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicalForm::Gas => "Gas",
            PhysicalForm::Liquid => "Liquid",
            PhysicalForm::Solid => "Solid",
            PhysicalForm::Sludge => "Sludge",
            PhysicalForm::Powder => "Powder",
            PhysicalForm::Mixed => "Mixed",
        }
    }

    /// Match a title-cased value
    pub fn from_normalized(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|form| form.as_str() == value)
    }
}

/// Canonical unit of a waste quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuantityUnit {
    Tonne,
    #[serde(rename = "Cubic Metre")]
    CubicMetre,
    Kilogram,
    Litre,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 4] = [
        QuantityUnit::Tonne,
        QuantityUnit::CubicMetre,
        QuantityUnit::Kilogram,
        QuantityUnit::Litre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::Tonne => "Tonne",
            QuantityUnit::CubicMetre => "Cubic Metre",
            QuantityUnit::Kilogram => "Kilogram",
            QuantityUnit::Litre => "Litre",
        }
    }

    /// Match a canonical unit name exactly
    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == value)
    }
}

/// Whether a waste quantity is measured or estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuantityType {
    Actual,
    Estimate,
}

// =============================================================================
// Submission Sections
// =============================================================================

/// Postal address of a party or collection site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub town_city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    pub country: Country,
}

/// Organisation and contact person of a party
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub organisation_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerDetail {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sic_code: Option<String>,
    pub contact: Contact,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverDetail {
    pub authorization_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_permit_number: Option<String>,
    pub contact: Contact,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierDetail {
    pub contact: Contact,
    pub address: Address,
}

/// Expected collection date split into its components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectionDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteCollectionDetail {
    pub waste_source: WasteSource,
    pub local_authority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_waste_collection_date: Option<CollectionDate>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteTransportationDetail {
    pub number_and_type_of_containers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_handling_requirements: Option<String>,
}

/// A chemical or biological component with its concentration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalComponent {
    pub name: String,
    pub concentration: f64,
    pub concentration_unit: String,
}

/// A persistent organic pollutant with its concentration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopComponent {
    pub name: String,
    pub concentration: f64,
    pub concentration_unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteTypeDetail {
    pub ewc_code: String,
    pub waste_description: String,
    pub physical_form: PhysicalForm,
    pub waste_quantity: f64,
    pub quantity_unit: QuantityUnit,
    pub quantity_type: QuantityType,
    pub chemical_and_biological_components: Vec<ChemicalComponent>,
    pub has_hazardous_properties: bool,
    pub hazardous_waste_codes: Vec<String>,
    pub contains_pops: bool,
    pub pops: Vec<PopComponent>,
}

/// A fully validated row
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub producer: ProducerDetail,
    pub receiver: ReceiverDetail,
    pub carrier: CarrierDetail,
    pub waste_collection: WasteCollectionDetail,
    pub waste_transportation: WasteTransportationDetail,
    pub waste_types: Vec<WasteTypeDetail>,
}

// =============================================================================
// Batch Request and Result
// =============================================================================

/// A bulk validation request
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub account_id: String,
    /// Rows already consumed by headers or earlier pages
    #[serde(default)]
    pub pad_index: usize,
    pub values: Vec<FlatRow>,
}

/// Outcome of validating a whole batch
///
/// `Invalid` whenever at least one row failed; valid rows of an invalid batch
/// are not returned.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult {
    Valid {
        account_id: String,
        values: Vec<Submission>,
    },
    Invalid {
        account_id: String,
        values: Vec<RowError>,
    },
}

impl BatchResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, BatchResult::Valid { .. })
    }

    pub fn account_id(&self) -> &str {
        match self {
            BatchResult::Valid { account_id, .. } | BatchResult::Invalid { account_id, .. } => {
                account_id
            }
        }
    }

    pub fn submissions(&self) -> Option<&[Submission]> {
        match self {
            BatchResult::Valid { values, .. } => Some(values),
            BatchResult::Invalid { .. } => None,
        }
    }

    pub fn row_errors(&self) -> Option<&[RowError]> {
        match self {
            BatchResult::Invalid { values, .. } => Some(values),
            BatchResult::Valid { .. } => None,
        }
    }
}

impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchResult", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("accountId", self.account_id())?;
        match self {
            BatchResult::Valid { values, .. } => state.serialize_field("values", values)?,
            BatchResult::Invalid { values, .. } => state.serialize_field("values", values)?,
        }
        state.end()
    }
}

/// Transport-level failure description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub name: String,
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            status_code: error.status_code(),
            name: error.name().to_string(),
            message: error.to_string(),
        }
    }
}

/// Success/failure envelope around a batch result
///
/// A business-invalid batch is still a `Success`; `Failure` means the batch
/// could not be validated at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResponse {
    Success(BatchResult),
    Failure(ErrorBody),
}

impl ValidationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResponse::Success(_))
    }
}

impl From<crate::Result<BatchResult>> for ValidationResponse {
    fn from(result: crate::Result<BatchResult>) -> Self {
        match result {
            Ok(batch) => ValidationResponse::Success(batch),
            Err(error) => ValidationResponse::Failure(ErrorBody::from(&error)),
        }
    }
}

impl Serialize for ValidationResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResponse", 2)?;
        state.serialize_field("success", &self.is_success())?;
        match self {
            ValidationResponse::Success(batch) => state.serialize_field("value", batch)?,
            ValidationResponse::Failure(body) => state.serialize_field("error", body)?,
        }
        state.end()
    }
}
