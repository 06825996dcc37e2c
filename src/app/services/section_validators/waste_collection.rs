//! Waste collection section validation
//!
//! The collection address is optional as a whole: a row may leave every
//! address field blank, in which case the producer's address is used once the
//! row is otherwise valid. A partially filled address is rejected.

use super::fields::SectionFields;
use crate::app::models::{
    Address, CollectionDate, FieldFormatError, FieldKey, NormalizedRow, Section, Violation,
    WasteCollectionDetail, WasteSource,
};
use crate::app::services::reference_data::ReferenceTables;
use crate::constants::{COLLECTION_DATE_FORMATS, limits, prefixes, suffixes};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Day and month of one or two digits, four digit year
static DATE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}[/.\-]\d{1,2}[/.\-]\d{4}$").expect("date shape pattern is valid")
});

const ADDRESS_SUFFIXES: [&str; 5] = [
    suffixes::ADDRESS_LINE_1,
    suffixes::ADDRESS_LINE_2,
    suffixes::TOWN_CITY,
    suffixes::POSTCODE,
    suffixes::COUNTRY,
];

/// A valid waste collection section whose address may still be defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct WasteCollectionSection {
    pub waste_source: WasteSource,
    pub local_authority: String,
    pub broker_registration_number: Option<String>,
    pub carrier_registration_number: Option<String>,
    pub expected_waste_collection_date: Option<CollectionDate>,
    /// `None` when every address field was blank
    pub address: Option<Address>,
}

impl WasteCollectionSection {
    /// Complete the section, falling back to `default_address` when no
    /// collection address was given
    pub fn with_default_address(self, default_address: &Address) -> WasteCollectionDetail {
        WasteCollectionDetail {
            waste_source: self.waste_source,
            local_authority: self.local_authority,
            broker_registration_number: self.broker_registration_number,
            carrier_registration_number: self.carrier_registration_number,
            expected_waste_collection_date: self.expected_waste_collection_date,
            address: self.address.unwrap_or_else(|| default_address.clone()),
        }
    }
}

/// Validate the waste collection fields of a row
pub fn validate_waste_collection(
    row: &NormalizedRow,
    reference: &ReferenceTables,
) -> Result<WasteCollectionSection, Vec<FieldFormatError>> {
    let mut fields = SectionFields::new(row, prefixes::WASTE_COLLECTION, Section::WasteCollection);

    let address = collection_address(&mut fields);
    let local_authority = local_authority(&mut fields, reference);
    let waste_source = waste_source(&mut fields);
    let broker_registration_number = fields.optional_text(
        suffixes::BROKER_REGISTRATION_NUMBER,
        FieldKey::BrokerRegistrationNumber,
        limits::REGISTRATION_NUMBER,
    );
    let carrier_registration_number = fields.optional_text(
        suffixes::CARRIER_REGISTRATION_NUMBER,
        FieldKey::CarrierRegistrationNumber,
        limits::REGISTRATION_NUMBER,
    );
    let expected_waste_collection_date = collection_date(&mut fields);

    fields.finish(|| {
        Some(WasteCollectionSection {
            waste_source: waste_source?,
            local_authority: local_authority?,
            broker_registration_number,
            carrier_registration_number,
            expected_waste_collection_date,
            address,
        })
    })
}

/// Validate the address as a group; blank everywhere means "not given"
fn collection_address(fields: &mut SectionFields<'_>) -> Option<Address> {
    if !ADDRESS_SUFFIXES.iter().any(|suffix| fields.has(suffix)) {
        return None;
    }

    let mut incomplete = false;
    for (suffix, key) in [
        (suffixes::ADDRESS_LINE_1, FieldKey::AddressLine1),
        (suffixes::TOWN_CITY, FieldKey::TownCity),
        (suffixes::COUNTRY, FieldKey::Country),
    ] {
        if !fields.has(suffix) {
            fields.reject(key, Violation::Incomplete);
            incomplete = true;
        }
    }
    if incomplete {
        check_present_address_parts(fields);
        return None;
    }

    fields.address()
}

/// Run the format rules on the address parts that were given
fn check_present_address_parts(fields: &mut SectionFields<'_>) {
    if let Some(value) = fields.get(suffixes::ADDRESS_LINE_1) {
        fields.within_limit(value, FieldKey::AddressLine1, limits::FREE_TEXT);
    }
    fields.optional_text(
        suffixes::ADDRESS_LINE_2,
        FieldKey::AddressLine2,
        limits::FREE_TEXT,
    );
    if let Some(value) = fields.get(suffixes::TOWN_CITY) {
        fields.within_limit(value, FieldKey::TownCity, limits::FREE_TEXT);
    }
    fields.postcode();
    if fields.has(suffixes::COUNTRY) {
        fields.country();
    }
}

/// Local authority must name a reference authority; the reference spelling is kept
fn local_authority(fields: &mut SectionFields<'_>, reference: &ReferenceTables) -> Option<String> {
    let value = fields.required(suffixes::LOCAL_AUTHORITY, FieldKey::LocalAuthority)?;
    match reference.local_authority(value) {
        Some(authority) => Some(authority.name.clone()),
        None => {
            fields.reject(FieldKey::LocalAuthority, Violation::Invalid);
            None
        }
    }
}

fn waste_source(fields: &mut SectionFields<'_>) -> Option<WasteSource> {
    let value = fields.required(suffixes::WASTE_SOURCE, FieldKey::WasteSource)?;
    let source = WasteSource::from_normalized(value);
    if source.is_none() {
        fields.reject(FieldKey::WasteSource, Violation::Invalid);
    }
    source
}

fn collection_date(fields: &mut SectionFields<'_>) -> Option<CollectionDate> {
    let value = fields.get(suffixes::EXPECTED_WASTE_COLLECTION_DATE)?;
    let date = parse_collection_date(value);
    if date.is_none() {
        fields.reject(FieldKey::ExpectedCollectionDate, Violation::Invalid);
    }
    date
}

/// Parse a day-first date such as `01/02/2025`, `1-2-2025` or `01.02.2025`
pub fn parse_collection_date(value: &str) -> Option<CollectionDate> {
    let value = value.trim();
    if !DATE_SHAPE_RE.is_match(value) {
        return None;
    }
    COLLECTION_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(|date| CollectionDate {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        })
}
