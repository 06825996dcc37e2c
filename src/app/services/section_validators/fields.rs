//! Shared field rules for section and slot validators
//!
//! [`SectionFields`] reads the fields of one section from a normalized row and
//! records a [`FieldFormatError`] for every rule that fails. Checks never stop
//! early, so a single pass reports every problem in the section.

use crate::app::models::{
    Address, Contact, Country, FieldFormatError, FieldKey, NormalizedRow, Section, Violation,
};
use crate::constants::{field_name, limits, patterns, suffixes};
use regex::Regex;
use std::sync::LazyLock;

static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::UK_POSTCODE).expect("postcode pattern is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::UK_PHONE).expect("phone pattern is valid"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::EMAIL).expect("email pattern is valid"));
static SIC_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::SIC_CODE).expect("SIC code pattern is valid"));

/// Field reader and error collector for one section of a row
#[derive(Debug)]
pub struct SectionFields<'a> {
    row: &'a NormalizedRow,
    prefix: String,
    section: Section,
    errors: Vec<FieldFormatError>,
}

impl<'a> SectionFields<'a> {
    /// `prefix` is prepended to every suffix to form the flattened field name
    pub fn new(row: &'a NormalizedRow, prefix: impl Into<String>, section: Section) -> Self {
        Self {
            row,
            prefix: prefix.into(),
            section,
            errors: Vec::new(),
        }
    }

    /// Normalized value of a field, `None` when blank
    pub fn get(&self, suffix: &str) -> Option<&'a str> {
        self.row.get(&field_name(&self.prefix, suffix))
    }

    pub fn has(&self, suffix: &str) -> bool {
        self.get(suffix).is_some()
    }

    /// Record a failed rule
    pub fn reject(&mut self, field: FieldKey, violation: Violation) {
        self.errors
            .push(FieldFormatError::new(self.section, field, violation));
    }

    /// Value of a mandatory field, recording `Empty` when blank
    pub fn required(&mut self, suffix: &str, field: FieldKey) -> Option<&'a str> {
        let value = self.get(suffix);
        if value.is_none() {
            self.reject(field, Violation::Empty);
        }
        value
    }

    /// Check a value's length, recording `TooLong` when over `max` characters
    pub fn within_limit(&mut self, value: &str, field: FieldKey, max: usize) -> Option<String> {
        if value.chars().count() > max {
            self.reject(field, Violation::TooLong { max });
            return None;
        }
        Some(value.to_string())
    }

    /// Mandatory free text with a length cap
    pub fn required_text(&mut self, suffix: &str, field: FieldKey, max: usize) -> Option<String> {
        let value = self.required(suffix, field)?;
        self.within_limit(value, field, max)
    }

    /// Optional free text with a length cap
    pub fn optional_text(&mut self, suffix: &str, field: FieldKey, max: usize) -> Option<String> {
        let value = self.get(suffix)?;
        self.within_limit(value, field, max)
    }

    /// Producer reference: mandatory, short and alphanumeric
    pub fn reference(&mut self) -> Option<String> {
        let value = self.required_text(suffixes::REFERENCE, FieldKey::Reference, limits::REFERENCE)?;
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            self.reject(FieldKey::Reference, Violation::Invalid);
            return None;
        }
        Some(value)
    }

    pub fn sic_code(&mut self) -> Option<String> {
        let value = self.get(suffixes::SIC_CODE)?;
        if !SIC_CODE_RE.is_match(value) {
            self.reject(FieldKey::SicCode, Violation::Invalid);
            return None;
        }
        Some(value.to_string())
    }

    /// Optional UK postcode
    pub fn postcode(&mut self) -> Option<String> {
        let value = self.get(suffixes::POSTCODE)?;
        if !POSTCODE_RE.is_match(value) {
            self.reject(FieldKey::Postcode, Violation::Invalid);
            return None;
        }
        Some(value.to_string())
    }

    /// Mandatory country, already title-cased by the normalize stage
    pub fn country(&mut self) -> Option<Country> {
        let value = self.required(suffixes::COUNTRY, FieldKey::Country)?;
        let country = Country::from_normalized(value);
        if country.is_none() {
            self.reject(FieldKey::Country, Violation::Invalid);
        }
        country
    }

    pub fn email(&mut self) -> Option<String> {
        let value = self.required_text(suffixes::CONTACT_EMAIL, FieldKey::ContactEmail, limits::EMAIL)?;
        if !EMAIL_RE.is_match(&value) {
            self.reject(FieldKey::ContactEmail, Violation::Invalid);
            return None;
        }
        Some(value)
    }

    /// Mandatory phone number; spreadsheet apostrophes are removed first
    pub fn phone(&mut self) -> Option<String> {
        let value = self.required(suffixes::CONTACT_PHONE, FieldKey::ContactPhone)?;
        let phone = value.replace('\'', "");
        if !PHONE_RE.is_match(phone.trim()) {
            self.reject(FieldKey::ContactPhone, Violation::Invalid);
            return None;
        }
        Some(phone.trim().to_string())
    }

    /// Organisation and contact person fields
    pub fn contact(&mut self) -> Option<Contact> {
        let organisation_name = self.required_text(
            suffixes::ORGANISATION_NAME,
            FieldKey::OrganisationName,
            limits::FREE_TEXT,
        );
        let name = self.required_text(
            suffixes::CONTACT_NAME,
            FieldKey::ContactName,
            limits::FREE_TEXT,
        );
        let email = self.email();
        let phone = self.phone();

        Some(Contact {
            organisation_name: organisation_name?,
            name: name?,
            email: email?,
            phone: phone?,
        })
    }

    /// Mandatory postal address fields
    ///
    /// Optional parts come back as `None` both when blank and when invalid;
    /// [`SectionFields::finish`] only builds a value once no rule has failed.
    pub fn address(&mut self) -> Option<Address> {
        let address_line1 = self.required_text(
            suffixes::ADDRESS_LINE_1,
            FieldKey::AddressLine1,
            limits::FREE_TEXT,
        );
        let address_line2 =
            self.optional_text(suffixes::ADDRESS_LINE_2, FieldKey::AddressLine2, limits::FREE_TEXT);
        let town_city =
            self.required_text(suffixes::TOWN_CITY, FieldKey::TownCity, limits::FREE_TEXT);
        let postcode = self.postcode();
        let country = self.country();

        Some(Address {
            address_line1: address_line1?,
            address_line2,
            town_city: town_city?,
            postcode,
            country: country?,
        })
    }

    /// Finish the section, returning the built value only if no rule failed
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Vec<FieldFormatError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}
