//! Delimited list fields of a waste type slot
//!
//! Concentration and unit lists pair element by element with the list they
//! describe. A count mismatch is reported as `WrongAmount` and the elements
//! are then left unchecked; only lists of the right length get `Invalid` or
//! `TooLong` for bad elements.

use crate::app::models::{FieldKey, Violation};
use crate::app::services::normalizers::{dedupe_by_key, parse_decimal, split_delimited};
use crate::app::services::reference_data::{ReferenceTables, code_key, name_key};
use crate::app::services::section_validators::SectionFields;
use crate::constants::{limits, suffixes};

/// How repeated elements of a list cell are recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dedupe {
    /// Every element is kept
    Keep,
    /// Elements naming the same reference code collapse to the first
    ByCode,
    /// Elements naming the same reference name collapse to the first
    ByName,
}

/// Split a list cell, dropping repeats the reference lookup would treat as equal
fn read_list(fields: &SectionFields<'_>, suffix: &str, dedupe: Dedupe) -> Vec<String> {
    let values = fields.get(suffix).map(split_delimited).unwrap_or_default();
    match dedupe {
        Dedupe::Keep => values,
        Dedupe::ByCode => dedupe_by_key(values, code_key),
        Dedupe::ByName => dedupe_by_key(values, name_key),
    }
}

/// Number of elements other lists must pair with
pub(crate) fn list_len(fields: &SectionFields<'_>, suffix: &str, dedupe: Dedupe) -> usize {
    read_list(fields, suffix, dedupe).len()
}

/// Mandatory chemical and biological component names
pub(crate) fn components(fields: &mut SectionFields<'_>) -> Option<Vec<String>> {
    let value = fields.required(suffixes::CHEMICAL_COMPONENTS, FieldKey::ChemicalComponents)?;
    if value.chars().count() > limits::CHEMICAL_COMPONENTS_TOTAL {
        fields.reject(
            FieldKey::ChemicalComponents,
            Violation::TooLong {
                max: limits::CHEMICAL_COMPONENTS_TOTAL,
            },
        );
        return None;
    }

    let names = split_delimited(value);
    if names.is_empty() {
        fields.reject(FieldKey::ChemicalComponents, Violation::Empty);
        return None;
    }
    Some(names)
}

/// Check a paired list has exactly `expected` elements
fn aligned_list(
    fields: &mut SectionFields<'_>,
    suffix: &str,
    field: FieldKey,
    expected: usize,
) -> Option<Vec<String>> {
    let values = read_list(fields, suffix, Dedupe::Keep);
    if values.len() == expected {
        return Some(values);
    }

    let violation = if values.is_empty() {
        Violation::Empty
    } else {
        Violation::WrongAmount
    };
    fields.reject(field, violation);
    None
}

/// Concentrations paired with a name list; each must be a decimal of at least zero
pub(crate) fn aligned_concentrations(
    fields: &mut SectionFields<'_>,
    suffix: &str,
    field: FieldKey,
    expected: usize,
) -> Option<Vec<f64>> {
    let values = aligned_list(fields, suffix, field, expected)?;
    let concentrations: Option<Vec<f64>> = values
        .iter()
        .map(|value| parse_decimal(value).filter(|concentration| *concentration >= 0.0))
        .collect();

    if concentrations.is_none() {
        fields.reject(field, Violation::Invalid);
    }
    concentrations
}

/// Concentration units paired with a name list, each length-capped
pub(crate) fn aligned_units(
    fields: &mut SectionFields<'_>,
    suffix: &str,
    field: FieldKey,
    expected: usize,
) -> Option<Vec<String>> {
    let units = aligned_list(fields, suffix, field, expected)?;
    if units
        .iter()
        .any(|unit| unit.chars().count() > limits::CONCENTRATION_UNIT)
    {
        fields.reject(
            field,
            Violation::TooLong {
                max: limits::CONCENTRATION_UNIT,
            },
        );
        return None;
    }
    Some(units)
}

/// Hazardous property codes, resolved to their reference spelling
///
/// A "yes" answer requires at least one code. Codes are checked against the
/// reference data whatever the answer.
pub(crate) fn hazardous_codes(
    fields: &mut SectionFields<'_>,
    has_hazardous_properties: Option<bool>,
    reference: &ReferenceTables,
) -> Option<Vec<String>> {
    let codes = read_list(fields, suffixes::HAZARDOUS_WASTE_CODES, Dedupe::ByCode);
    if codes.is_empty() {
        if has_hazardous_properties == Some(true) {
            fields.reject(FieldKey::HazardousCodes, Violation::Empty);
            return None;
        }
        return Some(codes);
    }

    let (matched, unmatched) = reference.resolve_hazardous_codes(&codes);
    if !unmatched.is_empty() {
        let unmatched = unmatched.into_iter().map(str::to_string).collect();
        fields.reject(FieldKey::HazardousCodes, Violation::InvalidValues(unmatched));
        return None;
    }
    Some(matched.into_iter().map(|entry| entry.code.clone()).collect())
}

/// Persistent organic pollutant names, resolved to their reference spelling
pub(crate) fn pops(
    fields: &mut SectionFields<'_>,
    contains_pops: Option<bool>,
    reference: &ReferenceTables,
) -> Option<Vec<String>> {
    let names = read_list(fields, suffixes::POPS, Dedupe::ByName);
    if names.is_empty() {
        if contains_pops == Some(true) {
            fields.reject(FieldKey::Pops, Violation::Empty);
            return None;
        }
        return Some(names);
    }

    let (matched, unmatched) = reference.resolve_pops(&names);
    if !unmatched.is_empty() {
        let unmatched = unmatched.into_iter().map(str::to_string).collect();
        fields.reject(FieldKey::Pops, Violation::InvalidValues(unmatched));
        return None;
    }
    Some(matched.into_iter().map(|entry| entry.name.en.clone()).collect())
}
