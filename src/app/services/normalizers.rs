//! Field normalizers for free-text spreadsheet input
//!
//! Pure helpers that turn loosely typed cell text into comparable values:
//! title-casing, whitespace handling, code clean-up, decimal parsing with
//! two-place rounding, delimited list splitting and synonym lookups. The
//! [`normalize_row`] stage applies them to a whole [`FlatRow`] and returns a
//! new [`NormalizedRow`], leaving the input untouched.

use crate::app::models::{FlatRow, NormalizedRow, QuantityType, QuantityUnit};
use crate::constants::{
    LIST_DELIMITER, QUANTITY_UNIT_SYNONYMS, SLOT_ORDINALS, field_name, patterns, prefixes,
    slot_field_name, suffixes,
};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::DECIMAL).expect("decimal pattern is valid"));

/// Field-specific normalization applied by [`normalize_row`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldNormalization {
    TitleCase,
    TitleCaseSpacesRemoved,
    CodeNoise,
}

// =============================================================================
// Text
// =============================================================================

/// Trim, lowercase, then capitalize the first letter of each word
pub fn title_case(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Title-case and remove all whitespace, e.g. "local authority" -> "LocalAuthority"
pub fn title_case_spaces_removed(value: &str) -> String {
    title_case(value)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Trim and replace internal whitespace runs with a single space
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove quotes, whitespace and a trailing hazardous asterisk from a code
pub fn strip_code_noise(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '\'' | '"') && !c.is_whitespace())
        .collect();
    cleaned.strip_suffix('*').unwrap_or(&cleaned).to_string()
}

// =============================================================================
// Numbers
// =============================================================================

/// Parse a decimal string and round it to two places
///
/// Returns `None` when the text does not match the decimal pattern or is too
/// large to hold as a finite `f64`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !DECIMAL_RE.is_match(trimmed) {
        return None;
    }
    let parsed: f64 = trimmed.parse().ok().filter(|v: &f64| v.is_finite())?;
    Some(round_to_two_decimals(parsed))
}

/// Round to two decimal places the way JavaScript's `Number(x.toFixed(2))` does
///
/// The exact binary value is rounded half away from zero, so `0.125` (exactly
/// representable) becomes `0.13` while `1.005` (stored just below the tie)
/// becomes `1.0`.
pub fn round_to_two_decimals(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= 1e21 {
        return value;
    }

    // 1100 places is enough to print any f64 exactly
    let exact = format!("{:.1100}", value.abs());
    let (integer_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let digits: Vec<u8> = fraction.bytes().take(3).map(|b| b - b'0').collect();
    let digit = |i: usize| digits.get(i).copied().unwrap_or(0) as u128;

    let integer: u128 = integer_part.parse().unwrap_or(0);
    let mut hundredths = integer * 100 + digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        hundredths += 1;
    }

    let text = format!("{}.{:02}", hundredths / 100, hundredths % 100);
    let rounded: f64 = text.parse().unwrap_or(value.abs());
    if value.is_sign_negative() && rounded != 0.0 {
        -rounded
    } else {
        rounded
    }
}

// =============================================================================
// Lists and Flags
// =============================================================================

/// Split a `;`-delimited cell, trimming elements and dropping empty ones
pub fn split_delimited(value: &str) -> Vec<String> {
    value
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep the first occurrence of each value, comparing values by `key`
pub fn dedupe_by_key(values: Vec<String>, key: impl Fn(&str) -> String) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(key(value)))
        .collect()
}

/// Interpret a single-character yes/no answer
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

impl QuantityUnit {
    /// Resolve a unit spelling through the synonym table
    pub fn from_synonym(value: &str) -> Option<Self> {
        let key = collapse_whitespace(value).to_lowercase();
        QUANTITY_UNIT_SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .and_then(|(_, canonical)| QuantityUnit::from_canonical(canonical))
    }
}

impl QuantityType {
    /// Interpret free text as "actual" or "estimate", ignoring case and spaces
    pub fn from_free_text(value: &str) -> Option<Self> {
        let key: String = value
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match key.as_str() {
            "actual" => Some(QuantityType::Actual),
            "estimate" => Some(QuantityType::Estimate),
            _ => None,
        }
    }
}

// =============================================================================
// Row Normalization
// =============================================================================

/// Fields that get more than trimming during normalization
fn field_normalizations() -> BTreeMap<String, FieldNormalization> {
    let mut map = BTreeMap::new();

    for prefix in [
        prefixes::PRODUCER,
        prefixes::RECEIVER,
        prefixes::CARRIER,
        prefixes::WASTE_COLLECTION,
    ] {
        map.insert(
            field_name(prefix, suffixes::COUNTRY),
            FieldNormalization::TitleCase,
        );
    }
    map.insert(
        field_name(prefixes::WASTE_COLLECTION, suffixes::WASTE_SOURCE),
        FieldNormalization::TitleCaseSpacesRemoved,
    );

    for ordinal in SLOT_ORDINALS {
        map.insert(
            slot_field_name(ordinal, suffixes::PHYSICAL_FORM),
            FieldNormalization::TitleCase,
        );
        map.insert(
            slot_field_name(ordinal, suffixes::EWC_CODE),
            FieldNormalization::CodeNoise,
        );
    }

    map
}

static FIELD_NORMALIZATIONS: LazyLock<BTreeMap<String, FieldNormalization>> =
    LazyLock::new(field_normalizations);

/// Produce a normalized copy of a row
///
/// Every value is trimmed and blank values are dropped; country, physical form
/// and waste source cells are title-cased, and EWC codes are stripped of
/// quoting noise. Applying this to an already normalized row changes nothing.
pub fn normalize_row(row: &FlatRow) -> NormalizedRow {
    let fields = row
        .iter()
        .filter_map(|(name, value)| {
            let trimmed = value?.trim();
            if trimmed.is_empty() {
                return None;
            }
            let normalized = match FIELD_NORMALIZATIONS.get(name) {
                Some(FieldNormalization::TitleCase) => title_case(trimmed),
                Some(FieldNormalization::TitleCaseSpacesRemoved) => {
                    title_case_spaces_removed(trimmed)
                }
                Some(FieldNormalization::CodeNoise) => strip_code_noise(trimmed),
                None => trimmed.to_string(),
            };
            if normalized.is_empty() {
                None
            } else {
                Some((name.to_string(), normalized))
            }
        })
        .collect();

    NormalizedRow::from_fields(fields)
}

impl FlatRow {
    /// Normalized copy of this row, see [`normalize_row`]
    pub fn normalized(&self) -> NormalizedRow {
        normalize_row(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("  northern   IRELAND "), "Northern Ireland");
        assert_eq!(title_case("solid"), "Solid");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_is_idempotent() {
        for input in ["england", "NORTHERN ireland", "sLuDgE", "  wales  "] {
            let once = title_case(input);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn test_title_case_spaces_removed() {
        assert_eq!(title_case_spaces_removed("local authority"), "LocalAuthority");
        assert_eq!(title_case_spaces_removed("HOUSEHOLD"), "Household");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  cubic \t metres "), "cubic metres");
    }

    #[test]
    fn test_strip_code_noise() {
        assert_eq!(strip_code_noise("'01 01 01*'"), "010101");
        assert_eq!(strip_code_noise("\"200121*\""), "200121");
        assert_eq!(strip_code_noise("170504"), "170504");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("100"), Some(100.0));
        assert_eq!(parse_decimal(" .5 "), Some(0.5));
        assert_eq!(parse_decimal("-2.456"), Some(-2.46));
        assert_eq!(parse_decimal("1,000"), None);
        assert_eq!(parse_decimal("12kg"), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_parse_decimal_rejects_overflow() {
        assert_eq!(parse_decimal(&"9".repeat(400)), None);
        assert_eq!(parse_decimal(&format!("-{}.5", "9".repeat(400))), None);
        assert!(parse_decimal(&"9".repeat(300)).is_some());
    }

    /// Golden values for JavaScript `toFixed(2)` rounding
    #[test]
    fn test_round_to_two_decimals_golden() {
        let cases = [
            (0.125, 0.13),
            (0.135, 0.14),
            (1.005, 1.0),
            (2.675, 2.67),
            (1.255, 1.25),
            (0.1, 0.1),
            (99.999, 100.0),
            (0.004, 0.0),
            (0.005, 0.01),
            (-0.125, -0.13),
            (123456.789, 123456.79),
        ];
        for (input, expected) in cases {
            assert_eq!(
                round_to_two_decimals(input),
                expected,
                "rounding {}",
                input
            );
        }
    }

    #[test]
    fn test_round_to_two_decimals_large_values_unchanged() {
        assert_eq!(round_to_two_decimals(1e21), 1e21);
        assert!(round_to_two_decimals(f64::NAN).is_nan());
    }

    #[test]
    fn test_split_delimited() {
        assert_eq!(
            split_delimited(" lead ; ;mercury;  arsenic ;"),
            vec!["lead", "mercury", "arsenic"]
        );
        assert!(split_delimited(" ; ").is_empty());
    }

    #[test]
    fn test_dedupe_by_key() {
        let values = vec!["HP1".to_string(), "hp1".to_string(), "HP3".to_string()];
        assert_eq!(dedupe_by_key(values, |v| v.to_lowercase()), vec!["HP1", "HP3"]);

        let values = vec!["HP 1".to_string(), "'hp1'".to_string()];
        assert_eq!(
            dedupe_by_key(values, |v| strip_code_noise(v).to_lowercase()),
            vec!["HP 1"]
        );
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" n "), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_quantity_unit_synonyms() {
        assert_eq!(QuantityUnit::from_synonym("Tonnes"), Some(QuantityUnit::Tonne));
        assert_eq!(QuantityUnit::from_synonym("LITRES"), Some(QuantityUnit::Litre));
        assert_eq!(
            QuantityUnit::from_synonym("Cubic   Metres"),
            Some(QuantityUnit::CubicMetre)
        );
        assert_eq!(QuantityUnit::from_synonym("Kilogram"), Some(QuantityUnit::Kilogram));
        assert_eq!(QuantityUnit::from_synonym("barrels"), None);
    }

    #[test]
    fn test_quantity_type_from_free_text() {
        assert_eq!(QuantityType::from_free_text("Estimate"), Some(QuantityType::Estimate));
        assert_eq!(QuantityType::from_free_text(" AC tual "), Some(QuantityType::Actual));
        assert_eq!(QuantityType::from_free_text("estimated"), None);
    }

    #[test]
    fn test_normalize_row() {
        let row = FlatRow::new()
            .with("producerCountry", " northern ireland ")
            .with("wasteCollectionWasteSource", "local authority")
            .with("firstWasteTypePhysicalForm", "SOLID")
            .with("firstWasteTypeEwcCode", "'01 01 01*'")
            .with("producerOrganisationName", "  Acme Ltd  ")
            .with("producerAddressLine2", "   ");

        let normalized = normalize_row(&row);

        assert_eq!(normalized.get("producerCountry"), Some("Northern Ireland"));
        assert_eq!(
            normalized.get("wasteCollectionWasteSource"),
            Some("LocalAuthority")
        );
        assert_eq!(normalized.get("firstWasteTypePhysicalForm"), Some("Solid"));
        assert_eq!(normalized.get("firstWasteTypeEwcCode"), Some("010101"));
        assert_eq!(normalized.get("producerOrganisationName"), Some("Acme Ltd"));
        assert!(!normalized.contains("producerAddressLine2"));

        // input row is untouched
        assert_eq!(row.get("producerCountry"), Some(" northern ireland "));
    }

    #[test]
    fn test_normalize_row_is_idempotent() {
        let row = FlatRow::new()
            .with("carrierCountry", "scotland")
            .with("tenthWasteTypeEwcCode", "20 01 21*");
        let once = normalize_row(&row);

        let again: FlatRow = [
            ("carrierCountry", once.get("carrierCountry").unwrap()),
            ("tenthWasteTypeEwcCode", once.get("tenthWasteTypeEwcCode").unwrap()),
        ]
        .into_iter()
        .collect();

        assert_eq!(normalize_row(&again), once);
    }
}
