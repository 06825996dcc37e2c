//! Reference dataset entry types
//!
//! These mirror the JSON served by the reference data service and are
//! deserialized directly from the files in the reference data directory.

use serde::{Deserialize, Serialize};

/// English and Welsh text pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub cy: String,
}

impl LocalizedText {
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            cy: String::new(),
        }
    }
}

/// EWC code or hazardous property code entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WasteCode {
    pub code: String,
    pub description: LocalizedText,
}

/// Persistent organic pollutant entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pop {
    pub name: LocalizedText,
}

/// Local authority entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalAuthority {
    pub name: String,
    pub country: String,
}

/// Standard Industrial Classification code entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SicCode {
    pub code: String,
    pub description: LocalizedText,
}

/// All reference datasets as fetched, before indexing
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub ewc_codes: Vec<WasteCode>,
    pub hazardous_codes: Vec<WasteCode>,
    pub pops: Vec<Pop>,
    pub local_authorities: Vec<LocalAuthority>,
    #[serde(default)]
    pub sic_codes: Vec<SicCode>,
}
