//! Reference lookups used by the validators
//!
//! All lookups are case-insensitive and return the canonical reference entry,
//! so callers can store the reference spelling instead of the user's input.

use super::{ReferenceTables, code_key, name_key};
use crate::app::models::{LocalAuthority, Pop, SicCode, WasteCode};

impl ReferenceTables {
    /// Find an EWC code, ignoring quotes, spaces, case and a hazardous `*`
    pub fn ewc_code(&self, code: &str) -> Option<&WasteCode> {
        self.ewc_codes.get(&code_key(code))
    }

    pub fn contains_ewc_code(&self, code: &str) -> bool {
        self.ewc_code(code).is_some()
    }

    /// Find a hazardous property code, e.g. `hp3` matches `HP3`
    pub fn hazardous_code(&self, code: &str) -> Option<&WasteCode> {
        self.hazardous_codes.get(&code_key(code))
    }

    /// Find a persistent organic pollutant by English name
    pub fn pop(&self, name: &str) -> Option<&Pop> {
        self.pops.get(&name_key(name))
    }

    /// Find a local authority by name
    pub fn local_authority(&self, name: &str) -> Option<&LocalAuthority> {
        self.local_authorities.get(&name_key(name))
    }

    /// Find a SIC code
    pub fn sic_code(&self, code: &str) -> Option<&SicCode> {
        self.sic_codes.get(&code_key(code))
    }

    /// Split codes into canonical matches and unmatched inputs, preserving order
    pub fn resolve_hazardous_codes<'a>(
        &'a self,
        codes: &'a [String],
    ) -> (Vec<&'a WasteCode>, Vec<&'a str>) {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for code in codes {
            match self.hazardous_code(code) {
                Some(entry) => matched.push(entry),
                None => unmatched.push(code.as_str()),
            }
        }
        (matched, unmatched)
    }

    /// Split POP names into canonical matches and unmatched inputs, preserving order
    pub fn resolve_pops<'a>(&'a self, names: &'a [String]) -> (Vec<&'a Pop>, Vec<&'a str>) {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for name in names {
            match self.pop(name) {
                Some(entry) => matched.push(entry),
                None => unmatched.push(name.as_str()),
            }
        }
        (matched, unmatched)
    }
}
