//! Reference data tables for O(1) code and name lookups
//!
//! This module indexes the EWC codes, hazardous property codes, persistent
//! organic pollutants, local authorities and SIC codes used while validating
//! rows. Tables are built once per batch context and are read-only afterwards,
//! so they can be shared across worker tasks behind an `Arc` without locking.

use crate::app::models::{LocalAuthority, Pop, ReferenceData, SicCode, WasteCode};
use crate::app::services::normalizers::{collapse_whitespace, strip_code_noise};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

pub use metadata::{LoadStats, ReferenceSummary};

/// Indexed, immutable reference datasets
///
/// Every table is keyed by a normalized form of its code or English name:
/// codes lose quoting and the hazardous asterisk and are lowercased, names are
/// whitespace-collapsed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub(crate) ewc_codes: HashMap<String, WasteCode>,
    pub(crate) hazardous_codes: HashMap<String, WasteCode>,
    pub(crate) pops: HashMap<String, Pop>,
    pub(crate) local_authorities: HashMap<String, LocalAuthority>,
    pub(crate) sic_codes: HashMap<String, SicCode>,

    /// Entries dropped because their key was already present
    pub(crate) duplicates_skipped: usize,
}

impl ReferenceTables {
    /// Index already-fetched reference data
    pub fn new(data: ReferenceData) -> Self {
        let mut tables = Self::default();

        for code in data.ewc_codes {
            let key = code_key(&code.code);
            tables.duplicates_skipped += insert_unique(&mut tables.ewc_codes, key, code, "EWC");
        }
        for code in data.hazardous_codes {
            let key = code_key(&code.code);
            tables.duplicates_skipped +=
                insert_unique(&mut tables.hazardous_codes, key, code, "hazardous");
        }
        for pop in data.pops {
            let key = name_key(&pop.name.en);
            tables.duplicates_skipped += insert_unique(&mut tables.pops, key, pop, "POP");
        }
        for authority in data.local_authorities {
            let key = name_key(&authority.name);
            tables.duplicates_skipped +=
                insert_unique(&mut tables.local_authorities, key, authority, "local authority");
        }
        for sic in data.sic_codes {
            let key = code_key(&sic.code);
            tables.duplicates_skipped += insert_unique(&mut tables.sic_codes, key, sic, "SIC");
        }

        debug!(
            "Indexed reference data: {} EWC, {} hazardous, {} POPs, {} local authorities, {} SIC",
            tables.ewc_codes.len(),
            tables.hazardous_codes.len(),
            tables.pops.len(),
            tables.local_authorities.len(),
            tables.sic_codes.len()
        );

        tables
    }

    /// Sizes of every table
    pub fn summary(&self) -> ReferenceSummary {
        ReferenceSummary {
            ewc_codes: self.ewc_codes.len(),
            hazardous_codes: self.hazardous_codes.len(),
            pops: self.pops.len(),
            local_authorities: self.local_authorities.len(),
            sic_codes: self.sic_codes.len(),
            duplicates_skipped: self.duplicates_skipped,
        }
    }
}

/// Lookup key for codes: no quotes, spaces or hazardous marker, lowercase
pub(crate) fn code_key(code: &str) -> String {
    strip_code_noise(code).to_lowercase()
}

/// Lookup key for names: collapsed whitespace, lowercase
pub(crate) fn name_key(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}

/// Insert keeping the first entry; returns 1 when a duplicate was skipped
fn insert_unique<T>(table: &mut HashMap<String, T>, key: String, value: T, kind: &str) -> usize {
    match table.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(value);
            0
        }
        Entry::Occupied(entry) => {
            warn!(
                "Duplicate {} reference entry '{}', keeping existing",
                kind,
                entry.key()
            );
            1
        }
    }
}
