//! Waste Bulk Validator Library
//!
//! A Rust library for validating bulk, spreadsheet-style waste movement
//! submissions. Each flattened row becomes either a strongly typed
//! [`Submission`] or a [`RowError`] listing every field problem, tied to the
//! row's position in the original spreadsheet.
//!
//! This library provides tools for:
//! - Loading and indexing reference data (EWC codes, hazardous codes, POPs,
//!   local authorities, SIC codes) for O(1) lookups
//! - Normalizing free-text cells before validation without mutating input
//! - Validating producer, receiver, carrier, collection and transport sections
//! - Validating up to ten repeated waste type slots with parallel lists
//! - Assembling all-or-flag batch results, sequentially or concurrently

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch_validator;
        pub mod normalizers;
        pub mod reference_data;
        pub mod section_validators;
        pub mod waste_type_validator;

        #[cfg(test)]
        pub mod test_support;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{
    BatchRequest, BatchResult, FieldFormatError, FlatRow, RowError, Submission,
    ValidationResponse,
};
pub use app::services::batch_validator::{BatchValidator, ValidationStats};
pub use app::services::reference_data::ReferenceTables;
pub use config::Config;
pub use error::{Error, Result};
