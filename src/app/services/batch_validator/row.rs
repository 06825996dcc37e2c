//! Per-row orchestration
//!
//! A row is either skipped (every cell blank) or evaluated by all six
//! validation units. It is accepted only when every unit succeeds; otherwise
//! the errors of all failing units are reported together.

use crate::app::models::{FieldFormatError, FlatRow, NormalizedRow, RowError, Submission};
use crate::app::services::reference_data::ReferenceTables;
use crate::app::services::section_validators::{
    validate_carrier, validate_producer, validate_receiver, validate_waste_collection,
    validate_waste_transportation,
};
use crate::app::services::waste_type_validator::validate_waste_types;
use std::sync::Arc;
use tracing::debug;

/// What happened to one input row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Every cell was blank; the row appears in neither output list
    Skipped,
    Valid(Submission),
    Invalid(RowError),
}

/// One-based spreadsheet row number of the row at `position` in a batch
///
/// Saturates at `usize::MAX`; [`super::check_request`] rejects requests whose
/// indices would not fit.
pub fn row_index(pad_index: usize, position: usize) -> usize {
    pad_index.saturating_add(position).saturating_add(1)
}

/// Validates single rows against shared reference tables
#[derive(Debug, Clone)]
pub struct RowValidator {
    reference: Arc<ReferenceTables>,
}

impl RowValidator {
    pub fn new(reference: Arc<ReferenceTables>) -> Self {
        Self { reference }
    }

    /// Decide skip, accept or reject for the row at spreadsheet `index`
    pub fn evaluate(&self, index: usize, row: &FlatRow) -> RowOutcome {
        if row.is_blank() {
            debug!("Row {} is blank, skipping", index);
            return RowOutcome::Skipped;
        }

        match self.validate_row(&row.normalized()) {
            Ok(submission) => RowOutcome::Valid(submission),
            Err(errors) => {
                debug!("Row {} rejected with {} field errors", index, errors.len());
                RowOutcome::Invalid(RowError::new(index, errors))
            }
        }
    }

    /// Run every validation unit on a normalized row
    ///
    /// Errors are reported in a fixed section order: producer, receiver,
    /// carrier, waste collection, waste transportation, waste types.
    pub fn validate_row(&self, row: &NormalizedRow) -> Result<Submission, Vec<FieldFormatError>> {
        let producer = validate_producer(row);
        let receiver = validate_receiver(row);
        let carrier = validate_carrier(row);
        let waste_collection = validate_waste_collection(row, &self.reference);
        let waste_transportation = validate_waste_transportation(row);
        let waste_types = validate_waste_types(row, &self.reference);

        match (
            producer,
            receiver,
            carrier,
            waste_collection,
            waste_transportation,
            waste_types,
        ) {
            (
                Ok(producer),
                Ok(receiver),
                Ok(carrier),
                Ok(waste_collection),
                Ok(waste_transportation),
                Ok(waste_types),
            ) => {
                let waste_collection = waste_collection.with_default_address(&producer.address);
                Ok(Submission {
                    producer,
                    receiver,
                    carrier,
                    waste_collection,
                    waste_transportation,
                    waste_types,
                })
            }
            (producer, receiver, carrier, waste_collection, waste_transportation, waste_types) => {
                let mut errors = Vec::new();
                errors.extend(producer.err().unwrap_or_default());
                errors.extend(receiver.err().unwrap_or_default());
                errors.extend(carrier.err().unwrap_or_default());
                errors.extend(waste_collection.err().unwrap_or_default());
                errors.extend(waste_transportation.err().unwrap_or_default());
                errors.extend(waste_types.err().unwrap_or_default());
                Err(errors)
            }
        }
    }
}
