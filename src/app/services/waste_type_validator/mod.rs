//! Waste type validation across the ten repeated slots of a row
//!
//! Every slot has the same fields, prefixed by its ordinal (`first`..`tenth`).
//! The first slot is mandatory; later slots are only validated when their EWC
//! code is filled in, since a missing code marks the slot as unused. One slot
//! validator runs for each slot in use, with errors namespaced by slot number.

pub mod lists;
pub mod slot;

#[cfg(test)]
pub mod tests;

pub use slot::{SlotFields, validate_slot};

use crate::app::models::{FieldFormatError, NormalizedRow, WasteTypeDetail};
use crate::app::services::reference_data::ReferenceTables;

/// Validate all waste type slots in use, in slot order
pub fn validate_waste_types(
    row: &NormalizedRow,
    reference: &ReferenceTables,
) -> Result<Vec<WasteTypeDetail>, Vec<FieldFormatError>> {
    let mut waste_types = Vec::new();
    let mut errors = Vec::new();

    for slot in SlotFields::all() {
        if !slot.is_mandatory() && !slot.is_in_use(row) {
            continue;
        }
        match validate_slot(row, slot, reference) {
            Ok(detail) => waste_types.push(detail),
            Err(slot_errors) => errors.extend(slot_errors),
        }
    }

    if errors.is_empty() {
        Ok(waste_types)
    } else {
        Err(errors)
    }
}
