//! Carrier section validation

use super::fields::SectionFields;
use crate::app::models::{CarrierDetail, FieldFormatError, NormalizedRow, Section};
use crate::constants::prefixes;

/// Validate the carrier fields of a row
pub fn validate_carrier(row: &NormalizedRow) -> Result<CarrierDetail, Vec<FieldFormatError>> {
    let mut fields = SectionFields::new(row, prefixes::CARRIER, Section::Carrier);

    let contact = fields.contact();
    let address = fields.address();

    fields.finish(|| {
        Some(CarrierDetail {
            contact: contact?,
            address: address?,
        })
    })
}
