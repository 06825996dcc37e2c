//! Producer section validation

use super::fields::SectionFields;
use crate::app::models::{FieldFormatError, NormalizedRow, ProducerDetail, Section};
use crate::constants::prefixes;

/// Validate the producer fields of a row
pub fn validate_producer(row: &NormalizedRow) -> Result<ProducerDetail, Vec<FieldFormatError>> {
    let mut fields = SectionFields::new(row, prefixes::PRODUCER, Section::Producer);

    let reference = fields.reference();
    let contact = fields.contact();
    let address = fields.address();
    let sic_code = fields.sic_code();

    fields.finish(|| {
        Some(ProducerDetail {
            reference: reference?,
            sic_code,
            contact: contact?,
            address: address?,
        })
    })
}
