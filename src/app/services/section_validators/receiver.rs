//! Receiver section validation

use super::fields::SectionFields;
use crate::app::models::{FieldFormatError, FieldKey, NormalizedRow, ReceiverDetail, Section};
use crate::constants::{limits, prefixes, suffixes};

/// Validate the receiver fields of a row
///
/// Same contact and address rules as the carrier, plus the receiver's
/// authorisation details.
pub fn validate_receiver(row: &NormalizedRow) -> Result<ReceiverDetail, Vec<FieldFormatError>> {
    let mut fields = SectionFields::new(row, prefixes::RECEIVER, Section::Receiver);

    let authorization_type = fields.required_text(
        suffixes::AUTHORIZATION_TYPE,
        FieldKey::AuthorizationType,
        limits::FREE_TEXT,
    );
    let environmental_permit_number = fields.optional_text(
        suffixes::ENVIRONMENTAL_PERMIT_NUMBER,
        FieldKey::EnvironmentalPermitNumber,
        limits::ENVIRONMENTAL_PERMIT_NUMBER,
    );
    let contact = fields.contact();
    let address = fields.address();

    fields.finish(|| {
        Some(ReceiverDetail {
            authorization_type: authorization_type?,
            environmental_permit_number,
            contact: contact?,
            address: address?,
        })
    })
}
