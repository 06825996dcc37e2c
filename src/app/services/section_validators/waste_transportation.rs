//! Waste transportation section validation

use super::fields::SectionFields;
use crate::app::models::{
    FieldFormatError, FieldKey, NormalizedRow, Section, WasteTransportationDetail,
};
use crate::constants::{limits, prefixes, suffixes};

pub fn validate_waste_transportation(
    row: &NormalizedRow,
) -> Result<WasteTransportationDetail, Vec<FieldFormatError>> {
    let mut fields = SectionFields::new(
        row,
        prefixes::WASTE_TRANSPORTATION,
        Section::WasteTransportation,
    );

    let number_and_type_of_containers = fields.required_text(
        suffixes::NUMBER_AND_TYPE_OF_CONTAINERS,
        FieldKey::NumberAndTypeOfContainers,
        limits::CONTAINER_DESCRIPTION,
    );
    let special_handling_requirements = fields.optional_text(
        suffixes::SPECIAL_HANDLING_REQUIREMENTS,
        FieldKey::SpecialHandlingRequirements,
        limits::SPECIAL_HANDLING_REQUIREMENTS,
    );

    fields.finish(|| {
        Some(WasteTransportationDetail {
            number_and_type_of_containers: number_and_type_of_containers?,
            special_handling_requirements,
        })
    })
}
