//! Waste type slot binding and single-slot validation

use super::lists::{self, Dedupe};
use crate::app::models::{
    ChemicalComponent, FieldFormatError, FieldKey, NormalizedRow, PhysicalForm, PopComponent,
    QuantityType, QuantityUnit, Section, Violation, WasteTypeDetail,
};
use crate::app::services::normalizers::{parse_decimal, parse_yes_no};
use crate::app::services::reference_data::ReferenceTables;
use crate::app::services::section_validators::SectionFields;
use crate::constants::{MAX_WASTE_TYPE_SLOTS, SLOT_ORDINALS, limits, patterns, slot_field_name, suffixes};
use regex::Regex;
use std::sync::LazyLock;

static EWC_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::EWC_CODE).expect("EWC code pattern is valid"));

/// One waste type slot: its number and the ordinal prefixing its field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotFields {
    slot: u8,
    ordinal: &'static str,
}

impl SlotFields {
    /// Slot by one-based number, `None` outside 1..=10
    pub fn new(slot: u8) -> Option<Self> {
        let ordinal = SLOT_ORDINALS.get((slot as usize).checked_sub(1)?)?;
        Some(Self { slot, ordinal })
    }

    /// Every slot in order, first to tenth
    pub fn all() -> impl Iterator<Item = SlotFields> {
        (1..=MAX_WASTE_TYPE_SLOTS as u8).filter_map(SlotFields::new)
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn ordinal(&self) -> &'static str {
        self.ordinal
    }

    /// Error namespace for this slot
    pub fn section(&self) -> Section {
        Section::WasteType(self.slot)
    }

    /// Flattened field name, e.g. `secondWasteTypePhysicalForm`
    pub fn field_name(&self, suffix: &str) -> String {
        slot_field_name(self.ordinal, suffix)
    }

    /// Only the first slot must always be filled in
    pub fn is_mandatory(&self) -> bool {
        self.slot == 1
    }

    /// A slot is in use when its EWC code is given
    pub fn is_in_use(&self, row: &NormalizedRow) -> bool {
        row.contains(&self.field_name(suffixes::EWC_CODE))
    }

    /// Field reader whose errors carry this slot's namespace
    pub fn reader<'a>(&self, row: &'a NormalizedRow) -> SectionFields<'a> {
        SectionFields::new(row, self.field_name(""), self.section())
    }
}

/// Validate every field of one slot
pub fn validate_slot(
    row: &NormalizedRow,
    slot: SlotFields,
    reference: &ReferenceTables,
) -> Result<WasteTypeDetail, Vec<FieldFormatError>> {
    let mut fields = slot.reader(row);

    let ewc_code = ewc_code(&mut fields, reference);
    let waste_description = fields.required_text(
        suffixes::WASTE_DESCRIPTION,
        FieldKey::WasteDescription,
        limits::WASTE_DESCRIPTION,
    );
    let physical_form = physical_form(&mut fields);
    let waste_quantity = waste_quantity(&mut fields);
    let quantity_unit = quantity_unit(&mut fields);
    let quantity_type = quantity_type(&mut fields);

    let component_names = lists::components(&mut fields);
    let component_count = lists::list_len(&fields, suffixes::CHEMICAL_COMPONENTS, Dedupe::Keep);
    let component_concentrations = lists::aligned_concentrations(
        &mut fields,
        suffixes::CHEMICAL_CONCENTRATIONS,
        FieldKey::ChemicalConcentrations,
        component_count,
    );
    let component_units = lists::aligned_units(
        &mut fields,
        suffixes::CHEMICAL_CONCENTRATION_UNITS,
        FieldKey::ChemicalConcentrationUnits,
        component_count,
    );

    let has_hazardous_properties = yes_no(
        &mut fields,
        suffixes::HAS_HAZARDOUS_PROPERTIES,
        FieldKey::HasHazardousProperties,
    );
    let hazardous_waste_codes =
        lists::hazardous_codes(&mut fields, has_hazardous_properties, reference);

    let contains_pops = yes_no(&mut fields, suffixes::CONTAINS_POPS, FieldKey::ContainsPops);
    let pop_names = lists::pops(&mut fields, contains_pops, reference);
    let pop_count = lists::list_len(&fields, suffixes::POPS, Dedupe::ByName);
    let pop_concentrations = lists::aligned_concentrations(
        &mut fields,
        suffixes::POP_CONCENTRATIONS,
        FieldKey::PopConcentrations,
        pop_count,
    );
    let pop_units = lists::aligned_units(
        &mut fields,
        suffixes::POP_CONCENTRATION_UNITS,
        FieldKey::PopConcentrationUnits,
        pop_count,
    );

    fields.finish(|| {
        let chemical_and_biological_components = component_names?
            .into_iter()
            .zip(component_concentrations?)
            .zip(component_units?)
            .map(|((name, concentration), concentration_unit)| ChemicalComponent {
                name,
                concentration,
                concentration_unit,
            })
            .collect();
        let pops = pop_names?
            .into_iter()
            .zip(pop_concentrations?)
            .zip(pop_units?)
            .map(|((name, concentration), concentration_unit)| PopComponent {
                name,
                concentration,
                concentration_unit,
            })
            .collect();

        Some(WasteTypeDetail {
            ewc_code: ewc_code?,
            waste_description: waste_description?,
            physical_form: physical_form?,
            waste_quantity: waste_quantity?,
            quantity_unit: quantity_unit?,
            quantity_type: quantity_type?,
            chemical_and_biological_components,
            has_hazardous_properties: has_hazardous_properties?,
            hazardous_waste_codes: hazardous_waste_codes?,
            contains_pops: contains_pops?,
            pops,
        })
    })
}

/// EWC code, already stripped of quoting noise, checked against the catalogue
fn ewc_code(fields: &mut SectionFields<'_>, reference: &ReferenceTables) -> Option<String> {
    let value = fields.required(suffixes::EWC_CODE, FieldKey::EwcCode)?;
    if !EWC_CODE_RE.is_match(value) || !reference.contains_ewc_code(value) {
        fields.reject(FieldKey::EwcCode, Violation::Invalid);
        return None;
    }
    Some(value.to_string())
}

fn physical_form(fields: &mut SectionFields<'_>) -> Option<PhysicalForm> {
    let value = fields.required(suffixes::PHYSICAL_FORM, FieldKey::PhysicalForm)?;
    let form = PhysicalForm::from_normalized(value);
    if form.is_none() {
        fields.reject(FieldKey::PhysicalForm, Violation::Invalid);
    }
    form
}

/// Quantity rounded to two places; the rounded value must be above zero
fn waste_quantity(fields: &mut SectionFields<'_>) -> Option<f64> {
    let value = fields.required(suffixes::WASTE_QUANTITY, FieldKey::WasteQuantity)?;
    let Some(quantity) = parse_decimal(value) else {
        fields.reject(FieldKey::WasteQuantity, Violation::Invalid);
        return None;
    };
    if quantity <= 0.0 {
        fields.reject(FieldKey::WasteQuantity, Violation::NotGreaterThanZero);
        return None;
    }
    Some(quantity)
}

fn quantity_unit(fields: &mut SectionFields<'_>) -> Option<QuantityUnit> {
    let value = fields.required(suffixes::WASTE_QUANTITY_UNIT, FieldKey::QuantityUnit)?;
    let unit = QuantityUnit::from_synonym(value);
    if unit.is_none() {
        fields.reject(FieldKey::QuantityUnit, Violation::Invalid);
    }
    unit
}

fn quantity_type(fields: &mut SectionFields<'_>) -> Option<QuantityType> {
    let value = fields.required(suffixes::WASTE_QUANTITY_TYPE, FieldKey::QuantityType)?;
    let quantity_type = QuantityType::from_free_text(value);
    if quantity_type.is_none() {
        fields.reject(FieldKey::QuantityType, Violation::Invalid);
    }
    quantity_type
}

fn yes_no(fields: &mut SectionFields<'_>, suffix: &str, field: FieldKey) -> Option<bool> {
    let value = fields.required(suffix, field)?;
    let answer = parse_yes_no(value);
    if answer.is_none() {
        fields.reject(field, Violation::Invalid);
    }
    answer
}
