//! Shared fixtures for service tests
//!
//! Provides a small reference dataset and a fully valid flattened row that
//! individual tests then break field by field.

use crate::app::models::{
    FlatRow, LocalAuthority, LocalizedText, Pop, ReferenceData, SicCode, WasteCode,
};
use crate::app::services::reference_data::ReferenceTables;
use std::sync::Arc;

fn waste_code(code: &str, description: &str) -> WasteCode {
    WasteCode {
        code: code.to_string(),
        description: LocalizedText::english(description),
    }
}

fn pop(name: &str) -> Pop {
    Pop {
        name: LocalizedText::english(name),
    }
}

fn local_authority(name: &str, country: &str) -> LocalAuthority {
    LocalAuthority {
        name: name.to_string(),
        country: country.to_string(),
    }
}

/// Reference data covering the codes used by [`valid_row`]
pub fn fixture_reference_data() -> ReferenceData {
    ReferenceData {
        ewc_codes: vec![
            waste_code(
                "010101",
                "wastes from mineral metalliferous excavation",
            ),
            waste_code("020101", "sludges from washing and cleaning"),
            waste_code("170504", "soil and stones other than those mentioned in 17 05 03"),
            waste_code("200121*", "fluorescent tubes and other mercury-containing waste"),
        ],
        hazardous_codes: vec![
            waste_code("HP1", "Explosive"),
            waste_code("HP3", "Flammable"),
            waste_code("HP14", "Ecotoxic"),
        ],
        pops: vec![pop("Endosulfan"), pop("Chlordane"), pop("Hexachlorobenzene")],
        local_authorities: vec![
            local_authority("Hartlepool", "England"),
            local_authority("Cardiff", "Wales"),
            local_authority("Glasgow City", "Scotland"),
            local_authority("Belfast City", "Northern Ireland"),
        ],
        sic_codes: vec![SicCode {
            code: "01110".to_string(),
            description: LocalizedText::english(
                "Growing of cereals (except rice), leguminous crops and oil seeds",
            ),
        }],
    }
}

pub fn fixture_reference_tables() -> Arc<ReferenceTables> {
    Arc::new(ReferenceTables::new(fixture_reference_data()))
}

/// A row that passes every validator, with one waste type slot populated
pub fn valid_row() -> FlatRow {
    FlatRow::new()
        .with("producerReference", "ref123")
        .with("producerSicCode", "01110")
        .with("producerOrganisationName", "Acme Waste Ltd")
        .with("producerAddressLine1", "1 High Street")
        .with("producerAddressLine2", "Industrial Estate")
        .with("producerTownCity", "Hartlepool")
        .with("producerPostcode", "TS24 7AA")
        .with("producerCountry", "England")
        .with("producerContactName", "Jane Smith")
        .with("producerContactEmail", "jane@acme.example.com")
        .with("producerContactPhone", "01234567890")
        .with("receiverAuthorizationType", "Permit")
        .with("receiverEnvironmentalPermitNumber", "EPR/AB1234CD")
        .with("receiverOrganisationName", "Receiver Co")
        .with("receiverAddressLine1", "2 Dock Road")
        .with("receiverTownCity", "Cardiff")
        .with("receiverPostcode", "CF10 1AA")
        .with("receiverCountry", "Wales")
        .with("receiverContactName", "Owen Jones")
        .with("receiverContactEmail", "owen@receiver.example.com")
        .with("receiverContactPhone", "02920123456")
        .with("carrierOrganisationName", "Carrier Ltd")
        .with("carrierAddressLine1", "3 Mill Lane")
        .with("carrierTownCity", "Glasgow")
        .with("carrierPostcode", "G1 1AA")
        .with("carrierCountry", "Scotland")
        .with("carrierContactName", "Ailsa Brown")
        .with("carrierContactEmail", "ailsa@carrier.example.com")
        .with("carrierContactPhone", "01411234567")
        .with("wasteCollectionAddressLine1", "4 Quarry Road")
        .with("wasteCollectionTownCity", "Hartlepool")
        .with("wasteCollectionPostcode", "TS25 1AA")
        .with("wasteCollectionCountry", "England")
        .with("wasteCollectionLocalAuthority", "Hartlepool")
        .with("wasteCollectionWasteSource", "Commercial")
        .with("wasteCollectionBrokerRegistrationNumber", "CBDU123")
        .with("wasteCollectionCarrierRegistrationNumber", "CBDU456")
        .with("wasteCollectionExpectedWasteCollectionDate", "01/02/2025")
        .with("wasteTransportationNumberAndTypeOfContainers", "2 skips")
        .with("wasteTransportationSpecialHandlingRequirements", "Keep dry")
        .with("firstWasteTypeEwcCode", "010101")
        .with("firstWasteTypeWasteDescription", "Mine tailings")
        .with("firstWasteTypePhysicalForm", "Solid")
        .with("firstWasteTypeWasteQuantity", "100")
        .with("firstWasteTypeWasteQuantityUnit", "Tonnes")
        .with("firstWasteTypeWasteQuantityType", "Estimate")
        .with(
            "firstWasteTypeChemicalAndBiologicalComponentsString",
            "Iron;Silica",
        )
        .with(
            "firstWasteTypeChemicalAndBiologicalComponentsConcentrationsString",
            "60;40",
        )
        .with(
            "firstWasteTypeChemicalAndBiologicalComponentsConcentrationUnitsString",
            "%;%",
        )
        .with("firstWasteTypeHasHazardousProperties", "Y")
        .with("firstWasteTypeHazardousWasteCodesString", "HP1")
        .with("firstWasteTypeContainsPops", "Y")
        .with("firstWasteTypePersistentOrganicPollutantsString", "Endosulfan")
        .with(
            "firstWasteTypePersistentOrganicPollutantsConcentrationsString",
            "0.1",
        )
        .with(
            "firstWasteTypePersistentOrganicPollutantsConcentrationUnitsString",
            "g/kg",
        )
}

/// Copy of [`valid_row`] with `field` replaced
pub fn valid_row_with(field: &str, value: &str) -> FlatRow {
    valid_row().with(field, value)
}

/// Copy of [`valid_row`] with `field` removed
pub fn valid_row_without(field: &str) -> FlatRow {
    let mut row = valid_row();
    row.remove(field);
    row
}
