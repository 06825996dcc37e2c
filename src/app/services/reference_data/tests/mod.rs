//! Tests for reference data indexing, lookups and loading

use crate::app::services::test_support::fixture_reference_data;
use std::fs;
use std::path::Path;


/// Write the fixture reference data as JSON files into `dir`
pub fn write_reference_files(dir: &Path, include_sic: bool) -> std::io::Result<()> {
    let data = fixture_reference_data();
    fs::write(
        dir.join("ewc-codes.json"),
        serde_json::to_string(&data.ewc_codes)?,
    )?;
    fs::write(
        dir.join("hazardous-codes.json"),
        serde_json::to_string(&data.hazardous_codes)?,
    )?;
    fs::write(dir.join("pops.json"), serde_json::to_string(&data.pops)?)?;
    fs::write(
        dir.join("local-authorities.json"),
        serde_json::to_string(&data.local_authorities)?,
    )?;
    if include_sic {
        fs::write(
            dir.join("sic-codes.json"),
            serde_json::to_string(&data.sic_codes)?,
        )?;
    }
    Ok(())
}
