//! Reference data loading from a directory of JSON files
//!
//! Each dataset lives in its own file holding a JSON array, exactly as served
//! by the reference data service. SIC codes are optional because the row
//! pipeline never consults them.

use super::ReferenceTables;
use super::metadata::LoadStats;
use crate::app::models::ReferenceData;
use crate::constants::reference_files;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl ReferenceTables {
    /// Load and index every reference dataset found in `dir`
    ///
    /// # Errors
    /// * `Error::ReferenceData` if the directory or a mandatory file is missing
    /// * `Error::ReferenceData` if a file is not a JSON array of the expected entries
    pub async fn load_from_dir(dir: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading reference data from {}", dir.display());
        let start_time = Instant::now();
        let mut stats = LoadStats::new();

        if !dir.is_dir() {
            return Err(Error::reference_data(
                dir,
                "reference data directory does not exist",
            ));
        }

        let ewc_codes = load_required(dir, reference_files::EWC_CODES, &mut stats).await?;
        let hazardous_codes =
            load_required(dir, reference_files::HAZARDOUS_CODES, &mut stats).await?;
        let pops = load_required(dir, reference_files::POPS, &mut stats).await?;
        let local_authorities =
            load_required(dir, reference_files::LOCAL_AUTHORITIES, &mut stats).await?;
        let sic_codes = load_optional(dir, reference_files::SIC_CODES, &mut stats)
            .await?
            .unwrap_or_default();

        let tables = Self::new(ReferenceData {
            ewc_codes,
            hazardous_codes,
            pops,
            local_authorities,
            sic_codes,
        });

        stats.load_duration = start_time.elapsed();
        info!("{}", stats.summary());

        Ok((tables, stats))
    }
}

async fn load_required<T: DeserializeOwned>(
    dir: &Path,
    file_name: &str,
    stats: &mut LoadStats,
) -> Result<Vec<T>> {
    load_optional(dir, file_name, stats).await?.ok_or_else(|| {
        Error::reference_data(dir.join(file_name), "required reference file not found")
    })
}

async fn load_optional<T: DeserializeOwned>(
    dir: &Path,
    file_name: &str,
    stats: &mut LoadStats,
) -> Result<Option<Vec<T>>> {
    let path = dir.join(file_name);
    if !path.exists() {
        debug!("Reference file {} not present", path.display());
        stats.files_missing.push(file_name.to_string());
        return Ok(None);
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let entries: Vec<T> = serde_json::from_str(&content)
        .map_err(|e| Error::reference_data(&path, format!("malformed JSON: {}", e)))?;

    debug!("Loaded {} entries from {}", entries.len(), path.display());
    stats.files_loaded += 1;
    stats.entries_loaded += entries.len();

    Ok(Some(entries))
}
