//! Reference command implementation
//!
//! Loads the reference tables the validator would use and reports how many
//! entries each table holds.

use super::CommandOutcome;
use super::shared::{setup_logging, to_pretty_json};
use crate::app::services::reference_data::{LoadStats, ReferenceSummary, ReferenceTables};
use crate::cli::args::{OutputFormat, ReferenceArgs};
use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::path::Path;
use tracing::debug;

/// Reference command runner
pub async fn run_reference(args: ReferenceArgs) -> Result<CommandOutcome> {
    setup_logging(args.get_log_level(), false);
    debug!("Reference arguments: {:?}", args);

    let reference_dir = args.reference_dir();
    let (tables, load_stats) = ReferenceTables::load_from_dir(&reference_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to load reference data from {}",
                reference_dir.display()
            )
        })?;
    let summary = tables.summary();

    match args.output_format {
        OutputFormat::Human => print_human_summary(&reference_dir, &summary, &load_stats),
        OutputFormat::Json => {
            let report = json!({
                "directory": reference_dir.display().to_string(),
                "tables": summary,
                "totalEntries": summary.total_entries(),
                "filesMissing": load_stats.files_missing,
                "loadSeconds": load_stats.load_duration.as_secs_f64(),
            });
            println!("{}", to_pretty_json(&report)?);
        }
    }

    Ok(CommandOutcome::Completed)
}

fn print_human_summary(dir: &Path, summary: &ReferenceSummary, load_stats: &LoadStats) {
    println!("\n{}", "📊 Reference Data".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📁 Directory: {}", dir.display());
    println!("⏱️  Load Time: {:.2}s\n", load_stats.load_duration.as_secs_f64());

    println!("   • EWC codes: {}", summary.ewc_codes);
    println!("   • Hazardous codes: {}", summary.hazardous_codes);
    println!("   • Persistent organic pollutants: {}", summary.pops);
    println!("   • Local authorities: {}", summary.local_authorities);
    println!("   • SIC codes: {}", summary.sic_codes);
    println!(
        "   • Total: {}",
        summary.total_entries().to_string().bright_white().bold()
    );

    if summary.duplicates_skipped > 0 {
        println!(
            "\n⚠️  {} duplicate entries ignored (first occurrence kept)",
            summary.duplicates_skipped.to_string().bright_yellow()
        );
    }
    for file in &load_stats.files_missing {
        println!("⚠️  Optional file not found: {}", file.bright_yellow());
    }
}
