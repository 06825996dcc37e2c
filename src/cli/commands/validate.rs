//! Validate command implementation
//!
//! Loads the reference tables, reads a batch file, validates every row and
//! reports the response envelope either as a readable summary or as JSON.

use super::CommandOutcome;
use super::shared::{create_spinner, setup_logging, to_pretty_json, write_output_file};
use crate::app::models::{BatchRequest, BatchResult, RowError, ValidationResponse};
use crate::app::services::batch_validator::{BatchValidator, ValidationStats, check_request};
use crate::app::services::reference_data::ReferenceTables;
use crate::cli::args::{InputFormat, OutputFormat, ValidateArgs};
use crate::cli::input::{CSV_HEADER_ROWS, read_csv_batch, read_json_batch};
use anyhow::{Context, Result};
use colored::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Rejected rows listed in the human report before it is cut short
const MAX_REPORTED_ROWS: usize = 50;

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<CommandOutcome> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level(), args.quiet);
    debug!("Validate arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    let spinner = args.show_progress().then(|| create_spinner("Loading reference data..."));
    let loaded = ReferenceTables::load_from_dir(&config.reference_dir).await;
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let (reference, load_stats) = loaded.with_context(|| {
        format!(
            "Failed to load reference data from {}",
            config.reference_dir.display()
        )
    })?;
    info!("{}", load_stats.summary());

    let validator = BatchValidator::new(Arc::new(reference), config);

    let (response, stats) = match read_request(&args).await {
        Ok(request) => {
            let spinner = args
                .show_progress()
                .then(|| create_spinner(&format!("Validating {} rows...", request.values.len())));
            let outcome = validate_request(&validator, request).await;
            if let Some(spinner) = &spinner {
                spinner.finish_and_clear();
            }
            outcome
        }
        Err(error) => (ValidationResponse::from(Err(error)), None),
    };

    let json = to_pretty_json(&response)?;
    match args.output_format {
        OutputFormat::Json => println!("{}", json),
        OutputFormat::Human => {
            if !args.quiet {
                print_human_report(&response, stats.as_ref());
            }
        }
    }

    if let Some(output_file) = &args.output_file {
        write_output_file(output_file, &json)?;
        info!("Response written to {}", output_file.display());
    }

    info!(
        "Validate command completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(CommandOutcome::from(&response))
}

/// Read the batch file and apply the command line overrides
async fn read_request(args: &ValidateArgs) -> crate::Result<BatchRequest> {
    match args.resolved_input_format() {
        InputFormat::Csv => {
            let account_id = args.account_id.as_deref().unwrap_or_default();
            let pad_index = args.pad_index.unwrap_or(CSV_HEADER_ROWS);
            read_csv_batch(&args.input, account_id, pad_index).await
        }
        InputFormat::Json | InputFormat::Auto => {
            let mut request = read_json_batch(&args.input).await?;
            if let Some(account_id) = &args.account_id {
                request.account_id = account_id.clone();
            }
            if let Some(pad_index) = args.pad_index {
                request.pad_index = pad_index;
            }
            Ok(request)
        }
    }
}

/// Validate a request, keeping statistics when validation ran
async fn validate_request(
    validator: &BatchValidator,
    request: BatchRequest,
) -> (ValidationResponse, Option<ValidationStats>) {
    if let Err(error) = check_request(&request) {
        return (ValidationResponse::from(Err(error)), None);
    }
    match validator.validate_concurrent_with_stats(request).await {
        Ok((result, stats)) => (ValidationResponse::Success(result), Some(stats)),
        Err(error) => (ValidationResponse::from(Err(error)), None),
    }
}

/// Print the response as a readable summary on stdout
fn print_human_report(response: &ValidationResponse, stats: Option<&ValidationStats>) {
    match response {
        ValidationResponse::Failure(body) => {
            println!("\n{}", "Batch could not be validated".bright_red().bold());
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!(
                "   • {} {} ({})",
                "Status:".bright_cyan(),
                body.status_code.to_string().bright_red(),
                body.name
            );
            println!("   • {} {}", "Reason:".bright_cyan(), body.message);
        }
        ValidationResponse::Success(result) => {
            let heading = if result.is_valid() {
                "✅ Batch is valid".bright_green().bold()
            } else {
                "❌ Batch has rejected rows".bright_red().bold()
            };
            println!("\n{}", heading);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!(
                "   • {} {}",
                "Account:".bright_cyan(),
                result.account_id().bright_white()
            );

            if let Some(stats) = stats {
                println!("\n📊 {}", "Rows".bright_yellow());
                println!("   • Total: {}", stats.total_rows);
                println!("   • Valid: {}", stats.valid_rows.to_string().bright_green());
                println!("   • Rejected: {}", stats.invalid_rows.to_string().bright_red());
                println!("   • Blank (skipped): {}", stats.skipped_rows);
                println!("   • Success rate: {:.1}%", stats.success_rate());
                println!("   • Time: {:.2}s", stats.duration.as_secs_f64());
            }

            if let BatchResult::Invalid { values, .. } = result {
                print_row_errors(values);
            }
        }
    }
}

fn print_row_errors(row_errors: &[RowError]) {
    println!("\n⚠️  {}", "Rejected rows".bright_yellow());
    for row_error in row_errors.iter().take(MAX_REPORTED_ROWS) {
        println!(
            "   • Row {}: {} problem(s)",
            row_error.index.to_string().bright_white().bold(),
            row_error.field_format_errors.len()
        );
        for error in &row_error.field_format_errors {
            println!(
                "       - {} {}",
                error.message(),
                format!("[{}]", error.code).dimmed()
            );
        }
    }
    if row_errors.len() > MAX_REPORTED_ROWS {
        println!(
            "   • ... and {} more rows",
            row_errors.len() - MAX_REPORTED_ROWS
        );
    }
}
