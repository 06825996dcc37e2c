use clap::Parser;
use std::process;
use waste_bulk_validator::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => Err(anyhow::anyhow!("Validation interrupted by user")),
                Err(e) => Err(anyhow::Error::new(e).context("Failed to listen for CTRL+C")),
            },
        }
    });

    match result {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Waste Bulk Validator - Bulk Waste Movement Upload Checker");
    println!("=========================================================");
    println!();
    println!("Validates flattened waste movement rows from a bulk upload spreadsheet");
    println!("and reports every field problem with its spreadsheet row number.");
    println!();
    println!("USAGE:");
    println!("    waste-bulk-validator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate a JSON batch request or CSV export");
    println!("    reference   Load the reference tables and summarise them");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXIT CODES:");
    println!("    0    The batch was validated, rows may still have been rejected");
    println!("    1    The batch could not be validated");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate a spreadsheet export:");
    println!("    waste-bulk-validator validate -i upload.csv --account-id ACC123");
    println!();
    println!("    # Validate a JSON request and save the response envelope:");
    println!("    waste-bulk-validator validate -i batch.json --format json -o response.json");
    println!();
    println!("    # Check the reference data directory:");
    println!("    waste-bulk-validator reference --reference-dir ./reference");
    println!();
    println!("For detailed help on any command, use:");
    println!("    waste-bulk-validator <COMMAND> --help");
}
