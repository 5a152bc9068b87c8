use booking_processor::cli::{args::Args, commands};
use clap::Parser;
use colored::Colorize;
use std::process;

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

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{}", format!("Error: {}", error).red());
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Booking Processor - Booking Record Ingestion and Archival");
    println!("=========================================================");
    println!();
    println!("Ingest booking records submitted as delimited text or XML, validate");
    println!("them into canonical booking entities, and archive raw payloads to");
    println!("per-source-type storage folders.");
    println!();
    println!("USAGE:");
    println!("    booking-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Parse and validate booking records from an input origin");
    println!("    archive     Archive the raw payload of an input origin");
    println!("    catalog     List the bundled sample datasets");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate an uploaded file:");
    println!("    booking-processor ingest --file bookings.csv --source-type a");
    println!();
    println!("    # Validate inline text:");
    println!("    booking-processor ingest --text 'Alice,150.00' --source-type a");
    println!();
    println!("    # Archive a bundled sample dataset for source type B:");
    println!("    booking-processor archive --predefined region-a/cust_report.csv \\");
    println!("                              --source-type b");
    println!();
    println!("For detailed help on any command, use:");
    println!("    booking-processor <COMMAND> --help");
}
