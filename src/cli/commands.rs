//! Command implementations for the booking processor CLI
//!
//! This module contains the command execution logic: logging setup,
//! dispatch to the ingestion orchestrator, and result reporting. Results
//! print to stdout as pretty JSON; human-readable summaries go to stderr.

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::ingestion::IngestionOrchestrator;
use crate::cli::args::{Args, Commands, PipelineArgs, RequestArgs};
use crate::{Error, Result};

/// Main command runner for the booking processor
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting booking processor");
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Some(Commands::Ingest(request)) => run_ingest(request).await,
        Some(Commands::Archive(request)) => run_archive(request).await,
        Some(Commands::Catalog(pipeline)) => run_catalog(pipeline),
        None => Err(Error::invalid_input(
            "No command provided; use --help for usage".to_string(),
        )),
    }
}

/// Parse and validate bookings from the selected origin
async fn run_ingest(request: &RequestArgs) -> Result<()> {
    let config = request.pipeline.to_config();
    let orchestrator = IngestionOrchestrator::new(&config);

    let origin = request.input.to_origin()?;
    let outcome = orchestrator.ingest(&origin, request.source_type).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome.bookings)
            .map_err(|e| Error::invalid_input(format!("Failed to render bookings: {}", e)))?
    );

    if outcome.bookings.is_empty() {
        eprintln!(
            "{}",
            "No valid booking records found in the input".yellow()
        );
    } else {
        eprintln!(
            "{}",
            format!(
                "Processed {} booking(s), dropped {} of {} candidate(s)",
                outcome.stats.parsed, outcome.stats.dropped, outcome.stats.total_candidates
            )
            .green()
        );
    }

    Ok(())
}

/// Archive the raw payload of the selected origin
async fn run_archive(request: &RequestArgs) -> Result<()> {
    let config = request.pipeline.to_config();
    let orchestrator = IngestionOrchestrator::new(&config);

    let origin = request.input.to_origin()?;
    let result = orchestrator.archive(&origin, request.source_type).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&result)
            .map_err(|e| Error::invalid_input(format!("Failed to render result: {}", e)))?
    );
    eprintln!(
        "{}",
        format!("Saved file to: {}", result.file_path.display()).green()
    );

    Ok(())
}

/// List the bundled sample datasets
fn run_catalog(pipeline: &PipelineArgs) -> Result<()> {
    let config = pipeline.to_config();
    let orchestrator = IngestionOrchestrator::new(&config);

    let files = orchestrator.predefined_files();

    println!(
        "{}",
        serde_json::to_string_pretty(&files)
            .map_err(|e| Error::invalid_input(format!("Failed to render catalog: {}", e)))?
    );
    eprintln!(
        "{}",
        format!("{} predefined file(s) available", files.len()).green()
    );

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("booking_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
