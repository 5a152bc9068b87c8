//! Command-line argument definitions for the booking processor
//!
//! This module defines the complete CLI interface using the clap derive API.
//! The CLI stands in for the transport layer: it selects exactly one input
//! origin per call and passes it to the ingestion orchestrator.

use crate::app::models::{InputOrigin, SourceType};
use crate::config::{Config, FormatKind};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the booking processor
///
/// Ingests booking records submitted as delimited text or XML, validates
/// them into canonical booking entities, and optionally archives the raw
/// payload to a per-source-type storage folder.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "booking-processor",
    version,
    about = "Ingest, validate and archive booking records from delimited text or XML"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Available subcommands for the booking processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse and validate booking records from an input origin
    Ingest(RequestArgs),
    /// Archive the raw payload of an input origin to its storage folder
    Archive(RequestArgs),
    /// List the bundled sample datasets
    Catalog(PipelineArgs),
}

/// Arguments shared by ingest and archive requests
#[derive(Debug, Clone, clap::Args)]
pub struct RequestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Source type driving archival routing
    #[arg(short = 's', long = "source-type", value_enum)]
    pub source_type: SourceType,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Input origin selection; exactly one must be supplied
#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Path of a file to upload
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Inline text content
    #[arg(short = 't', long = "text", value_name = "CONTENT")]
    pub text: Option<String>,

    /// Relative path of a bundled sample dataset
    #[arg(short = 'p', long = "predefined", value_name = "REL_PATH")]
    pub predefined: Option<String>,
}

impl InputArgs {
    /// Resolve the selected origin, reading uploaded file bytes from disk
    pub fn to_origin(&self) -> Result<InputOrigin> {
        if let Some(path) = &self.file {
            let bytes = std::fs::read(path)
                .map_err(|e| Error::io(format!("Failed to read upload {}", path.display()), e))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(InputOrigin::File { filename, bytes });
        }

        if let Some(content) = &self.text {
            return Ok(InputOrigin::Text {
                content: content.clone(),
            });
        }

        if let Some(relative_path) = &self.predefined {
            return Ok(InputOrigin::Predefined {
                relative_path: relative_path.clone(),
            });
        }

        // Unreachable when clap enforces the group, kept for direct construction
        Err(Error::invalid_input(
            "No input origin supplied: use --file, --text or --predefined".to_string(),
        ))
    }
}

/// Pipeline configuration overrides
#[derive(Debug, Clone, clap::Args)]
pub struct PipelineArgs {
    /// Wire format applied to ingested payloads and catalog discovery
    #[arg(long = "format", value_enum, default_value = "delimited")]
    pub format: FormatKind,

    /// Root directory of the bundled sample datasets
    #[arg(long = "data-root", value_name = "PATH")]
    pub data_root: Option<PathBuf>,

    /// Storage folder for source type A
    #[arg(long = "storage-a", value_name = "PATH")]
    pub storage_a: Option<PathBuf>,

    /// Storage folder for source type B
    #[arg(long = "storage-b", value_name = "PATH")]
    pub storage_b: Option<PathBuf>,
}

impl PipelineArgs {
    /// Build pipeline configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> Config {
        let mut config = Config::default().with_format(self.format);

        if let Some(data_root) = &self.data_root {
            config = config.with_dataset_root(data_root);
        }
        if let Some(storage_a) = &self.storage_a {
            config = config.with_storage_a(storage_a);
        }
        if let Some(storage_b) = &self.storage_b {
            config = config.with_storage_b(storage_b);
        }

        config
    }
}
