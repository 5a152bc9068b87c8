//! Ingestion orchestration
//!
//! This module is the single entry point consumed by the transport layer. It
//! resolves the byte content of an input origin, then either runs the active
//! format strategy over it (ingest) or hands it to the archival writer
//! (archive). Each call is stateless and independent.

use tracing::{debug, info};

use crate::Result;
use crate::app::models::{ArchivalResult, InputOrigin, PredefinedFile, SourceType};
use crate::app::services::archival::ArchivalWriter;
use crate::app::services::catalog::PredefinedCatalog;
use crate::app::services::format_parser::{FormatStrategy, ParseOutcome, strategy_for};
use crate::config::Config;

/// Orchestrator wiring the format strategy, catalog and archival writer
pub struct IngestionOrchestrator {
    parser: Box<dyn FormatStrategy>,
    catalog: PredefinedCatalog,
    writer: ArchivalWriter,
}

impl IngestionOrchestrator {
    /// Build an orchestrator from pipeline configuration
    pub fn new(config: &Config) -> Self {
        Self {
            parser: strategy_for(config.format),
            catalog: PredefinedCatalog::new(&config.dataset_root, config.format),
            writer: ArchivalWriter::new(config.storage.clone()),
        }
    }

    /// Parse and validate the origin's content into booking records.
    ///
    /// An empty result list is a valid, non-error outcome.
    pub async fn ingest(
        &self,
        origin: &InputOrigin,
        source_type: SourceType,
    ) -> Result<ParseOutcome> {
        info!(
            "Processing bookings from {} input, sourceType: {}",
            origin.mode(),
            source_type
        );

        let content = self.resolve_content(origin)?;
        let text = String::from_utf8_lossy(&content);
        let outcome = self.parser.parse(&text, source_type)?;

        info!(
            "Successfully processed {} bookings from {} input ({} candidates, {} dropped)",
            outcome.stats.parsed,
            origin.mode(),
            outcome.stats.total_candidates,
            outcome.stats.dropped
        );
        Ok(outcome)
    }

    /// Persist the origin's raw content to the source-type storage folder.
    ///
    /// Archival accepts any bytes; the payload is not validated as bookings.
    pub async fn archive(
        &self,
        origin: &InputOrigin,
        source_type: SourceType,
    ) -> Result<ArchivalResult> {
        info!(
            "Archiving {} input, sourceType: {}",
            origin.mode(),
            source_type
        );

        let content = self.resolve_content(origin)?;
        self.writer.archive(origin, &content, source_type).await
    }

    /// Read-only listing of the bundled sample datasets
    pub fn predefined_files(&self) -> Vec<PredefinedFile> {
        self.catalog.list()
    }

    /// Resolve an origin to its raw byte content
    fn resolve_content(&self, origin: &InputOrigin) -> Result<Vec<u8>> {
        match origin {
            InputOrigin::File { filename, bytes } => {
                debug!("Resolved uploaded file '{}' ({} bytes)", filename, bytes.len());
                Ok(bytes.clone())
            }
            InputOrigin::Text { content } => {
                debug!("Resolved inline text ({} characters)", content.len());
                Ok(content.clone().into_bytes())
            }
            InputOrigin::Predefined { relative_path } => {
                debug!("Resolving predefined file: {}", relative_path);
                self.catalog.read(relative_path)
            }
        }
    }
}
