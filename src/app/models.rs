//! Data models for booking ingestion
//!
//! This module contains the core data structures for representing canonical
//! booking records, catalog entries for bundled sample datasets, archival
//! outcomes, and the input origins accepted by the pipeline.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Source Type
// =============================================================================

/// Classification tag on an ingestion request.
///
/// Selects the archival destination folder; it never influences which wire
/// format is applied to the payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SourceType {
    A,
    B,
}

impl FromStr for SourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(SourceType::A),
            "B" | "b" => Ok(SourceType::B),
            _ => Err(Error::invalid_input(format!(
                "Invalid source type '{}': must be A or B",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::A => write!(f, "A"),
            SourceType::B => write!(f, "B"),
        }
    }
}

// =============================================================================
// Booking Record
// =============================================================================

/// Canonical booking record produced by a format strategy.
///
/// Immutable once constructed and owned solely by the caller that requested
/// ingestion. Construction goes through [`Booking::new`], which enforces the
/// record invariants; candidates failing them are dropped by the parsers and
/// never materialize as `Booking` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// 1-based position of the record within its source payload.
    ///
    /// Ids are assigned from the original positional sequence and are not
    /// renumbered after invalid candidates are dropped, so a result list may
    /// contain gaps.
    pub id: u32,

    /// Customer name, non-empty after trimming
    pub customer_name: String,

    /// Creation-time timestamp; never derived from the input payload
    pub booking_date: DateTime<Utc>,

    /// Routing/classification tag of the originating request
    pub source_type: SourceType,

    /// Booked amount, a finite decimal number
    pub amount: f64,
}

impl Booking {
    /// Create a new booking with validation, stamping the booking date with
    /// the current instant
    pub fn new(
        id: u32,
        customer_name: impl Into<String>,
        source_type: SourceType,
        amount: f64,
    ) -> Result<Self> {
        let booking = Self {
            id,
            customer_name: customer_name.into(),
            booking_date: Utc::now(),
            source_type,
            amount,
        };

        booking.validate()?;
        Ok(booking)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(Error::invalid_input(
                "Booking id must be positive".to_string(),
            ));
        }

        if self.customer_name.trim().is_empty() {
            return Err(Error::invalid_input(
                "Customer name cannot be empty".to_string(),
            ));
        }

        if !self.amount.is_finite() {
            return Err(Error::invalid_input(format!(
                "Amount must be a finite number, got {}",
                self.amount
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A bundled, read-only sample dataset discoverable by relative path.
///
/// Created fresh on every catalog query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedFile {
    /// Leaf file name
    pub filename: String,

    /// Path relative to the dataset root, slash-separated.
    ///
    /// The stable identifier clients pass back to select this entry.
    pub relative_path: String,

    /// Human-readable name derived from the relative path
    pub display_name: String,

    /// Best-effort count of data rows; `None` when the active format has no
    /// cheap line-oriented count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

// =============================================================================
// Archival Outcome
// =============================================================================

/// Location of a successfully archived payload.
///
/// Represents a fact about the filesystem, not an owned resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalResult {
    /// Absolute path of the written artifact
    pub file_path: std::path::PathBuf,

    /// Absolute path of its containing directory
    pub folder_path: std::path::PathBuf,
}

// =============================================================================
// Input Origin
// =============================================================================

/// The input origin of an ingestion or archival request.
///
/// Exactly one origin is supplied per call; the enum is the explicit mode tag
/// required at the pipeline boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOrigin {
    /// Uploaded bytes together with the original file name
    File { filename: String, bytes: Vec<u8> },

    /// Inline text entered by the caller
    Text { content: String },

    /// Catalog entry referenced by its relative path
    Predefined { relative_path: String },
}

impl InputOrigin {
    /// Mode tag used in diagnostics
    pub fn mode(&self) -> &'static str {
        match self {
            InputOrigin::File { .. } => "file",
            InputOrigin::Text { .. } => "text",
            InputOrigin::Predefined { .. } => "predefined",
        }
    }
}
