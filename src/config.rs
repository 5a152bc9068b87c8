//! Configuration management for the booking pipeline.
//!
//! Provides the configuration structure selecting the active wire format,
//! the dataset root holding bundled sample files, and the per-source-type
//! storage routing used by archival.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_DATASET_DIR, DEFAULT_STORAGE_A, DEFAULT_STORAGE_B, DELIMITED_EXTENSION,
    MARKUP_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wire format applied to raw ingested bytes.
///
/// Selected by deployment configuration, never by the source type of an
/// individual request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// Comma-delimited lines, one candidate record per line
    Delimited,
    /// XML document with `booking` elements
    Markup,
}

impl FormatKind {
    /// File extension of sample datasets for this format
    pub fn extension(&self) -> &'static str {
        match self {
            FormatKind::Delimited => DELIMITED_EXTENSION,
            FormatKind::Markup => MARKUP_EXTENSION,
        }
    }
}

/// Per-source-type archival destinations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Destination folder for source type A
    pub path_a: PathBuf,

    /// Destination folder for source type B
    pub path_b: PathBuf,
}

/// Global configuration for booking processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active wire format for parsing and catalog discovery
    pub format: FormatKind,

    /// Root directory holding bundled sample datasets
    pub dataset_root: PathBuf,

    /// Archival routing table
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app_root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        Self {
            format: FormatKind::Delimited,
            dataset_root: app_root.join(DEFAULT_DATASET_DIR),
            storage: StorageConfig {
                path_a: app_root.join(DEFAULT_STORAGE_A),
                path_b: app_root.join(DEFAULT_STORAGE_B),
            },
        }
    }
}

impl Config {
    /// Create configuration with the given wire format
    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }

    /// Create configuration with a custom dataset root
    pub fn with_dataset_root(mut self, dataset_root: impl Into<PathBuf>) -> Self {
        self.dataset_root = dataset_root.into();
        self
    }

    /// Create configuration with a custom storage folder for source type A
    pub fn with_storage_a(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.path_a = path.into();
        self
    }

    /// Create configuration with a custom storage folder for source type B
    pub fn with_storage_b(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.path_b = path.into();
        self
    }
}
