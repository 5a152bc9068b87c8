//! Booking Processor Library
//!
//! A Rust library for ingesting booking records submitted through
//! heterogeneous channels and turning them into validated, canonical
//! booking entities.
//!
//! This library provides tools for:
//! - Parsing delimited-text and XML booking payloads with per-record validation
//! - Discovering bundled sample datasets and deriving display metadata
//! - Archiving raw payloads to per-source-type storage folders under
//!   collision-resistant timestamped names
//! - Comprehensive error handling with a typed failure taxonomy

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archival;
        pub mod catalog;
        pub mod format_parser;
        pub mod ingestion;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ArchivalResult, Booking, InputOrigin, PredefinedFile, SourceType};
pub use config::{Config, FormatKind};

/// Result type alias for the booking processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for booking ingestion and archival operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Whole-document parse failure for the structured-markup format
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// Referenced catalog entry does not exist
    #[error("Predefined file not found: {relative_path}")]
    PredefinedNotFound { relative_path: String },

    /// Archival write failed
    #[error("Failed to save file: {message}")]
    SaveFailed {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Storage directory cannot be created or is unwritable
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Caller supplied no usable input, or an unrecognized input mode
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid-format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a predefined-file-not-found error
    pub fn predefined_not_found(relative_path: impl Into<String>) -> Self {
        Self::PredefinedNotFound {
            relative_path: relative_path.into(),
        }
    }

    /// Create a save-failed error wrapping the original cause
    pub fn save_failed(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::SaveFailed {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(error: roxmltree::Error) -> Self {
        Self::InvalidFormat {
            message: error.to_string(),
        }
    }
}
