//! Application constants for the booking processor
//!
//! This module contains default values, fallback names and format
//! mappings used throughout the booking processor application.

// =============================================================================
// Archival Naming
// =============================================================================

/// Filesystem-safe timestamp pattern used to prefix archived file names.
///
/// Seconds resolution, colons replaced with dashes so the rendered value is
/// valid on every supported filesystem.
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Fallback names applied when an origin carries no usable file name
pub mod fallback {
    /// Base name for an uploaded file without an original name or extension
    pub const UPLOAD_BASE: &str = "unknown";

    /// Extension for an uploaded file without an extension
    pub const UPLOAD_EXT: &str = "txt";

    /// Fixed base name for inline text input
    pub const TEXT_BASE: &str = "text-input";

    /// Fixed extension for inline text input
    pub const TEXT_EXT: &str = "txt";

    /// Base name for a catalog entry without a usable identifier
    pub const PREDEFINED_BASE: &str = "sample";

    /// Extension for a catalog entry without an extension
    pub const PREDEFINED_EXT: &str = "csv";
}

// =============================================================================
// Default Locations
// =============================================================================

/// Application directory name under the platform data directory
pub const APP_DIR_NAME: &str = "booking-processor";

/// Default storage folder leaf for source type A
pub const DEFAULT_STORAGE_A: &str = "incoming-a";

/// Default storage folder leaf for source type B
pub const DEFAULT_STORAGE_B: &str = "incoming-b";

/// Default dataset root leaf holding bundled sample files
pub const DEFAULT_DATASET_DIR: &str = "data";

// =============================================================================
// Wire Formats
// =============================================================================

/// File extension of delimited-text sample datasets
pub const DELIMITED_EXTENSION: &str = "csv";

/// File extension of structured-markup sample datasets
pub const MARKUP_EXTENSION: &str = "xml";

/// Element name holding a single booking record in markup payloads
pub const BOOKING_ELEMENT: &str = "booking";

/// Child element holding the customer name of a booking element
pub const CUSTOMER_NAME_ELEMENT: &str = "customerName";

/// Child element holding the amount of a booking element
pub const AMOUNT_ELEMENT: &str = "amount";
