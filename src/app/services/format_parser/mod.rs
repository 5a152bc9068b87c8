//! Format strategies for parsing raw booking payloads
//!
//! This module turns raw text into zero or more validated [`Booking`] values
//! under one of two wire formats, plus an implicit validation pass. The
//! strategy is selected by deployment configuration, never by the source type
//! of an individual request.
//!
//! ## Architecture
//!
//! - [`delimited`] - comma-delimited lines, one candidate record per line
//! - [`markup`] - XML documents carrying `booking` elements
//! - [`stats`] - parse outcome and per-batch diagnostics
//!
//! The two strategies share one contract but deliberately differ in failure
//! policy: the delimited strategy is per-record tolerant and never fails a
//! batch, while the markup strategy treats a document that does not parse as
//! a fatal, batch-level failure. Individual invalid candidates are dropped in
//! both, with positional ids preserved so result lists may contain gaps.
//!
//! ## Usage
//!
//! ```rust
//! use booking_processor::app::services::format_parser::strategy_for;
//! use booking_processor::{FormatKind, SourceType};
//!
//! # fn example() -> booking_processor::Result<()> {
//! let parser = strategy_for(FormatKind::Delimited);
//! let outcome = parser.parse("Alice,150.00\nBob,75.50", SourceType::A)?;
//!
//! println!("Parsed {} bookings from {} candidates",
//!          outcome.stats.parsed,
//!          outcome.stats.total_candidates);
//! # Ok(())
//! # }
//! ```

pub mod delimited;
pub mod markup;
pub mod stats;

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::SourceType;
use crate::config::FormatKind;

// Re-export main types for easy access
pub use delimited::DelimitedParser;
pub use markup::MarkupParser;
pub use stats::{ParseOutcome, ParseStats};

/// A parsing algorithm applied to raw bytes to produce candidate records
pub trait FormatStrategy: Send + Sync {
    /// Parse raw text into validated bookings plus batch diagnostics.
    ///
    /// `source_type` is stamped into each produced record; it does not
    /// influence how the payload is interpreted.
    fn parse(&self, content: &str, source_type: SourceType) -> Result<ParseOutcome>;
}

/// Build the strategy for the configured wire format
pub fn strategy_for(kind: FormatKind) -> Box<dyn FormatStrategy> {
    match kind {
        FormatKind::Delimited => Box::new(DelimitedParser::new()),
        FormatKind::Markup => Box::new(MarkupParser::new()),
    }
}
