//! Delimited-text strategy for booking payloads
//!
//! One candidate record per non-blank line, fields separated by commas.
//! Parsing is best-effort: a malformed line is dropped and logged, it never
//! aborts the batch.

use tracing::{debug, warn};

use super::FormatStrategy;
use super::stats::{ParseOutcome, ParseStats};
use crate::Result;
use crate::app::models::{Booking, SourceType};

/// Parser for the delimited-text wire format.
///
/// Candidate ids are the 1-based positions of lines within the blank-filtered
/// sequence. Ids are not renumbered after drops, so the returned id sequence
/// may have gaps.
#[derive(Debug, Default)]
pub struct DelimitedParser;

impl DelimitedParser {
    /// Create a new delimited-text parser
    pub fn new() -> Self {
        Self
    }
}

impl FormatStrategy for DelimitedParser {
    fn parse(&self, content: &str, source_type: SourceType) -> Result<ParseOutcome> {
        debug!("Parsing delimited content with {} characters", content.len());

        let mut stats = ParseStats::new();
        let mut bookings = Vec::new();

        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        debug!("Found {} non-blank lines to process", lines.len());

        for (index, line) in lines.iter().enumerate() {
            stats.total_candidates += 1;
            let position = index + 1;

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < 2 {
                warn!(
                    "Skipping line {}: '{}' - insufficient fields ({}/2)",
                    position,
                    line,
                    parts.len()
                );
                stats.record_drop(position, format!("insufficient fields in '{}'", line));
                continue;
            }

            let customer_name = parts[0].trim();
            let amount_str = parts[1].trim();
            let amount = amount_str.parse::<f64>().ok().filter(|a| a.is_finite());

            match amount {
                Some(amount) if !customer_name.is_empty() => {
                    match Booking::new(position as u32, customer_name, source_type, amount) {
                        Ok(booking) => {
                            bookings.push(booking);
                            stats.parsed += 1;
                        }
                        Err(e) => {
                            warn!("Invalid line {}: '{}' - {}", position, line, e);
                            stats.record_drop(position, e.to_string());
                        }
                    }
                }
                _ => {
                    warn!(
                        "Invalid line {}: '{}' - customerName: '{}', amount: '{}'",
                        position, line, customer_name, amount_str
                    );
                    stats.record_drop(
                        position,
                        format!(
                            "invalid fields: customerName '{}', amount '{}'",
                            customer_name, amount_str
                        ),
                    );
                }
            }
        }

        debug!(
            "Parsed {} valid bookings, {} invalid lines",
            stats.parsed, stats.dropped
        );
        Ok(ParseOutcome { bookings, stats })
    }
}
