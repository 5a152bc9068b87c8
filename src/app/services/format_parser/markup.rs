//! Structured-markup strategy for booking payloads
//!
//! The whole input is parsed as a single XML document. A document that fails
//! to parse at all is a fatal batch failure; individual `booking` elements
//! with missing or invalid fields are dropped without aborting the rest.
//! Malformed markup indicates a structurally broken document, not a few bad
//! rows, so this strategy is deliberately stricter at the document level
//! than the delimited one.

use tracing::{debug, warn};

use super::FormatStrategy;
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{Booking, SourceType};
use crate::constants::{AMOUNT_ELEMENT, BOOKING_ELEMENT, CUSTOMER_NAME_ELEMENT};
use crate::{Error, Result};

/// Parser for the structured-markup wire format.
///
/// Candidate ids are the 1-based positions among all `booking` elements in
/// document order, later-dropped elements included, so the returned id
/// sequence may have gaps.
#[derive(Debug, Default)]
pub struct MarkupParser;

impl MarkupParser {
    /// Create a new structured-markup parser
    pub fn new() -> Self {
        Self
    }

    /// Trimmed text content of the named child element, if present and non-empty
    fn child_text<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
        node.children()
            .find(|c| c.is_element() && c.has_tag_name(name))
            .and_then(|c| c.text())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl FormatStrategy for MarkupParser {
    fn parse(&self, content: &str, source_type: SourceType) -> Result<ParseOutcome> {
        debug!("Parsing markup content with {} characters", content.len());

        let document = roxmltree::Document::parse(content)
            .map_err(|e| Error::invalid_format(e.to_string()))?;

        let mut stats = ParseStats::new();
        let mut bookings = Vec::new();

        let elements = document
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name(BOOKING_ELEMENT));

        for (index, element) in elements.enumerate() {
            stats.total_candidates += 1;
            let position = index + 1;

            let customer_name = Self::child_text(&element, CUSTOMER_NAME_ELEMENT);
            let amount = Self::child_text(&element, AMOUNT_ELEMENT)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|a| a.is_finite());

            match (customer_name, amount) {
                (Some(customer_name), Some(amount)) => {
                    match Booking::new(position as u32, customer_name, source_type, amount) {
                        Ok(booking) => {
                            bookings.push(booking);
                            stats.parsed += 1;
                        }
                        Err(e) => {
                            warn!("Invalid booking element {}: {}", position, e);
                            stats.record_drop(position, e.to_string());
                        }
                    }
                }
                (name, amount) => {
                    warn!(
                        "Invalid booking element {}: customerName present: {}, valid amount present: {}",
                        position,
                        name.is_some(),
                        amount.is_some()
                    );
                    stats.record_drop(
                        position,
                        format!(
                            "missing or invalid fields: customerName present: {}, valid amount present: {}",
                            name.is_some(),
                            amount.is_some()
                        ),
                    );
                }
            }
        }

        debug!(
            "Parsed {} valid bookings, {} invalid elements",
            stats.parsed, stats.dropped
        );
        Ok(ParseOutcome { bookings, stats })
    }
}
