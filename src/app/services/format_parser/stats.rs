//! Parse outcome and diagnostics for booking payload processing
//!
//! This module provides types for carrying per-batch bookkeeping alongside
//! parsed results, so callers can inspect drop counts without the pipeline
//! depending on a process-wide log sink.

use crate::app::models::Booking;

/// Parsing result with bookings and batch diagnostics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Successfully validated booking records, in payload order
    pub bookings: Vec<Booking>,

    /// Batch diagnostics
    pub stats: ParseStats,
}

/// Diagnostics for one parsed batch.
///
/// The counters are bookkeeping only; a dropped candidate is never surfaced
/// as an error to the caller.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of candidate records encountered
    pub total_candidates: usize,

    /// Number of bookings successfully validated
    pub parsed: usize,

    /// Number of candidates dropped by validation
    pub dropped: usize,

    /// Per-drop diagnostic messages, keyed by candidate position
    pub drops: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dropped candidate at the given 1-based position
    pub fn record_drop(&mut self, position: usize, reason: impl Into<String>) {
        self.dropped += 1;
        self.drops.push(format!("Candidate {}: {}", position, reason.into()));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_candidates == 0 {
            0.0
        } else {
            (self.parsed as f64 / self.total_candidates as f64) * 100.0
        }
    }
}
