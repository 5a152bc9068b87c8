//! Test utilities and fixtures for format strategy testing
//!
//! This module provides shared payload fixtures used across the strategy
//! test modules.

// Test modules
mod delimited_tests;

/// Delimited payload with two valid lines and two invalid ones (empty name,
/// non-numeric amount) in between
pub fn mixed_delimited_payload() -> String {
    "Alice,150.00\n,75\nBob,notanumber\nCara,200".to_string()
}

/// Well-formed markup payload with two complete booking elements
pub fn valid_markup_payload() -> String {
    r#"<bookings>
  <booking>
    <customerName>John Doe</customerName>
    <amount>150.00</amount>
  </booking>
  <booking>
    <customerName>Mike Davis</customerName>
    <amount>350.25</amount>
  </booking>
</bookings>"#
        .to_string()
}

/// Markup payload whose second booking element is missing its amount child
pub fn markup_payload_with_missing_amount() -> String {
    r#"<bookings>
  <booking>
    <customerName>Jane Smith</customerName>
  </booking>
  <booking>
    <customerName>Mike Davis</customerName>
    <amount>350.25</amount>
  </booking>
</bookings>"#
        .to_string()
}
