//! Tests for the delimited-text format strategy

use super::*;
use crate::app::models::SourceType;
use crate::app::services::format_parser::{DelimitedParser, FormatStrategy};

#[test]
fn test_valid_lines_produce_bookings() {
    let parser = DelimitedParser::new();
    let outcome = parser
        .parse("Alice,150.00\nBob,75.50", SourceType::A)
        .unwrap();

    assert_eq!(outcome.bookings.len(), 2);
    assert_eq!(outcome.stats.total_candidates, 2);
    assert_eq!(outcome.stats.parsed, 2);
    assert_eq!(outcome.stats.dropped, 0);

    assert_eq!(outcome.bookings[0].id, 1);
    assert_eq!(outcome.bookings[0].customer_name, "Alice");
    assert_eq!(outcome.bookings[0].amount, 150.0);
    assert_eq!(outcome.bookings[0].source_type, SourceType::A);

    assert_eq!(outcome.bookings[1].id, 2);
    assert_eq!(outcome.bookings[1].customer_name, "Bob");
    assert_eq!(outcome.bookings[1].amount, 75.5);
}

#[test]
fn test_invalid_lines_dropped_with_id_gaps() {
    let parser = DelimitedParser::new();
    let outcome = parser
        .parse(&mixed_delimited_payload(), SourceType::A)
        .unwrap();

    // Lines 2 (empty name) and 3 (non-numeric amount) are dropped; ids keep
    // their original positions.
    assert_eq!(outcome.bookings.len(), 2);
    assert_eq!(outcome.bookings[0].id, 1);
    assert_eq!(outcome.bookings[0].customer_name, "Alice");
    assert_eq!(outcome.bookings[0].amount, 150.0);
    assert_eq!(outcome.bookings[1].id, 4);
    assert_eq!(outcome.bookings[1].customer_name, "Cara");
    assert_eq!(outcome.bookings[1].amount, 200.0);

    assert_eq!(outcome.stats.total_candidates, 4);
    assert_eq!(outcome.stats.parsed, 2);
    assert_eq!(outcome.stats.dropped, 2);
    assert_eq!(outcome.stats.drops.len(), 2);
}

#[test]
fn test_blank_lines_discarded_before_numbering() {
    let parser = DelimitedParser::new();
    let outcome = parser
        .parse("\n\nAlice,10\n\n   \nBob,20\n", SourceType::B)
        .unwrap();

    assert_eq!(outcome.bookings.len(), 2);
    assert_eq!(outcome.bookings[0].id, 1);
    assert_eq!(outcome.bookings[1].id, 2);
}

#[test]
fn test_line_with_single_field_dropped() {
    let parser = DelimitedParser::new();
    let outcome = parser.parse("just-a-name", SourceType::A).unwrap();

    assert!(outcome.bookings.is_empty());
    assert_eq!(outcome.stats.total_candidates, 1);
    assert_eq!(outcome.stats.dropped, 1);
}

#[test]
fn test_extra_fields_ignored() {
    let parser = DelimitedParser::new();
    let outcome = parser.parse("Alice,150.00,ignored,also", SourceType::A).unwrap();

    assert_eq!(outcome.bookings.len(), 1);
    assert_eq!(outcome.bookings[0].amount, 150.0);
}

#[test]
fn test_fields_trimmed() {
    let parser = DelimitedParser::new();
    let outcome = parser.parse("  Alice  ,  150.00  ", SourceType::A).unwrap();

    assert_eq!(outcome.bookings[0].customer_name, "Alice");
    assert_eq!(outcome.bookings[0].amount, 150.0);
}

#[test]
fn test_non_finite_amount_dropped() {
    let parser = DelimitedParser::new();
    let outcome = parser.parse("Alice,NaN\nBob,inf\nCara,5", SourceType::A).unwrap();

    assert_eq!(outcome.bookings.len(), 1);
    assert_eq!(outcome.bookings[0].customer_name, "Cara");
    assert_eq!(outcome.bookings[0].id, 3);
    assert_eq!(outcome.stats.dropped, 2);
}

#[test]
fn test_empty_input_is_valid_and_empty() {
    let parser = DelimitedParser::new();
    let outcome = parser.parse("", SourceType::A).unwrap();

    assert!(outcome.bookings.is_empty());
    assert_eq!(outcome.stats.total_candidates, 0);
    assert_eq!(outcome.stats.success_rate(), 0.0);
}

#[test]
fn test_repeated_parse_is_stable_except_booking_date() {
    let parser = DelimitedParser::new();
    let payload = mixed_delimited_payload();

    let first = parser.parse(&payload, SourceType::A).unwrap();
    let second = parser.parse(&payload, SourceType::A).unwrap();

    assert_eq!(first.bookings.len(), second.bookings.len());
    for (a, b) in first.bookings.iter().zip(second.bookings.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.customer_name, b.customer_name);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.source_type, b.source_type);
        assert!(b.booking_date >= a.booking_date);
    }
}
