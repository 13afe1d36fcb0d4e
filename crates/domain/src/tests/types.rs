// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Category, Priority, TicketId, TicketIdGenerator, TicketType};
use std::str::FromStr;

#[test]
fn test_ticket_type_display_strings() {
    assert_eq!(TicketType::Request.as_str(), "Request");
    assert_eq!(TicketType::Incident.as_str(), "Incident");
}

#[test]
fn test_ticket_type_string_round_trip() {
    for ticket_type in [TicketType::Request, TicketType::Incident] {
        let parsed: TicketType = TicketType::from_str(ticket_type.as_str()).unwrap();
        assert_eq!(parsed, ticket_type);
    }
}

#[test]
fn test_ticket_type_rejects_unknown_string() {
    let result = TicketType::from_str("Problem");
    assert!(result.is_err());
}

#[test]
fn test_category_string_round_trip() {
    let categories = vec![
        Category::Inquiry,
        Category::Software,
        Category::Hardware,
        Category::Network,
        Category::Database,
    ];

    for category in categories {
        let s = category.as_str();
        match Category::from_str(s) {
            Ok(parsed) => assert_eq!(category, parsed),
            Err(e) => panic!("Failed to parse category string: {s}: {e}"),
        }
    }
}

#[test]
fn test_category_rejects_unknown_string() {
    let result = Category::from_str("Facilities");
    assert!(result.is_err());
}

#[test]
fn test_priority_string_round_trip() {
    let priorities = vec![
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    for priority in priorities {
        let s = priority.as_str();
        match Priority::from_str(s) {
            Ok(parsed) => assert_eq!(priority, parsed),
            Err(e) => panic!("Failed to parse priority string: {s}: {e}"),
        }
    }
}

#[test]
fn test_priority_rejects_unknown_string() {
    let result = Priority::from_str("Critical");
    assert!(result.is_err());
}

#[test]
fn test_ticket_id_creation() {
    let id: TicketId = TicketId::new(7);
    assert_eq!(id.value(), 7);
    assert_eq!(format!("{id}"), "7");
}

#[test]
fn test_id_generator_starts_at_one() {
    let mut generator: TicketIdGenerator = TicketIdGenerator::new();
    assert_eq!(generator.next_id(), TicketId::new(1));
}

#[test]
fn test_id_generator_increments_monotonically() {
    let mut generator: TicketIdGenerator = TicketIdGenerator::new();

    let first: TicketId = generator.next_id();
    let second: TicketId = generator.next_id();
    let third: TicketId = generator.next_id();

    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
    assert_eq!(third.value(), 3);
}

#[test]
fn test_id_generator_starting_at() {
    let mut generator: TicketIdGenerator = TicketIdGenerator::starting_at(100);

    assert_eq!(generator.next_id(), TicketId::new(100));
    assert_eq!(generator.next_id(), TicketId::new(101));
}

#[test]
fn test_independent_generators_do_not_share_state() {
    let mut first: TicketIdGenerator = TicketIdGenerator::new();
    let mut second: TicketIdGenerator = TicketIdGenerator::new();

    assert_eq!(first.next_id(), TicketId::new(1));
    assert_eq!(second.next_id(), TicketId::new(1));
}

#[test]
fn test_ticket_type_serde_round_trip() {
    let serialized: String = serde_json::to_string(&TicketType::Incident).unwrap();
    let deserialized: TicketType = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, TicketType::Incident);
}

#[test]
fn test_priority_serde_round_trip() {
    let serialized: String = serde_json::to_string(&Priority::Urgent).unwrap();
    let deserialized: Priority = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, Priority::Urgent);
}
