// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Category, DomainError, Priority, Ticket, TicketId, TicketType, validate_owner_id,
    validate_ticket_fields,
};

fn create_test_ticket() -> Ticket {
    Ticket::new(
        TicketId::new(1),
        TicketType::Request,
        String::from("Access to shared drive"),
        String::from("caller-1"),
        Category::Inquiry,
        Priority::Low,
        String::from("Please grant access to the finance share."),
    )
    .unwrap()
}

#[test]
fn test_validate_ticket_fields_accepts_valid_ticket() {
    let ticket: Ticket = create_test_ticket();
    assert!(validate_ticket_fields(&ticket).is_ok());
}

#[test]
fn test_validate_ticket_fields_rejects_empty_subject() {
    let mut ticket: Ticket = create_test_ticket();
    ticket.subject = String::new();

    let result = validate_ticket_fields(&ticket);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidSubject(_)));
}

#[test]
fn test_validate_ticket_fields_rejects_empty_caller() {
    let mut ticket: Ticket = create_test_ticket();
    ticket.caller = String::new();

    let result = validate_ticket_fields(&ticket);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidCaller(_)));
}

#[test]
fn test_validate_ticket_fields_rejects_missing_notes() {
    let mut ticket: Ticket = create_test_ticket();
    ticket.notes.clear();

    let result = validate_ticket_fields(&ticket);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidNote(_)));
}

#[test]
fn test_validate_owner_id_accepts_non_empty() {
    assert!(validate_owner_id("alice").is_ok());
}

#[test]
fn test_validate_owner_id_rejects_empty() {
    let result = validate_owner_id("");

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidOwner(_)));
}
