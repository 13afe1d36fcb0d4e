// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ticket::Ticket;

/// Validates that a ticket's basic field constraints are met.
///
/// This function checks that required fields are not empty. State-dependent
/// invariants (which code a ticket carries) are enforced by the transition
/// function, not here.
///
/// # Arguments
///
/// * `ticket` - The ticket to validate
///
/// # Returns
///
/// * `Ok(())` if the ticket's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The subject is empty
/// - The caller is empty
/// - The ticket has no notes
pub fn validate_ticket_fields(ticket: &Ticket) -> Result<(), DomainError> {
    // Rule: subject must not be empty
    if ticket.subject.is_empty() {
        return Err(DomainError::InvalidSubject(String::from(
            "Subject cannot be empty",
        )));
    }

    // Rule: caller must not be empty
    if ticket.caller.is_empty() {
        return Err(DomainError::InvalidCaller(String::from(
            "Caller cannot be empty",
        )));
    }

    // Rule: every ticket carries at least its creation note
    if ticket.notes.is_empty() {
        return Err(DomainError::InvalidNote(String::from(
            "Ticket must have at least one note",
        )));
    }

    Ok(())
}

/// Validates that an owner id is usable for assignment.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `owner` - The owner id to validate
///
/// # Returns
///
/// * `Ok(())` if the owner id is valid
/// * `Err(DomainError::InvalidOwner)` if the owner id is empty
///
/// # Errors
///
/// Returns an error if the owner id is empty.
pub fn validate_owner_id(owner: &str) -> Result<(), DomainError> {
    // Rule: an assigned owner id must not be empty
    if owner.is_empty() {
        return Err(DomainError::InvalidOwner(String::from(
            "Owner id cannot be empty",
        )));
    }
    Ok(())
}
