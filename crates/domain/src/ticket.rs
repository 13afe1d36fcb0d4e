// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::codes::{CancellationCode, FeedbackCode, ResolutionCode};
use crate::error::DomainError;
use crate::state::TicketState;
use crate::types::{Category, Priority, TicketId, TicketType};
use serde::{Deserialize, Serialize};

/// Represents a tracked service request or incident record.
///
/// A ticket is mutated only by applying commands through the lifecycle
/// transition function; the descriptive fields set at creation never change.
/// The supporting codes are populated only in the states that carry them:
/// `feedback_code` while Feedback, `resolution_code` while Resolved or
/// Closed, `cancellation_code` once Canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// The unique identifier assigned at creation.
    pub id: TicketId,
    /// Whether this ticket is a request or an incident.
    pub ticket_type: TicketType,
    /// Subject information entered when the ticket was created.
    pub subject: String,
    /// User id of the person who reported the ticket.
    pub caller: String,
    /// The service category this ticket is filed under.
    pub category: Category,
    /// The urgency assigned to this ticket.
    pub priority: Priority,
    /// User id of the assigned owner, or the empty string if unassigned.
    pub owner: String,
    /// All notes on this ticket, oldest first.
    pub notes: Vec<String>,
    /// The current lifecycle state.
    pub state: TicketState,
    /// The feedback code, `None` unless the ticket is in the Feedback state.
    pub feedback_code: Option<FeedbackCode>,
    /// The resolution code, `None` unless the ticket is Resolved or Closed.
    pub resolution_code: Option<ResolutionCode>,
    /// The cancellation code, `None` unless the ticket is Canceled.
    pub cancellation_code: Option<CancellationCode>,
}

impl Ticket {
    /// Creates a new `Ticket` in the New state.
    ///
    /// The ticket starts with an empty owner, no supporting codes, and
    /// exactly one note.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier, taken from a `TicketIdGenerator`
    /// * `ticket_type` - Request or Incident
    /// * `subject` - Subject information (must not be empty)
    /// * `caller` - User id of the reporter (must not be empty)
    /// * `category` - The service category
    /// * `priority` - The assigned urgency
    /// * `initial_note` - The first note on the ticket (must not be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(Ticket)` if all fields are valid
    /// * `Err(DomainError)` if the subject, caller, or initial note is empty
    ///
    /// # Errors
    ///
    /// Returns an error if any required string field is empty.
    pub fn new(
        id: TicketId,
        ticket_type: TicketType,
        subject: String,
        caller: String,
        category: Category,
        priority: Priority,
        initial_note: String,
    ) -> Result<Self, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::InvalidSubject(String::from(
                "Subject cannot be empty",
            )));
        }
        if caller.is_empty() {
            return Err(DomainError::InvalidCaller(String::from(
                "Caller cannot be empty",
            )));
        }
        if initial_note.is_empty() {
            return Err(DomainError::InvalidNote(String::from(
                "Initial note cannot be empty",
            )));
        }

        Ok(Self {
            id,
            ticket_type,
            subject,
            caller,
            category,
            priority,
            owner: String::new(),
            notes: vec![initial_note],
            state: TicketState::New,
            feedback_code: None,
            resolution_code: None,
            cancellation_code: None,
        })
    }

    /// Returns the fixed label for this ticket's current state.
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        self.state.as_str()
    }

    /// Returns true if no owner is assigned.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.owner.is_empty()
    }
}
