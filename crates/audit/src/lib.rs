// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use svc_ticket_domain::TicketId;

/// Represents the entity performing an action on a ticket.
///
/// An actor is any identifiable entity that issues commands.
/// This could be a service-desk agent, the caller, or a system process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "agent", "caller", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for a command.
///
/// A cause describes why a ticket transition was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, call ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this command
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
///
/// An action records which command was applied to the ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "Process", "Resolve").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of a ticket at a point in time.
///
/// Captures the ticket fields that transitions touch: the state name, the
/// owner, and the note count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the ticket state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the ticket state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a ticket state transition.
///
/// Every successful transition must produce exactly one audit event; a
/// rejected command produces none. Audit events are immutable once created
/// and capture:
/// - Who issued the command (actor)
/// - Why it was issued (cause)
/// - Which command was applied (action)
/// - The ticket before the transition (before)
/// - The ticket after the transition (after)
/// - The ticket the event is scoped to (`ticket_id`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who issued this command.
    pub actor: Actor,
    /// The cause or reason for this command.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The ticket before the transition.
    pub before: StateSnapshot,
    /// The ticket after the transition.
    pub after: StateSnapshot,
    /// The ticket this event is scoped to.
    pub ticket_id: TicketId,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who issued the command
    /// * `cause` - The reason for the command
    /// * `action` - The action that was performed
    /// * `before` - The ticket before the transition
    /// * `after` - The ticket after the transition
    /// * `ticket_id` - The ticket this event is scoped to
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        ticket_id: TicketId,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            ticket_id,
        }
    }
}
