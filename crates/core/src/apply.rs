// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use svc_ticket_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use svc_ticket_domain::{Ticket, TicketState, validate_owner_id, validate_ticket_fields};

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The input ticket is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The ticket after the transition.
    pub new_ticket: Ticket,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Converts a ticket to a snapshot for audit purposes.
fn snapshot(ticket: &Ticket) -> StateSnapshot {
    StateSnapshot::new(format!(
        "state={},owner={},notes={}",
        ticket.state.as_str(),
        ticket.owner,
        ticket.notes.len()
    ))
}

/// Appends the command note, when present, to a ticket's notes.
fn append_note(notes: &mut Vec<String>, note: Option<String>) {
    if let Some(note) = note {
        notes.push(note);
    }
}

/// Applies a command to a ticket, producing a new ticket and audit event.
///
/// This is the only way a ticket changes after creation. The mapping from
/// (current state, command) to (next state, field mutations) is:
///
/// - New + Process → Working, owner assigned
/// - Working + Feedback → Feedback, feedback code set
/// - Working + Resolve → Resolved, resolution code set
/// - Working + Cancel → Canceled, cancellation code set
/// - Feedback + Confirm → Working, feedback code cleared
/// - Resolved + Confirm → Closed, resolution code retained
/// - Resolved + Reopen → Working, resolution code cleared
/// - Closed + Reopen → Working, resolution code cleared
///
/// Every successful transition appends the command's note (when present) to
/// the ticket and produces exactly one audit event.
///
/// # Arguments
///
/// * `ticket` - The current ticket (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor issuing this command
/// * `cause` - The cause or reason for this command
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ticket and audit event
/// * `Err(CoreError)` if the command is invalid for the current state
///
/// # Errors
///
/// Returns an error if:
/// - The command is not valid for the ticket's current state
/// - The command violates domain rules (e.g., an empty owner id)
#[allow(clippy::too_many_lines)]
pub fn apply(
    ticket: &Ticket,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    // Field invariants must hold before any transition is considered
    validate_ticket_fields(ticket)?;

    match command {
        Command::Process { owner, note } => {
            // Process is only valid on a new ticket
            if ticket.state != TicketState::New {
                return Err(CoreError::UnsupportedCommand {
                    state: ticket.state,
                    command: "Process",
                });
            }

            validate_owner_id(&owner)?;

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = TicketState::Working;
            new_ticket.owner = owner;
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Process"),
                Some(format!("Assigned owner '{}'", new_ticket.owner)),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Process command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::Feedback { code, note } => {
            // Feedback is only valid on a working ticket
            if ticket.state != TicketState::Working {
                return Err(CoreError::UnsupportedCommand {
                    state: ticket.state,
                    command: "Feedback",
                });
            }

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = TicketState::Feedback;
            new_ticket.feedback_code = Some(code);
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Feedback"),
                Some(format!("Awaiting with code '{}'", code.as_str())),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Feedback command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::Resolve { code, note } => {
            // Resolve is only valid on a working ticket
            if ticket.state != TicketState::Working {
                return Err(CoreError::UnsupportedCommand {
                    state: ticket.state,
                    command: "Resolve",
                });
            }

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = TicketState::Resolved;
            new_ticket.resolution_code = Some(code);
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Resolve"),
                Some(format!("Resolved with code '{}'", code.as_str())),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Resolve command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::Confirm { note } => {
            // Confirm advances Feedback back to Working, or Resolved to Closed
            let next: TicketState = match ticket.state {
                TicketState::Feedback => TicketState::Working,
                TicketState::Resolved => TicketState::Closed,
                _ => {
                    return Err(CoreError::UnsupportedCommand {
                        state: ticket.state,
                        command: "Confirm",
                    });
                }
            };

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = next;
            // Feedback is consumed; a confirmed resolution stays on the ticket
            if ticket.state == TicketState::Feedback {
                new_ticket.feedback_code = None;
            }
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Confirm"),
                Some(format!("Confirmed from state '{}'", ticket.state.as_str())),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Confirm command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::Reopen { note } => {
            // Reopen returns a resolved or closed ticket to Working
            if ticket.state != TicketState::Resolved && ticket.state != TicketState::Closed {
                return Err(CoreError::UnsupportedCommand {
                    state: ticket.state,
                    command: "Reopen",
                });
            }

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = TicketState::Working;
            new_ticket.resolution_code = None;
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Reopen"),
                Some(format!("Reopened from state '{}'", ticket.state.as_str())),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Reopen command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
        Command::Cancel { code, note } => {
            // Cancel is only valid on a working ticket; Canceled is terminal
            if ticket.state != TicketState::Working {
                return Err(CoreError::UnsupportedCommand {
                    state: ticket.state,
                    command: "Cancel",
                });
            }

            let before: StateSnapshot = snapshot(ticket);

            let mut new_ticket: Ticket = ticket.clone();
            new_ticket.state = TicketState::Canceled;
            new_ticket.cancellation_code = Some(code);
            append_note(&mut new_ticket.notes, note);

            let after: StateSnapshot = snapshot(&new_ticket);

            let action: Action = Action::new(
                String::from("Cancel"),
                Some(format!("Canceled with code '{}'", code.as_str())),
            );

            tracing::debug!(
                ticket_id = %ticket.id,
                from = %ticket.state,
                to = %new_ticket.state,
                "applied Cancel command"
            );

            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, ticket.id);

            Ok(TransitionResult {
                new_ticket,
                audit_event,
            })
        }
    }
}
