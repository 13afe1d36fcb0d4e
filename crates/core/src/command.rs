// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use svc_ticket_domain::{
    CancellationCode, DomainError, FeedbackCode, ResolutionCode, validate_owner_id,
};

/// A command represents caller or agent intent as data only.
///
/// Commands are the only way to request ticket state changes. Each variant
/// carries the supporting code its transition needs, so a command cannot be
/// built with a missing code. Every command may carry an optional note that
/// is appended to the ticket when the transition succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assign an owner to a new ticket and start work on it.
    Process {
        /// The owner id to assign. Must not be empty.
        owner: String,
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
    /// Park a working ticket while awaiting outside input.
    Feedback {
        /// Why the ticket is waiting.
        code: FeedbackCode,
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
    /// Record a resolution on a working ticket.
    Resolve {
        /// How the ticket was resolved.
        code: ResolutionCode,
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
    /// Confirm the current stage: feedback received on a Feedback ticket, or
    /// resolution accepted on a Resolved ticket.
    Confirm {
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
    /// Reopen a resolved or closed ticket for more work.
    Reopen {
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
    /// Cancel a working ticket.
    Cancel {
        /// Why the ticket was canceled.
        code: CancellationCode,
        /// An optional note to append to the ticket.
        note: Option<String>,
    },
}

impl Command {
    /// Creates a validated Process command.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner id to assign
    /// * `note` - An optional note
    ///
    /// # Returns
    ///
    /// * `Ok(Command::Process)` if the owner id is valid
    /// * `Err(DomainError::InvalidOwner)` if the owner id is empty
    ///
    /// # Errors
    ///
    /// Returns an error if the owner id is empty.
    pub fn process(owner: String, note: Option<String>) -> Result<Self, DomainError> {
        validate_owner_id(&owner)?;
        Ok(Self::Process { owner, note })
    }

    /// Creates a Feedback command.
    #[must_use]
    pub const fn feedback(code: FeedbackCode, note: Option<String>) -> Self {
        Self::Feedback { code, note }
    }

    /// Creates a Resolve command.
    #[must_use]
    pub const fn resolve(code: ResolutionCode, note: Option<String>) -> Self {
        Self::Resolve { code, note }
    }

    /// Creates a Confirm command.
    #[must_use]
    pub const fn confirm(note: Option<String>) -> Self {
        Self::Confirm { note }
    }

    /// Creates a Reopen command.
    #[must_use]
    pub const fn reopen(note: Option<String>) -> Self {
        Self::Reopen { note }
    }

    /// Creates a Cancel command.
    #[must_use]
    pub const fn cancel(code: CancellationCode, note: Option<String>) -> Self {
        Self::Cancel { code, note }
    }

    /// Returns the fixed name of this command.
    ///
    /// Used for audit actions and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Process { .. } => "Process",
            Self::Feedback { .. } => "Feedback",
            Self::Resolve { .. } => "Resolve",
            Self::Confirm { .. } => "Confirm",
            Self::Reopen { .. } => "Reopen",
            Self::Cancel { .. } => "Cancel",
        }
    }

    /// Returns the note attached to this command, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Process { note, .. }
            | Self::Feedback { note, .. }
            | Self::Resolve { note, .. }
            | Self::Confirm { note }
            | Self::Reopen { note }
            | Self::Cancel { note, .. } => note.as_deref(),
        }
    }
}
