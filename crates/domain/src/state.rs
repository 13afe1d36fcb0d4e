// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a ticket.
///
/// Explicit lifecycle states govern which commands are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketState {
    /// Initial state after creation. No owner assigned yet.
    #[default]
    New,
    /// An owner is actively working the ticket.
    Working,
    /// Progress is blocked awaiting outside input.
    Feedback,
    /// A resolution has been recorded, pending confirmation.
    Resolved,
    /// Resolution confirmed. May still be reopened.
    Closed,
    /// Canceled. Terminal; no command applies.
    Canceled,
}

impl FromStr for TicketState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Working" => Ok(Self::Working),
            "Feedback" => Ok(Self::Feedback),
            "Resolved" => Ok(Self::Resolved),
            "Closed" => Ok(Self::Closed),
            "Canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidState(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TicketState {
    /// Returns the fixed label for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Working => "Working",
            Self::Feedback => "Feedback",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Canceled => "Canceled",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - New → Working
    /// - Working → Feedback, Resolved, or Canceled
    /// - Feedback → Working
    /// - Resolved → Closed or Working
    /// - Closed → Working
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::New, Self::Working)
                | (Self::Working, Self::Feedback | Self::Resolved | Self::Canceled)
                | (Self::Feedback | Self::Closed, Self::Working)
                | (Self::Resolved, Self::Closed | Self::Working)
        )
    }

    /// Returns true if this state has no outgoing transitions.
    ///
    /// Canceled is the only terminal state; Closed tickets may be reopened.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}
