// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supporting codes attached to tickets by lifecycle transitions.
//!
//! A ticket carries at most one of these at a time: a feedback code while in
//! the Feedback state, a resolution code while Resolved or Closed, and a
//! cancellation code once Canceled.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reason a ticket is waiting in the Feedback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackCode {
    /// Waiting on information from the caller.
    AwaitingCaller,
    /// Waiting on a scheduled change.
    AwaitingChange,
    /// Waiting on an external provider.
    AwaitingProvider,
}

impl FeedbackCode {
    /// Returns the display string for this feedback code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingCaller => "Awaiting Caller",
            Self::AwaitingChange => "Awaiting Change",
            Self::AwaitingProvider => "Awaiting Provider",
        }
    }
}

impl FromStr for FeedbackCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Awaiting Caller" => Ok(Self::AwaitingCaller),
            "Awaiting Change" => Ok(Self::AwaitingChange),
            "Awaiting Provider" => Ok(Self::AwaitingProvider),
            _ => Err(DomainError::InvalidFeedbackCode(format!(
                "Unknown feedback code: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a ticket was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionCode {
    /// Request work was completed.
    Completed,
    /// Request work was not completed.
    NotCompleted,
    /// Incident was solved.
    Solved,
    /// Incident was worked around rather than solved.
    Workaround,
    /// Incident was not solved.
    NotSolved,
    /// The caller closed the ticket themselves.
    CallerClosed,
}

impl ResolutionCode {
    /// Returns the display string for this resolution code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::NotCompleted => "Not Completed",
            Self::Solved => "Solved",
            Self::Workaround => "Workaround",
            Self::NotSolved => "Not Solved",
            Self::CallerClosed => "Caller Closed",
        }
    }
}

impl FromStr for ResolutionCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(Self::Completed),
            "Not Completed" => Ok(Self::NotCompleted),
            "Solved" => Ok(Self::Solved),
            "Workaround" => Ok(Self::Workaround),
            "Not Solved" => Ok(Self::NotSolved),
            "Caller Closed" => Ok(Self::CallerClosed),
            _ => Err(DomainError::InvalidResolutionCode(format!(
                "Unknown resolution code: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for ResolutionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a ticket was canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancellationCode {
    /// Duplicate of an existing ticket.
    Duplicate,
    /// Not an appropriate use of the ticket system.
    Inappropriate,
}

impl CancellationCode {
    /// Returns the display string for this cancellation code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Duplicate => "Duplicate",
            Self::Inappropriate => "Inappropriate",
        }
    }
}

impl FromStr for CancellationCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Duplicate" => Ok(Self::Duplicate),
            "Inappropriate" => Ok(Self::Inappropriate),
            _ => Err(DomainError::InvalidCancellationCode(format!(
                "Unknown cancellation code: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for CancellationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
