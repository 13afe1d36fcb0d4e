// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ticket subject is empty or invalid.
    InvalidSubject(String),
    /// Ticket caller is empty or invalid.
    InvalidCaller(String),
    /// Owner id is empty or invalid.
    InvalidOwner(String),
    /// Ticket note is empty or invalid.
    InvalidNote(String),
    /// Ticket type string is not recognized.
    InvalidTicketType(String),
    /// Category string is not recognized.
    InvalidCategory(String),
    /// Priority string is not recognized.
    InvalidPriority(String),
    /// State string is not recognized.
    InvalidState(String),
    /// Feedback code string is not recognized.
    InvalidFeedbackCode(String),
    /// Resolution code string is not recognized.
    InvalidResolutionCode(String),
    /// Cancellation code string is not recognized.
    InvalidCancellationCode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSubject(msg) => write!(f, "Invalid subject: {msg}"),
            Self::InvalidCaller(msg) => write!(f, "Invalid caller: {msg}"),
            Self::InvalidOwner(msg) => write!(f, "Invalid owner: {msg}"),
            Self::InvalidNote(msg) => write!(f, "Invalid note: {msg}"),
            Self::InvalidTicketType(msg) => write!(f, "Invalid ticket type: {msg}"),
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidPriority(msg) => write!(f, "Invalid priority: {msg}"),
            Self::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
            Self::InvalidFeedbackCode(msg) => write!(f, "Invalid feedback code: {msg}"),
            Self::InvalidResolutionCode(msg) => write!(f, "Invalid resolution code: {msg}"),
            Self::InvalidCancellationCode(msg) => {
                write!(f, "Invalid cancellation code: {msg}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
