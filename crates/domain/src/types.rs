// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the classification of a ticket.
///
/// Every ticket is either a service request or an incident report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// A request for new service or access.
    Request,
    /// A report of a service disruption.
    Incident,
}

impl TicketType {
    /// Returns the display string for this ticket type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Incident => "Incident",
        }
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Request" => Ok(Self::Request),
            "Incident" => Ok(Self::Incident),
            _ => Err(DomainError::InvalidTicketType(format!(
                "Unknown ticket type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the service category a ticket is filed under.
///
/// Categories are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// General inquiry.
    Inquiry,
    /// Software issue or request.
    Software,
    /// Hardware issue or request.
    Hardware,
    /// Network issue or request.
    Network,
    /// Database issue or request.
    Database,
}

impl Category {
    /// Returns the display string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry",
            Self::Software => "Software",
            Self::Hardware => "Hardware",
            Self::Network => "Network",
            Self::Database => "Database",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Inquiry" => Ok(Self::Inquiry),
            "Software" => Ok(Self::Software),
            "Hardware" => Ok(Self::Hardware),
            "Network" => Ok(Self::Network),
            "Database" => Ok(Self::Database),
            _ => Err(DomainError::InvalidCategory(format!(
                "Unknown category: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the urgency assigned to a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Requires immediate attention.
    Urgent,
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

impl Priority {
    /// Returns the display string for this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Urgent" => Ok(Self::Urgent),
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(DomainError::InvalidPriority(format!(
                "Unknown priority: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a unique ticket identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId {
    /// The numeric identifier value.
    value: u32,
}

impl TicketId {
    /// Creates a new `TicketId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier value
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Generates unique, auto-incrementing ticket identifiers.
///
/// The generator is explicit injected state rather than a process-wide
/// counter. Callers that need serialized id generation across threads must
/// wrap the generator themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdGenerator {
    /// The id value that will be handed out next.
    next: u32,
}

impl TicketIdGenerator {
    /// Creates a generator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a generator whose first id is `next`.
    ///
    /// # Arguments
    ///
    /// * `next` - The id value to hand out next
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Returns the next unique `TicketId` and advances the counter.
    pub const fn next_id(&mut self) -> TicketId {
        let id: TicketId = TicketId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for TicketIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
