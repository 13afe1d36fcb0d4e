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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod codes;
mod error;
mod state;
mod ticket;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use codes::{CancellationCode, FeedbackCode, ResolutionCode};
pub use error::DomainError;
pub use state::TicketState;
pub use ticket::Ticket;
pub use types::{Category, Priority, TicketId, TicketIdGenerator, TicketType};
pub use validation::{validate_owner_id, validate_ticket_fields};
