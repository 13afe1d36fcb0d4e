// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, apply};
use svc_ticket_audit::{Actor, Cause};
use svc_ticket_domain::{Category, Priority, Ticket, TicketIdGenerator, TicketType};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("agent-7"), String::from("agent"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("call-19"), String::from("Caller phoned in"))
}

pub fn create_new_ticket() -> Ticket {
    let mut generator: TicketIdGenerator = TicketIdGenerator::new();
    Ticket::new(
        generator.next_id(),
        TicketType::Incident,
        String::from("Printer offline"),
        String::from("caller-1"),
        Category::Hardware,
        Priority::Medium,
        String::from("Third floor printer is not responding."),
    )
    .unwrap()
}

pub fn create_working_ticket() -> Ticket {
    let ticket: Ticket = create_new_ticket();
    let command: Command = Command::process(String::from("alice"), None).unwrap();

    apply(&ticket, command, create_test_actor(), create_test_cause())
        .unwrap()
        .new_ticket
}
