//! Ticket pipeline
//!
//! Wires the stages together and renders the result:
//! 1. Token - exchange the bearer credential for a session token
//! 2. Log - read the failed task's log
//! 3. Submission - create the ticket in the tracker

mod execute;
mod outcome;
mod progress;

pub use execute::{create_ticket, TicketTarget};
pub use outcome::{outcome_line, FAILURE_MARK, SUCCESS_MARK};
pub use progress::{NoopProgress, Phase, ProgressCallback};
