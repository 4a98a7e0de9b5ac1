//! CLI commands
//!
//! Command implementations for the `failticket` binary.

mod create;
mod progress;
mod style;

pub use create::run_create;
