//! failticket - open a Jira ticket from a failed task's log
//!
//! The library exposes each stage of the pipeline (configuration, token
//! exchange, log reading, ticket submission, audit recording) so the
//! `failticket` binary stays a thin shell around them.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
mod http;
pub mod tasklog;
pub mod tracker;
pub mod types;
pub mod workflow;
