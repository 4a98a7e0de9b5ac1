//! Shared HTTP client construction

use reqwest::Client;
use std::time::Duration;

/// Build a client, applying the request timeout when one is configured
pub(crate) fn build_client(timeout: Option<Duration>) -> Client {
    let builder = Client::builder().user_agent(concat!("failticket/", env!("CARGO_PKG_VERSION")));
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().unwrap_or_else(|_| Client::new())
}
