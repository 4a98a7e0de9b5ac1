//! Session token acquisition
//!
//! The issue tracker is not called with a long-lived secret. Instead a
//! static bearer credential is exchanged for a session token once per run.

mod webservice;

pub use webservice::WebserviceTokenProvider;

use crate::error::Result;
use crate::types::SessionToken;
use async_trait::async_trait;

/// Source of session tokens for the issue tracker
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Fetch a fresh session token
    async fn fetch_token(&self) -> Result<SessionToken>;
}
