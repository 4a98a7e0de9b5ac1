//! Core types for failticket

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who and what failed, as supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Customer company name
    pub company: String,
    /// Service the task belongs to
    pub service: String,
    /// Server the task ran on
    pub server: String,
    /// Name of the failed task
    pub task: String,
}

/// Short-lived credential returned by the token webservice
///
/// Used once, as the basic-auth password for the issue tracker. `Debug`
/// never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token, trimming surrounding whitespace
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The token text
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Issue created by the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Numeric issue id (as a string, the way Jira returns it)
    #[serde(default)]
    pub id: Option<String>,
    /// Human-facing issue key (e.g., "PROJ-42")
    pub key: String,
    /// REST URL of the new issue
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}
