//! Issue tracker services
//!
//! The pipeline only needs to create one issue, so the trait is narrow.
//! [`JiraService`] talks to Jira Cloud's REST v3 API.

mod jira;
mod payload;

pub use jira::JiraService;
pub use payload::{
    ticket_description, ticket_summary, AdfDocument, AdfNode, IssueFields, IssuePayload,
    IssueTypeRef, ProjectRef, ISSUE_TYPE,
};

use crate::error::Result;
use crate::types::{CreatedIssue, SessionToken};
use async_trait::async_trait;

/// Issue tracker operations
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Create an issue, authenticating with the session token
    async fn create_issue(
        &self,
        payload: &IssuePayload,
        token: &SessionToken,
    ) -> Result<CreatedIssue>;
}
