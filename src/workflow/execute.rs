//! Pipeline execution
//!
//! Runs the stages strictly in order: token, log, submission. The first
//! failure stops the pipeline, so a failed token fetch never touches the log
//! file and a failed log read never reaches the tracker.

use crate::auth::TokenProvider;
use crate::config::Settings;
use crate::error::Result;
use crate::tasklog::read_task_log;
use crate::tracker::{IssuePayload, IssueTracker};
use crate::types::{CreatedIssue, Invocation};
use crate::workflow::{Phase, ProgressCallback};
use std::path::Path;

/// Inputs of one run that do not come from the command line
#[derive(Debug, Clone, Copy)]
pub struct TicketTarget<'a> {
    /// Project key for the new ticket
    pub project_key: &'a str,
    /// Log file whose contents become the ticket body
    pub log_path: &'a Path,
}

impl<'a> From<&'a Settings> for TicketTarget<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            project_key: &settings.project_key,
            log_path: &settings.log_path,
        }
    }
}

/// Fetch a token, read the log and create the ticket
pub async fn create_ticket(
    invocation: &Invocation,
    target: TicketTarget<'_>,
    tokens: &dyn TokenProvider,
    tracker: &dyn IssueTracker,
    progress: &dyn ProgressCallback,
) -> Result<CreatedIssue> {
    let result = run_stages(invocation, target, tokens, tracker, progress).await;
    progress.on_phase(Phase::Complete).await;

    match &result {
        Ok(issue) => tracing::info!(key = %issue.key, "ticket created"),
        Err(e) => tracing::warn!("ticket pipeline failed: {e}"),
    }
    result
}

async fn run_stages(
    invocation: &Invocation,
    target: TicketTarget<'_>,
    tokens: &dyn TokenProvider,
    tracker: &dyn IssueTracker,
    progress: &dyn ProgressCallback,
) -> Result<CreatedIssue> {
    progress.on_phase(Phase::FetchingToken).await;
    let token = tokens.fetch_token().await?;

    progress.on_phase(Phase::ReadingLog).await;
    let log = read_task_log(target.log_path).await?;

    progress.on_phase(Phase::CreatingIssue).await;
    let payload = IssuePayload::for_failed_task(target.project_key, invocation, &log);
    tracker.create_issue(&payload, &token).await
}
