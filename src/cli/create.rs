//! Create command - file one ticket and record the outcome

use crate::cli::progress::CliProgress;
use crate::cli::style::{cross, Stylize};
use anstream::{eprintln, println};
use failticket::audit::AuditLog;
use failticket::auth::WebserviceTokenProvider;
use failticket::config::{load_env_file, Settings};
use failticket::error::Result;
use failticket::tracker::JiraService;
use failticket::types::{CreatedIssue, Invocation};
use failticket::workflow::{create_ticket, outcome_line};
use std::path::Path;
use std::process::ExitCode;

/// Run the create command
///
/// Every failure stage exits with status 1. The outcome line is recorded in
/// the audit log whether the run succeeded or not.
pub async fn run_create(
    invocation: &Invocation,
    env_file: Option<&Path>,
    audit: &AuditLog,
) -> ExitCode {
    let result = create(invocation, env_file).await;
    let line = outcome_line(&result);

    match &result {
        Ok(_) => println!("{}", line.success()),
        Err(_) => eprintln!("{}", line.error()),
    }

    if let Err(e) = audit.record(invocation, &line).await {
        tracing::error!("{e}");
        eprintln!("{} {}", cross(), e.warn());
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn create(invocation: &Invocation, env_file: Option<&Path>) -> Result<CreatedIssue> {
    // Configuration must be complete before any network or file activity.
    load_env_file(env_file)?;
    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "configuration loaded");

    let tokens = WebserviceTokenProvider::from_settings(&settings);
    let tracker = JiraService::from_settings(&settings);
    let progress = CliProgress::new();

    create_ticket(
        invocation,
        (&settings).into(),
        &tokens,
        &tracker,
        &progress,
    )
    .await
}
