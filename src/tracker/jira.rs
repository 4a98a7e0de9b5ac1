//! Jira Cloud service implementation

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::http::build_client;
use crate::tracker::{IssuePayload, IssueTracker};
use crate::types::{CreatedIssue, SessionToken};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Jira service using reqwest
pub struct JiraService {
    client: Client,
    base_url: String,
    username: String,
}

impl JiraService {
    /// Create a new Jira service
    pub fn new(client: Client, base_url: &str, username: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
        }
    }

    /// Create a Jira service from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            build_client(settings.http_timeout),
            &settings.jira_url,
            settings.jira_user.clone(),
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/3{}", self.base_url, path)
    }
}

fn submission_error(cause: impl ToString, body: Option<String>) -> Error {
    Error::TicketSubmission {
        cause: cause.to_string(),
        body,
    }
}

#[async_trait]
impl IssueTracker for JiraService {
    async fn create_issue(
        &self,
        payload: &IssuePayload,
        token: &SessionToken,
    ) -> Result<CreatedIssue> {
        let url = self.api_url("/issue");
        tracing::debug!(%url, project = %payload.fields.project.key, "creating issue");

        // No response at all: there is no body to report.
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(token.expose()))
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| submission_error(e, None))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| submission_error(format!("HTTP {status}: {e}"), None))?;

        if !status.is_success() {
            return Err(submission_error(format!("HTTP {status}"), Some(body)));
        }

        serde_json::from_str::<CreatedIssue>(&body)
            .map_err(|e| submission_error(format!("respuesta inesperada: {e}"), Some(body)))
    }
}
