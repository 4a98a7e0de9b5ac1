//! Mock token provider, issue tracker and progress callback
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use failticket::auth::TokenProvider;
use failticket::error::{Error, Result};
use failticket::tracker::{IssuePayload, IssueTracker};
use failticket::types::{CreatedIssue, SessionToken};
use failticket::workflow::{Phase, ProgressCallback};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Token provider returning a fixed token, with call counting
pub struct MockTokenProvider {
    token: String,
    calls: AtomicUsize,
    error: Mutex<Option<String>>,
}

impl MockTokenProvider {
    pub fn returning(token: &str) -> Self {
        Self {
            token: token.to_string(),
            calls: AtomicUsize::new(0),
            error: Mutex::new(None),
        }
    }

    /// Make `fetch_token` fail
    pub fn fail(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn fetch_token(&self) -> Result<SessionToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error.lock().unwrap().as_ref() {
            return Err(Error::TokenFetch(msg.clone().into()));
        }
        Ok(SessionToken::new(&self.token))
    }
}

/// Call record for `create_issue`
#[derive(Debug, Clone)]
pub struct CreateIssueCall {
    pub payload: IssuePayload,
    pub token: String,
}

/// Issue tracker with auto-incrementing keys and call tracking
pub struct MockIssueTracker {
    project: String,
    next_number: AtomicU64,
    create_calls: Mutex<Vec<CreateIssueCall>>,
    error_on_create: Mutex<Option<(String, Option<String>)>>,
}

impl MockIssueTracker {
    pub fn for_project(project: &str) -> Self {
        Self {
            project: project.to_string(),
            next_number: AtomicU64::new(42),
            create_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
        }
    }

    /// Make `create_issue` fail with the given cause and response body
    pub fn fail_create(&self, cause: &str, body: Option<&str>) {
        *self.error_on_create.lock().unwrap() =
            Some((cause.to_string(), body.map(ToString::to_string)));
    }

    pub fn get_create_calls(&self) -> Vec<CreateIssueCall> {
        self.create_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn create_issue(
        &self,
        payload: &IssuePayload,
        token: &SessionToken,
    ) -> Result<CreatedIssue> {
        self.create_calls.lock().unwrap().push(CreateIssueCall {
            payload: payload.clone(),
            token: token.expose().to_string(),
        });

        if let Some((cause, body)) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::TicketSubmission {
                cause: cause.clone(),
                body: body.clone(),
            });
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            id: Some(format!("{}", 10_000 + number)),
            key: format!("{}-{number}", self.project),
            self_url: None,
        })
    }
}

/// Progress callback that records every phase it sees
#[derive(Default)]
pub struct RecordingProgress {
    phases: Mutex<Vec<Phase>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }
}
