//! Runtime configuration
//!
//! All settings come from the process environment, optionally seeded from a
//! `.env` file. Loading is all-or-nothing: a [`Settings`] value only exists
//! once every required variable is present.

use crate::error::{Error, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Issue tracker base URL
pub const JIRA_URL: &str = "JIRA_URL";
/// Issue tracker username
pub const JIRA_USER: &str = "JIRA_USER";
/// Project the ticket is filed under
pub const JIRA_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";
/// Webservice that hands out session tokens
pub const WEBSERVICE_TOKEN_URL: &str = "WEBSERVICE_TOKEN_URL";
/// Static credential presented to the token webservice
pub const BEARER_TOKEN: &str = "BEARER_TOKEN";
/// Log file of the failed task
pub const LOG_PATH: &str = "LOG_PATH";
/// Optional request timeout, in seconds, for both HTTP calls
pub const HTTP_TIMEOUT_SECS: &str = "TICKET_HTTP_TIMEOUT_SECS";

/// Required variables, in the order they are reported when missing
pub const REQUIRED_VARS: [&str; 6] = [
    JIRA_URL,
    JIRA_USER,
    JIRA_PROJECT_KEY,
    WEBSERVICE_TOKEN_URL,
    BEARER_TOKEN,
    LOG_PATH,
];

/// Fully populated configuration for one run
#[derive(Clone)]
pub struct Settings {
    /// Base URL of the issue tracker, without trailing slash
    pub jira_url: String,
    /// Username for basic auth against the tracker
    pub jira_user: String,
    /// Project key for the new ticket
    pub project_key: String,
    /// Token webservice endpoint
    pub token_url: String,
    /// Credential for the token webservice
    pub bearer_token: String,
    /// Log file whose contents become the ticket body
    pub log_path: PathBuf,
    /// Request timeout; `None` waits indefinitely
    pub http_timeout: Option<Duration>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("jira_url", &self.jira_url)
            .field("jira_user", &self.jira_user)
            .field("project_key", &self.project_key)
            .field("token_url", &self.token_url)
            .field("bearer_token", &"<redacted>")
            .field("log_path", &self.log_path)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    ///
    /// Empty or whitespace-only values count as missing. Credentials, names
    /// and paths are kept exactly as given; only the two URLs are trimmed.
    /// Every missing variable is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let values = REQUIRED_VARS.map(&read);
        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter_map(|(&key, value)| value.is_none().then_some(key))
            .collect();

        let [
            Some(jira_url),
            Some(jira_user),
            Some(project_key),
            Some(token_url),
            Some(bearer_token),
            Some(log_path),
        ] = values
        else {
            return Err(Error::MissingConfiguration(missing));
        };

        validate_url(JIRA_URL, &jira_url)?;
        validate_url(WEBSERVICE_TOKEN_URL, &token_url)?;
        let http_timeout = read(HTTP_TIMEOUT_SECS)
            .map(|raw| parse_timeout(raw.trim()))
            .transpose()?;

        Ok(Self {
            jira_url: jira_url.trim().trim_end_matches('/').to_string(),
            jira_user,
            project_key,
            token_url: token_url.trim().to_string(),
            bearer_token,
            log_path: PathBuf::from(log_path),
            http_timeout,
        })
    }
}

/// Seed the process environment from a `.env` file
///
/// With no explicit path, a `.env` in the working directory is loaded if
/// present. An explicit path that cannot be loaded is an error. Variables
/// already set in the environment are never overridden.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| Error::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "loaded env file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring unreadable .env: {e}"),
        },
    }
    Ok(())
}

fn validate_url(variable: &'static str, raw: &str) -> Result<()> {
    let parsed = Url::parse(raw).map_err(|e| Error::InvalidConfiguration {
        variable,
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidConfiguration {
            variable,
            reason: format!("unsupported scheme `{}`", parsed.scheme()),
        });
    }

    Ok(())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::InvalidConfiguration {
            variable: HTTP_TIMEOUT_SECS,
            reason: format!("expected a positive number of seconds, got `{raw}`"),
        }),
    }
}
