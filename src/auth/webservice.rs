//! Token webservice client

use crate::auth::TokenProvider;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::http::build_client;
use crate::types::SessionToken;
use async_trait::async_trait;
use reqwest::Client;

/// Exchanges the configured bearer credential for a session token
pub struct WebserviceTokenProvider {
    client: Client,
    url: String,
    bearer: String,
}

impl WebserviceTokenProvider {
    /// Create a provider for an explicit endpoint and credential
    pub fn new(client: Client, url: String, bearer: String) -> Self {
        Self {
            client,
            url,
            bearer,
        }
    }

    /// Create a provider from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            build_client(settings.http_timeout),
            settings.token_url.clone(),
            settings.bearer_token.clone(),
        )
    }
}

#[async_trait]
impl TokenProvider for WebserviceTokenProvider {
    async fn fetch_token(&self) -> Result<SessionToken> {
        tracing::debug!(url = %self.url, "requesting session token");

        let body = self
            .client
            .get(&self.url)
            .bearer_auth(&self.bearer)
            .send()
            .await
            .map_err(|e| Error::TokenFetch(e.into()))?
            .error_for_status()
            .map_err(|e| Error::TokenFetch(e.into()))?
            .text()
            .await
            .map_err(|e| Error::TokenFetch(e.into()))?;

        Ok(SessionToken::new(&body))
    }
}
