//! OZ API HTTP client.

use std::sync::Arc;

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use crate::api::session::{Credentials, SessionManager};
use crate::api::types::DataResponse;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Builds the error variant for a failed endpoint family.
pub(crate) type ErrorKind = fn(String) -> Error;

/// OZ API client. Every authenticated request goes through the session
/// manager for a currently valid bearer token.
pub struct OzApi {
    client: Client,
    config: ApiConfig,
    sessions: Arc<SessionManager>,
}

impl OzApi {
    /// Create a client and its session manager from configuration.
    pub fn new(config: ApiConfig, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let sessions = Arc::new(SessionManager::new(client.clone(), &config, credentials));
        Ok(Self::with_sessions(client, config, sessions))
    }

    /// Create a client around an existing session manager.
    pub fn with_sessions(client: Client, config: ApiConfig, sessions: Arc<SessionManager>) -> Self {
        Self {
            client,
            config,
            sessions,
        }
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// URL under the core API.
    pub(crate) fn core_url(&self, path: &str) -> String {
        format!("{}{}", self.config.core_url.trim_end_matches('/'), path)
    }

    /// URL under the catalog CDN.
    pub(crate) fn catalog_url(&self, path: &str) -> String {
        format!("{}{}", self.config.catalog_url.trim_end_matches('/'), path)
    }

    /// Make an authenticated GET request.
    async fn get(&self, url: &str) -> Result<Response> {
        let token = self.sessions.bearer_token().await?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Token rejected"
                } else {
                    &body
                }
            )));
        }

        Ok(response)
    }

    /// Authenticated GET returning the `data` member of the response.
    ///
    /// Non-success statuses and unparseable bodies are reported through
    /// `kind`, with `what` naming the resource.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
        kind: ErrorKind,
    ) -> Result<T> {
        let response = self.get(url).await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(kind(format!(
                "Failed to get {}: HTTP {} - {}",
                what,
                status,
                truncate(&text)
            )));
        }

        let parsed: DataResponse<T> = serde_json::from_str(&text).map_err(|e| {
            kind(format!(
                "Failed to parse {}: {} - Response: {}",
                what,
                e,
                truncate(&text)
            ))
        })?;

        Ok(parsed.data)
    }
}

/// Keep error messages readable when the body is large.
fn truncate(text: &str) -> &str {
    match text.char_indices().nth(500) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
