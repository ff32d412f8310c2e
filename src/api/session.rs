//! Password-grant authentication and access-token lifecycle.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Duration, Utc};
use reqwest::{header, Client};
use tokio::sync::RwLock;

use crate::api::types::TokenResponse;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Login credentials, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An access token and the wall-clock instant it stops being valid.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token is no longer usable at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Owns the credentials and hands out valid bearer tokens.
pub struct SessionManager {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    user_agent: String,
    credentials: Credentials,
    current: RwLock<Option<Session>>,
    renewals: AtomicU32,
}

impl SessionManager {
    /// Create a manager. No request is made until a token is needed.
    pub fn new(client: Client, config: &ApiConfig, credentials: Credentials) -> Self {
        Self {
            client,
            token_url: format!("{}/oauth2/token", config.core_url.trim_end_matches('/')),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            user_agent: config.user_agent.clone(),
            credentials,
            current: RwLock::new(None),
            renewals: AtomicU32::new(0),
        }
    }

    /// Run the password grant and build a fresh session.
    pub async fn authenticate(&self) -> Result<Session> {
        let requested_at = Utc::now();

        tracing::debug!(
            "POST {} (password grant for {})",
            self.token_url,
            self.credentials.username()
        );

        let response = self
            .client
            .post(&self.token_url)
            .header(header::USER_AGENT, &self.user_agent)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Token response status: {}", status);

        let token: TokenResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Authentication(format!("Unreadable token response (HTTP {}): {}", status, e))
        })?;

        let (access_token, expires_in) = match (token.access_token, token.expires_in) {
            (Some(access_token), Some(expires_in)) if !access_token.is_empty() => {
                (access_token, expires_in)
            }
            _ => return Err(Error::Authentication("Invalid login credentials!".into())),
        };

        if !expires_in.is_finite() || expires_in < 1.0 {
            return Err(Error::Authentication(format!(
                "Token lifetime must be positive (got {} ms)",
                expires_in
            )));
        }

        let expires_at = Duration::try_milliseconds(expires_in as i64)
            .and_then(|lifetime| requested_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                Error::Authentication(format!(
                    "Token lifetime out of range (got {} ms)",
                    expires_in
                ))
            })?;
        tracing::debug!("Access token valid until {}", expires_at);

        Ok(Session::new(access_token, expires_at))
    }

    /// Return `session` if it is still valid, otherwise a renewed one.
    pub async fn ensure_valid(&self, session: Session) -> Result<Session> {
        if !session.is_expired() {
            return Ok(session);
        }

        tracing::debug!("Access token expired at {}, renewing", session.expires_at());
        let renewed = self.authenticate().await?;
        self.renewals.fetch_add(1, Ordering::Relaxed);
        Ok(renewed)
    }

    /// A bearer token that is valid right now.
    ///
    /// Authenticates on first use and renews an expired session before
    /// returning.
    pub async fn bearer_token(&self) -> Result<String> {
        let mut current = self.current.write().await;

        let session = match current.take() {
            Some(session) => self.ensure_valid(session).await?,
            None => self.authenticate().await?,
        };

        let token = session.access_token().to_string();
        *current = Some(session);
        Ok(token)
    }

    /// Snapshot of the current session, if one has been established.
    pub async fn current_session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Number of renewals performed so far (first login excluded).
    pub fn renewals(&self) -> u32 {
        self.renewals.load(Ordering::Relaxed)
    }
}
