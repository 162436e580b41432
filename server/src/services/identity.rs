//! Upstream identity client backing `/api/auth/me`.
//!
//! The host does not own sessions. It forwards the caller's credentials to a
//! configured "who am I" endpoint and projects the answer onto the three
//! fields the console shell reads. Pure parsing lives in `project_session`
//! for testability.

use std::time::Duration;

use axum::http::{HeaderMap, StatusCode, header};
use client::net::types::UserSession;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The upstream answered with a non-success status.
    #[error("identity upstream rejected request: status {0}")]
    Rejected(u16),
    /// The upstream could not be reached or timed out.
    #[error("identity upstream request failed: {0}")]
    Request(String),
    /// The upstream body is not a session.
    #[error("identity upstream body malformed: {0}")]
    Parse(String),
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl IdentityError {
    /// Status returned to the browser for this failure.
    ///
    /// Upstream rejections pass through unchanged so the shell sees the same
    /// 401/403 the provider produced.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(status) => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Request(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    upstream_url: String,
}

impl IdentityClient {
    /// Build a client for `upstream_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(upstream_url: String, timeout_secs: u64) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream_url })
    }

    #[must_use]
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Resolve the caller's identity using their forwarded credentials.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for non-success upstream statuses, `Request` for
    /// transport failures, and `Parse` for bodies missing session fields.
    pub async fn fetch_me(&self, incoming: &HeaderMap) -> Result<UserSession, IdentityError> {
        let response = self
            .http
            .get(&self.upstream_url)
            .header(header::ACCEPT, "application/json")
            .headers(forwarded_headers(incoming))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Rejected(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        project_session(&text)
    }
}

/// Copy only credential headers from the browser request.
pub(crate) fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [header::COOKIE, header::AUTHORIZATION] {
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Parse an upstream body into the session fields, dropping everything else.
pub(crate) fn project_session(body: &str) -> Result<UserSession, IdentityError> {
    serde_json::from_str::<UserSession>(body).map_err(|e| IdentityError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
