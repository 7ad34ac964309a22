//! REST transport for the articles API.
//!
//! DESIGN
//! ======
//! `ArticlesApi` is the seam between the client state machine and the
//! network. `HttpApi` is the `reqwest` implementation; tests substitute an
//! in-memory mock. Status handling and body parsing are pure functions so
//! they can be exercised without a server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::types::{
    ApiError, ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse,
    MessageResponse,
};
use crate::config::ClientConfig;

/// Operations the client performs against the articles API.
///
/// Every call except `login` carries the session token.
#[async_trait::async_trait]
pub trait ArticlesApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    async fn list_articles(&self, token: &str) -> Result<ArticlesResponse, ApiError>;

    async fn create_article(&self, token: &str, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError>;

    async fn update_article(
        &self,
        token: &str,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError>;

    async fn delete_article(&self, token: &str, id: ArticleId) -> Result<MessageResponse, ApiError>;
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn login_url(base_url: &str) -> String {
    format!("{base_url}/api/login")
}

fn articles_url(base_url: &str) -> String {
    format!("{base_url}/api/articles")
}

fn article_url(base_url: &str, id: ArticleId) -> String {
    format!("{base_url}/api/articles/{id}")
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for `config.base_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        parse_body(status, &text)
    }
}

#[async_trait::async_trait]
impl ArticlesApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username = %credentials.username, "POST /api/login");
        let request = self.http.post(login_url(&self.base_url)).json(credentials);
        self.send(request).await
    }

    async fn list_articles(&self, token: &str) -> Result<ArticlesResponse, ApiError> {
        tracing::debug!("GET /api/articles");
        let request = self.http.get(articles_url(&self.base_url)).bearer_auth(token);
        self.send(request).await
    }

    async fn create_article(&self, token: &str, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError> {
        tracing::debug!(title = %draft.title, "POST /api/articles");
        let request = self
            .http
            .post(articles_url(&self.base_url))
            .bearer_auth(token)
            .json(draft);
        self.send(request).await
    }

    async fn update_article(
        &self,
        token: &str,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError> {
        tracing::debug!(%id, "PUT /api/articles/:id");
        let request = self
            .http
            .put(article_url(&self.base_url, id))
            .bearer_auth(token)
            .json(draft);
        self.send(request).await
    }

    async fn delete_article(&self, token: &str, id: ArticleId) -> Result<MessageResponse, ApiError> {
        tracing::debug!(%id, "DELETE /api/articles/:id");
        let request = self
            .http
            .delete(article_url(&self.base_url, id))
            .bearer_auth(token);
        self.send(request).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Map a status + body pair to the typed success body or an `ApiError`.
fn parse_body<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized { message: error_message(status, text) });
    }
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: error_message(status, text) });
    }

    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Prefer the server's `{message}`; fall back to the raw body, then the reason phrase.
fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<MessageResponse>(text) {
        return body.message;
    }
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }
    status.canonical_reason().unwrap_or("unknown error").to_owned()
}
