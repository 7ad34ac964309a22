//! Wire DTOs for the articles API.
//!
//! DESIGN
//! ======
//! Request and response bodies are shared by the HTTP client and the local
//! stub server, so both sides derive `Serialize` and `Deserialize`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned article identifier.
pub type ArticleId = u64;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by articles API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("request failed: {0}")]
    Request(String),

    /// The server rejected the token or credentials with 401.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The server returned any other non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// =============================================================================
// ARTICLES
// =============================================================================

/// An article as owned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Some deployments name this field `article_id`.
    #[serde(alias = "article_id")]
    pub id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// Body of `POST /api/articles` and `PUT /api/articles/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl ArticleDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>, topic: Topic) -> Self {
        Self { title: title.into(), text: text.into(), topic: topic.as_str().to_owned() }
    }

    /// True when every field has non-whitespace content.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        [&self.title, &self.text, &self.topic]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self { title: article.title.clone(), text: article.text.clone(), topic: article.topic.clone() }
    }
}

/// Topics accepted by the articles API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    React,
    JavaScript,
    Node,
}

impl Topic {
    pub const ALL: [Self; 3] = [Self::React, Self::JavaScript, Self::Node];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::JavaScript => "JavaScript",
            Self::Node => "Node",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic '{0}' (expected React, JavaScript or Node)")]
pub struct TopicParseError(pub String);

impl FromStr for Topic {
    type Err = TopicParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == raw.trim())
            .ok_or_else(|| TopicParseError(raw.to_owned()))
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /api/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
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

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Bare `{message}` body: delete responses and every error body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
