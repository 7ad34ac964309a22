//! Stub route handlers for login and article CRUD.

use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Json, Response};

use super::state::StubState;
use crate::net::types::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse, MessageResponse, Topic,
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StubError {
    #[error("Ouch: missing or invalid token")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Article {0} not found")]
    NotFound(ArticleId),
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(MessageResponse { message: self.to_string() })).into_response()
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Username behind the request's token. Use as a handler parameter to
/// require authentication.
pub struct StubUser {
    pub username: String,
}

impl<S> axum::extract::FromRequestParts<S> for StubUser
where
    StubState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StubError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(token_from_header)
            .unwrap_or_default();
        if token.is_empty() {
            return Err(StubError::Unauthorized);
        }

        let stub = StubState::from_ref(state);
        let username = stub
            .session_user(token)
            .await
            .ok_or(StubError::Unauthorized)?;
        Ok(Self { username })
    }
}

/// Accepts both `Bearer <token>` and a bare token.
pub(crate) fn token_from_header(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix("Bearer ").unwrap_or(raw).trim()
}

// =============================================================================
// VALIDATION
// =============================================================================

pub(crate) fn validate_credentials(credentials: &Credentials) -> Result<(), StubError> {
    if credentials.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(StubError::Validation(format!(
            "username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    if credentials.password.trim().chars().count() < MIN_PASSWORD_LEN {
        return Err(StubError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Trimmed copy of a draft with a known topic.
pub(crate) fn validate_draft(draft: &ArticleDraft) -> Result<ArticleDraft, StubError> {
    let title = draft.title.trim();
    let text = draft.text.trim();
    if title.is_empty() || text.is_empty() {
        return Err(StubError::Validation("title and text are required".to_owned()));
    }
    let topic = draft
        .topic
        .parse::<Topic>()
        .map_err(|e| StubError::Validation(e.to_string()))?;
    Ok(ArticleDraft { title: title.to_owned(), text: text.to_owned(), topic: topic.as_str().to_owned() })
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/login`: open a session.
pub async fn login(
    State(state): State<StubState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, StubError> {
    validate_credentials(&credentials)?;
    let username = credentials.username.trim();
    let token = state.open_session(username).await;
    tracing::info!(%username, "stub login");
    Ok(Json(LoginResponse { message: format!("Here is your token, {username}!"), token }))
}

/// `GET /api/articles`: list every article.
pub async fn list_articles(State(state): State<StubState>, user: StubUser) -> Json<ArticlesResponse> {
    let articles = state.data.read().await.articles.clone();
    Json(ArticlesResponse { message: format!("Here are your articles, {}!", user.username), articles })
}

/// `POST /api/articles`: create an article.
pub async fn create_article(
    State(state): State<StubState>,
    user: StubUser,
    Json(draft): Json<ArticleDraft>,
) -> Result<(StatusCode, Json<ArticleResponse>), StubError> {
    let draft = validate_draft(&draft)?;
    let article = state
        .data
        .write()
        .await
        .insert(draft.title, draft.text, draft.topic);
    tracing::info!(id = article.id, "stub article created");
    Ok((
        StatusCode::CREATED,
        Json(ArticleResponse { message: format!("Well done, {}. Great article!", user.username), article }),
    ))
}

/// `PUT /api/articles/:id`: replace an article.
pub async fn update_article(
    State(state): State<StubState>,
    user: StubUser,
    Path(id): Path<ArticleId>,
    Json(draft): Json<ArticleDraft>,
) -> Result<Json<ArticleResponse>, StubError> {
    let draft = validate_draft(&draft)?;
    let mut data = state.data.write().await;
    let slot = data
        .articles
        .iter_mut()
        .find(|article| article.id == id)
        .ok_or(StubError::NotFound(id))?;
    slot.title = draft.title;
    slot.text = draft.text;
    slot.topic = draft.topic;
    let article = slot.clone();
    Ok(Json(ArticleResponse { message: format!("Nice update, {}!", user.username), article }))
}

/// `DELETE /api/articles/:id`: delete an article.
pub async fn delete_article(
    State(state): State<StubState>,
    user: StubUser,
    Path(id): Path<ArticleId>,
) -> Result<Json<MessageResponse>, StubError> {
    let mut data = state.data.write().await;
    let index = data
        .articles
        .iter()
        .position(|article| article.id == id)
        .ok_or(StubError::NotFound(id))?;
    data.articles.remove(index);
    Ok(Json(MessageResponse { message: format!("Article {id} was deleted, {}!", user.username) }))
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
