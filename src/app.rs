//! Root client controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session, the article cache, and the UI status, and runs
//! every request against the articles API. Presentational layers call its
//! operations and render the `ClientState` snapshots it publishes.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged and the spinner is cleared; nothing else in
//! the UI state changes. The one special case is a 401 while listing
//! articles, which drops the stored token and routes back to login. Every
//! operation still returns its error so non-UI callers can act on it.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use tokio::sync::watch;

use crate::net::api::ArticlesApi;
use crate::net::types::{ApiError, Article, ArticleDraft, ArticleId, Credentials};
use crate::session::Session;
use crate::state::ClientState;
use crate::state::articles::ArticleCache;
use crate::state::route::Route;
use crate::state::status::UiStatus;
use crate::storage::{Storage, StorageError};

/// Status message shown after logging out.
pub const GOODBYE_MESSAGE: &str = "GoodBye!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("not logged in")]
    NotAuthenticated,
}

pub struct App<A, S> {
    api: A,
    session: Session<S>,
    state: watch::Sender<ClientState>,
}

impl<A: ArticlesApi, S: Storage> App<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        let (state, _) = watch::channel(ClientState::default());
        Self { api, session: Session::new(storage), state }
    }

    // =========================================================================
    // OBSERVATION
    // =========================================================================

    /// Receiver that sees every state transition, spinner toggles included.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> UiStatus {
        self.state.borrow().status.clone()
    }

    pub fn route(&self) -> Route {
        self.state.borrow().route
    }

    pub fn articles(&self) -> ArticleCache {
        self.state.borrow().articles.clone()
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // =========================================================================
    // NAVIGATION & SELECTION
    // =========================================================================

    /// Move to `route`, applying the private-route guard. Returns where the
    /// client actually landed.
    pub fn navigate(&self, route: Route) -> Route {
        let landed = route.guard(self.is_authenticated());
        tracing::debug!(path = landed.path(), "navigated");
        self.modify(|state| state.route = landed);
        landed
    }

    /// Load an article into (or, with `None`, clear) the edit form.
    pub fn select_article(&self, id: Option<ArticleId>) {
        self.modify(|state| state.status.current_article_id = id);
    }

    /// The cached article currently selected for editing.
    pub fn current_article(&self) -> Option<Article> {
        let state = self.state.borrow();
        let id = state.status.current_article_id?;
        state.articles.get(id).cloned()
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Exchange credentials for a token, persist it, and open the articles view.
    ///
    /// # Errors
    ///
    /// Returns the API or storage error after logging it.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        self.modify(|state| state.status.begin(true));
        let result = self.try_login(credentials).await;
        self.finish(result, "login")
    }

    async fn try_login(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        let resp = self.api.login(credentials).await?;
        if resp.token.trim().is_empty() {
            return Err(ApiError::Parse("login response carried no token".to_owned()).into());
        }
        self.session.store(&resp.token)?;
        tracing::info!(username = %credentials.username, "logged in");
        let landed = Route::Articles.guard(self.session.is_authenticated());
        self.modify(|state| {
            state.status.set_message(resp.message);
            state.route = landed;
        });
        Ok(())
    }

    /// Drop the stored token and return to login. No-op without a token.
    ///
    /// Returns whether a session was actually ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be read or removed.
    pub fn logout(&mut self) -> Result<bool, AppError> {
        if self.session.token()?.is_none() {
            return Ok(false);
        }
        self.session.clear()?;
        tracing::info!("logged out");
        self.modify(|state| {
            state.status.set_message(GOODBYE_MESSAGE);
            state.route = Route::Login;
        });
        Ok(true)
    }

    // =========================================================================
    // ARTICLES
    // =========================================================================

    /// Fetch every article, replacing the cache and the status message.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` without a token, otherwise the API error.
    pub async fn list(&mut self) -> Result<(), AppError> {
        self.fetch_articles(true).await
    }

    /// Like [`App::list`], but keeps the current status message.
    ///
    /// # Errors
    ///
    /// Same as [`App::list`].
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.fetch_articles(false).await
    }

    async fn fetch_articles(&mut self, replace_message: bool) -> Result<(), AppError> {
        self.modify(|state| state.status.begin(replace_message));
        let result = self.try_fetch_articles(replace_message).await;
        self.finish(result, "list articles")
    }

    async fn try_fetch_articles(&mut self, replace_message: bool) -> Result<(), AppError> {
        let token = self.require_token()?;
        match self.api.list_articles(&token).await {
            Ok(resp) => {
                self.modify(|state| {
                    state.articles.replace_all(resp.articles);
                    if replace_message {
                        state.status.set_message(resp.message);
                    }
                });
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                self.expire_session();
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Post a new article and append the server's copy to the cache.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` without a token, otherwise the API error.
    pub async fn create(&mut self, draft: &ArticleDraft) -> Result<(), AppError> {
        self.modify(|state| state.status.begin(true));
        let result = self.try_create(draft).await;
        self.finish(result, "create article")
    }

    async fn try_create(&mut self, draft: &ArticleDraft) -> Result<(), AppError> {
        let token = self.require_token()?;
        let resp = self.api.create_article(&token, draft).await?;
        tracing::info!(id = resp.article.id, "article created");
        self.modify(|state| {
            state.status.set_message(resp.message);
            state.articles.push(resp.article);
        });
        Ok(())
    }

    /// Replace an article, swap the server's copy into the cache, and clear
    /// the edit selection.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` without a token, otherwise the API error.
    pub async fn update(&mut self, id: ArticleId, draft: &ArticleDraft) -> Result<(), AppError> {
        self.modify(|state| state.status.begin(true));
        let result = self.try_update(id, draft).await;
        self.finish(result, "update article")
    }

    async fn try_update(&mut self, id: ArticleId, draft: &ArticleDraft) -> Result<(), AppError> {
        let token = self.require_token()?;
        let resp = self.api.update_article(&token, id, draft).await?;
        tracing::info!(id, "article updated");
        self.modify(|state| {
            state.status.set_message(resp.message);
            state.status.current_article_id = None;
            state.articles.upsert(resp.article);
        });
        Ok(())
    }

    /// Delete an article, then re-fetch the list keeping the delete message.
    ///
    /// # Errors
    ///
    /// Returns the delete error, or the re-fetch error if the delete succeeded.
    pub async fn delete(&mut self, id: ArticleId) -> Result<(), AppError> {
        self.modify(|state| state.status.begin(true));
        let result = self.try_delete(id).await;
        self.finish(result, "delete article")?;
        self.refresh().await
    }

    async fn try_delete(&mut self, id: ArticleId) -> Result<(), AppError> {
        let token = self.require_token()?;
        let resp = self.api.delete_article(&token, id).await?;
        tracing::info!(id, "article deleted");
        self.modify(|state| {
            state.status.set_message(resp.message);
            state.articles.remove(id);
            if state.status.current_article_id == Some(id) {
                state.status.current_article_id = None;
            }
        });
        Ok(())
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn modify(&self, f: impl FnOnce(&mut ClientState)) {
        self.state.send_modify(f);
    }

    /// Token for an authenticated call; without one, route to login.
    fn require_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.session.token()? {
            return Ok(token);
        }
        self.modify(|state| state.route = Route::Login);
        Err(AppError::NotAuthenticated)
    }

    fn expire_session(&mut self) {
        tracing::warn!("token rejected; returning to login");
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "failed to clear rejected token");
        }
        self.modify(|state| state.route = Route::Login);
    }

    fn finish(&self, result: Result<(), AppError>, op: &'static str) -> Result<(), AppError> {
        if let Err(e) = &result {
            tracing::error!(error = %e, op, "request failed");
        }
        self.modify(|state| state.status.finish());
        result
    }
}
