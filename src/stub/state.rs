//! In-memory data behind the stub server.
//!
//! DESIGN
//! ======
//! `StubState` is injected into Axum handlers via the `State` extractor.
//! Articles and sessions live behind one `RwLock`; the stub never persists.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use crate::net::types::{Article, ArticleId};

/// Fresh session token: 32 random bytes, hex encoded.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes.iter().fold(String::with_capacity(64), |mut token, b| {
        let _ = write!(token, "{b:02x}");
        token
    })
}

#[derive(Debug, Default)]
pub struct StubData {
    pub articles: Vec<Article>,
    pub next_id: ArticleId,
    /// token -> username. The API has no logout endpoint, so entries live
    /// until the stub exits.
    pub sessions: HashMap<String, String>,
}

impl StubData {
    pub fn insert(&mut self, title: String, text: String, topic: String) -> Article {
        self.next_id += 1;
        let article = Article { id: self.next_id, title, text, topic };
        self.articles.push(article.clone());
        article
    }
}

/// Clone is required by Axum; the data is shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct StubState {
    pub data: Arc<RwLock<StubData>>,
}

impl StubState {
    /// Empty store with no articles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a few sample articles.
    #[must_use]
    pub fn seeded() -> Self {
        let mut data = StubData::default();
        for (title, text, topic) in [
            (
                "Closures",
                "Closures capture their environment and keep it alive after the outer call returns.",
                "JavaScript",
            ),
            ("useEffect", "Effects run after render; return a cleanup to undo subscriptions.", "React"),
            ("Streams", "Readable streams emit data chunks and signal back-pressure.", "Node"),
        ] {
            data.insert(title.to_owned(), text.to_owned(), topic.to_owned());
        }
        Self { data: Arc::new(RwLock::new(data)) }
    }

    /// Open a session for `username`, returning its token.
    pub async fn open_session(&self, username: &str) -> String {
        let token = generate_token();
        self.data
            .write()
            .await
            .sessions
            .insert(token.clone(), username.to_owned());
        token
    }

    pub async fn session_user(&self, token: &str) -> Option<String> {
        self.data.read().await.sessions.get(token).cloned()
    }
}
