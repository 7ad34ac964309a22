#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::types::{Article, ArticleId};

/// Client-side copy of the server's articles, in server order.
///
/// Advisory only: it may be stale until the next fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleCache {
    items: Vec<Article>,
}

impl ArticleCache {
    #[must_use]
    pub fn new(items: Vec<Article>) -> Self {
        Self { items }
    }

    pub fn replace_all(&mut self, items: Vec<Article>) {
        self.items = items;
    }

    pub fn push(&mut self, article: Article) {
        self.items.push(article);
    }

    /// Swap in the server's version of an article. Returns `false` when the
    /// id is not cached, in which case the article is appended.
    pub fn upsert(&mut self, article: Article) -> bool {
        match self.items.iter_mut().find(|item| item.id == article.id) {
            Some(slot) => {
                *slot = article;
                true
            }
            None => {
                self.items.push(article);
                false
            }
        }
    }

    pub fn remove(&mut self, id: ArticleId) -> Option<Article> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ArticleId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Article] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
