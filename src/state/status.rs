#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::ArticleId;

/// Message banner, spinner, and edit selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiStatus {
    pub message: String,
    pub spinner_on: bool,
    /// Article currently loaded into the edit form.
    pub current_article_id: Option<ArticleId>,
}

impl UiStatus {
    /// Start of a request: spinner on, message optionally flushed.
    pub fn begin(&mut self, flush_message: bool) {
        if flush_message {
            self.message.clear();
        }
        self.spinner_on = true;
    }

    /// End of a request, success or failure.
    pub fn finish(&mut self) {
        self.spinner_on = false;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}
