//! Session token lifecycle over a persistent [`Storage`].
//!
//! A stored token means authenticated; no token means unauthenticated. The
//! token itself is opaque and only ever echoed back to the server.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::storage::{Storage, StorageError};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

pub struct Session<S> {
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current token; empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .storage
            .get(TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Storage read failures count as unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable");
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted.
    pub fn store(&mut self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    /// # Errors
    ///
    /// Returns an error if the token cannot be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)
    }
}
