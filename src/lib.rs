//! # articles
//!
//! Client for a token-authenticated articles API: log in, keep the session
//! token in local storage, and list, create, update, or delete articles
//! while tracking the message, spinner, and edit selection a UI renders.
//!
//! `App` is the entry point. It drives an `ArticlesApi` transport
//! (`HttpApi` in production) over a `Storage` backend (`FileStorage` for the
//! CLI). The `stub` module serves a local stand-in for the remote API.

pub mod app;
pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod storage;
pub mod stub;

pub use app::{App, AppError};
