//! Boundaries to the hosted services the scoring core depends on.
//!
//! Each boundary is a trait with a file-backed implementation used by the CLI
//! and an in-memory implementation for tests and embedding.

pub mod auth;
pub mod store;

use std::fmt;

/// Outcome of loading remote-style data for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Loaded(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}
