// SPDX-License-Identifier: MPL-2.0
//! Repository search port definition.
//!
//! This module defines the [`RepoSearcher`] trait through which the search
//! page reaches the remote search API, and the uniform [`SearchError`] it
//! reports with.
//!
//! # Design Notes
//!
//! - One error kind only: every failure, network-level or HTTP-level,
//!   surfaces as a message for the error banner
//! - No retries, no cancellation, no request deduplication live here or
//!   in any implementation

use crate::domain::repo::SearchResults;
use crate::domain::search::SearchQuery;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Message shown when a failure carries no server-supplied text.
pub const FALLBACK_ERROR_MESSAGE: &str = "unexpected error";

// =============================================================================
// SearchError
// =============================================================================

/// Failure of a search or avatar request.
///
/// Carries exactly the text the UI displays. Constructors encode the
/// fallback policy: blank or absent messages become
/// [`FALLBACK_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    message: String,
}

impl SearchError {
    /// Wraps a message, substituting the fallback when it is blank.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::fallback()
        } else {
            Self { message }
        }
    }

    /// The generic failure with no further detail.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Builds the error from an optional server-supplied message, as
    /// decoded from an error response body.
    #[must_use]
    pub fn from_server(message: Option<String>) -> Self {
        match message {
            Some(text) => Self::new(text),
            None => Self::fallback(),
        }
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SearchError {}

// =============================================================================
// RepoSearcher Trait
// =============================================================================

/// Port for the remote repository search service.
///
/// Infrastructure adapters implement this trait over HTTP; tests implement
/// it with canned responses. The application holds it as a
/// [`SharedSearcher`] so `Task` futures can clone their own handle.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned futures run on the
/// Iced/tokio executor.
#[async_trait]
pub trait RepoSearcher: Send + Sync {
    /// Runs one search request and returns the full page of results.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] for any failure: connectivity, a non-2xx
    /// status, or an undecodable body.
    async fn search(&self, query: SearchQuery) -> Result<SearchResults, SearchError>;

    /// Fetches the raw bytes of an owner avatar image.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`]; callers treat avatar failures as
    /// cosmetic and keep the placeholder.
    async fn fetch_avatar(&self, url: String) -> Result<Vec<u8>, SearchError>;
}

/// Shared handle to the searcher injected at application boot.
pub type SharedSearcher = Arc<dyn RepoSearcher>;
