// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`. These adapters wrap external dependencies, here
//! the HTTP stack.
//!
//! # Available Adapters
//!
//! - [`github`]: Repository search via the GitHub search API (implements
//!   [`RepoSearcher`])
//!
//! [`RepoSearcher`]: crate::application::port::RepoSearcher

pub mod github;

// Re-export main types for convenience
pub use github::GitHubClient;
