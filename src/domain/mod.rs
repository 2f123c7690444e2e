// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core search vocabulary with no UI or infrastructure
//! dependencies.
//!
//! # Modules
//!
//! - [`repo`]: Repository records ([`Repository`](repo::Repository),
//!   [`RepoOwner`](repo::RepoOwner), [`SearchResults`](repo::SearchResults))
//! - [`search`]: Query and lifecycle types ([`PageSize`](search::PageSize),
//!   [`SearchQuery`](search::SearchQuery), [`SearchStatus`](search::SearchStatus))

pub mod repo;
pub mod search;
