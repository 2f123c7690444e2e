// SPDX-License-Identifier: MPL-2.0
//! Repository records returned by a search.

use chrono::{DateTime, Utc};

/// Owner of a repository, as far as the results table cares: a login
/// and the URL of the avatar displayed next to the repository name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
}

/// One repository row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub owner: RepoOwner,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub updated_at: DateTime<Utc>,
    /// Page opened in the system browser when the row's name is pressed.
    pub html_url: String,
}

/// A full page of results plus the server-side total.
///
/// Every completed search replaces the previous value wholesale; pages
/// are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub items: Vec<Repository>,
    pub total_count: u64,
}

impl SearchResults {
    /// True when the server reported no matches at all.
    ///
    /// Distinct from an under-filled page: the last page of a non-empty
    /// result set can hold fewer rows than the page size.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Number of rows on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
