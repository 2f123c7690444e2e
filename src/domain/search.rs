// SPDX-License-Identifier: MPL-2.0
//! Query and lifecycle types for repository searches.

use std::fmt;

/// Number of result rows requested per page.
///
/// The remote search API caps page sizes, so only a fixed set of values is
/// offered. The selector in the results footer is built from [`PageSize::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    /// All selectable sizes, in display order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty];

    /// Returns the number of rows this size stands for.
    #[must_use]
    pub fn rows(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    /// Maps a persisted row count back to a size, rejecting anything
    /// outside the supported set.
    #[must_use]
    pub fn from_rows(rows: u32) -> Option<Self> {
        match rows {
            10 => Some(PageSize::Ten),
            25 => Some(PageSize::TwentyFive),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// One request against the repository search endpoint.
///
/// `page` is 1-based, matching the remote API. The filter may be empty;
/// an empty query is still a valid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filter: String,
    pub page: u32,
    pub per_page: PageSize,
}

impl SearchQuery {
    /// Builds a query for the first page, as issued by the Search control.
    #[must_use]
    pub fn first_page(filter: impl Into<String>, per_page: PageSize) -> Self {
        Self {
            filter: filter.into(),
            page: 1,
            per_page,
        }
    }
}

/// Lifecycle of the current search, driving which region of the page
/// renders (prompt, disabled trigger, results table, empty state, or
/// error banner).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has been requested yet; the page shows its prompt.
    #[default]
    NotStarted,
    /// A request has been issued and has not settled. The trigger
    /// control is disabled while in this state.
    InFlight,
    /// The last request settled with a well-formed response, possibly
    /// with zero results.
    Completed,
    /// The last request settled with a failure; carries the message to
    /// display.
    Failed(String),
}

impl SearchStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SearchStatus::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_size_is_ten() {
        assert_eq!(PageSize::default(), PageSize::Ten);
        assert_eq!(PageSize::default().rows(), 10);
    }

    #[test]
    fn from_rows_accepts_supported_sizes() {
        assert_eq!(PageSize::from_rows(10), Some(PageSize::Ten));
        assert_eq!(PageSize::from_rows(25), Some(PageSize::TwentyFive));
        assert_eq!(PageSize::from_rows(50), Some(PageSize::Fifty));
    }

    #[test]
    fn from_rows_rejects_unsupported_sizes() {
        assert_eq!(PageSize::from_rows(0), None);
        assert_eq!(PageSize::from_rows(20), None);
        assert_eq!(PageSize::from_rows(100), None);
    }

    #[test]
    fn display_shows_row_count() {
        assert_eq!(PageSize::Ten.to_string(), "10");
        assert_eq!(PageSize::TwentyFive.to_string(), "25");
        assert_eq!(PageSize::Fifty.to_string(), "50");
    }

    #[test]
    fn all_lists_sizes_in_ascending_order() {
        let rows: Vec<u32> = PageSize::ALL.iter().map(|s| s.rows()).collect();
        assert_eq!(rows, vec![10, 25, 50]);
    }

    #[test]
    fn first_page_query_starts_at_page_one() {
        let query = SearchQuery::first_page("rust", PageSize::TwentyFive);
        assert_eq!(query.page, 1);
        assert_eq!(query.filter, "rust");
        assert_eq!(query.per_page, PageSize::TwentyFive);
    }

    #[test]
    fn empty_filter_is_a_valid_query() {
        let query = SearchQuery::first_page("", PageSize::default());
        assert!(query.filter.is_empty());
    }

    #[test]
    fn status_defaults_to_not_started() {
        assert_eq!(SearchStatus::default(), SearchStatus::NotStarted);
    }

    #[test]
    fn only_in_flight_reports_in_flight() {
        assert!(SearchStatus::InFlight.is_in_flight());
        assert!(!SearchStatus::NotStarted.is_in_flight());
        assert!(!SearchStatus::Completed.is_in_flight());
        assert!(!SearchStatus::Failed("boom".into()).is_in_flight());
    }
}
