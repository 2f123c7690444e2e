// SPDX-License-Identifier: MPL-2.0
//! Repository search page component.
//!
//! Owns the search lifecycle: filter text, pagination, the
//! [`SearchStatus`] state machine, and the avatar cache. The component
//! mutates its own state in [`State::handle_message`] and reports the
//! side effects the application must perform as an [`Effect`]; it never
//! touches the network itself.
//!
//! # Lifecycle rules
//!
//! - The Search control is the only guarded trigger: a press while a
//!   request is in flight is ignored (the control also renders disabled)
//! - Page and page-size changes re-trigger a search automatically, but
//!   only once the first search has completed; the initial mount never
//!   fetches
//! - Results are replaced wholesale on every completed search
//! - A failure keeps the previously displayed results and surfaces the
//!   failure message; an empty result set is a completed search, not a
//!   failure
//!
//! In-flight requests are never cancelled or correlated with the query
//! that produced them; when pagination fires during an in-flight search
//! the last response to arrive wins.

pub mod avatars;
mod view;

pub use view::ViewEnv;

use crate::application::port::search::SearchError;
use crate::domain::repo::SearchResults;
use crate::domain::search::{PageSize, SearchQuery, SearchStatus};
use avatars::AvatarCache;

/// Messages emitted by the search page widgets and by completed
/// search/avatar tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// The filter input changed. No fetch until Search is pressed.
    FilterChanged(String),
    /// The Search control was pressed (or the filter input submitted).
    SearchRequested,
    /// A search task settled.
    SearchCompleted(Result<SearchResults, SearchError>),
    /// A page size was picked in the results footer.
    PageSizeSelected(PageSize),
    NextPage,
    PreviousPage,
    /// A repository name was pressed; carries its HTML URL.
    OpenRepository(String),
    /// An avatar fetch task settled.
    AvatarFetched {
        url: String,
        result: Result<Vec<u8>, SearchError>,
    },
}

/// Side effects the application should perform after handling a search
/// page message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue the given query against the search port.
    RunSearch(SearchQuery),
    /// Fetch the avatar image for each URL. The list is already
    /// deduplicated against the cache and pending fetches.
    FetchAvatars(Vec<String>),
    /// Open a repository page in the system browser.
    OpenRepository(String),
}

/// Complete search page state.
pub struct State {
    filter: String,
    page: u32,
    per_page: PageSize,
    status: SearchStatus,
    /// Results of the last completed search. Kept across failures so the
    /// table stays visible under the error banner.
    results: SearchResults,
    /// Set once the first search completes; gates the automatic
    /// re-trigger on pagination changes.
    search_applied: bool,
    avatars: AvatarCache,
}

impl Default for State {
    fn default() -> Self {
        Self {
            filter: String::new(),
            page: 1,
            per_page: PageSize::default(),
            status: SearchStatus::default(),
            results: SearchResults::default(),
            search_applied: false,
            avatars: AvatarCache::new(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets the filter text without triggering a fetch. Used for the
    /// positional CLI argument at startup.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Presets the page size without resetting the page or triggering a
    /// fetch. Used to apply the configured default at startup.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.per_page = size;
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn per_page(&self) -> PageSize {
        self.per_page
    }

    #[must_use]
    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    #[must_use]
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// True once the first search has completed.
    #[must_use]
    pub fn search_applied(&self) -> bool {
        self.search_applied
    }

    #[must_use]
    pub fn avatars(&self) -> &AvatarCache {
        &self.avatars
    }

    /// 1-based index of the first row on the current page.
    #[must_use]
    pub fn range_start(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page.rows()) + 1
    }

    /// 1-based index of the last row on the current page.
    ///
    /// Counts the rows actually rendered, so the label stays truthful
    /// when the server under-fills a page.
    #[must_use]
    pub fn range_end(&self) -> u64 {
        self.range_start() + self.results.len() as u64 - 1
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page.rows()) < self.results.total_count
    }

    /// Handles a search page message and returns the effect the
    /// application should perform.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::FilterChanged(text) => {
                self.filter = text;
                Effect::None
            }
            Message::SearchRequested => {
                // The control renders disabled while in flight; the guard
                // also covers submissions from the filter input.
                if self.status.is_in_flight() {
                    return Effect::None;
                }
                self.page = 1;
                self.start_search()
            }
            Message::SearchCompleted(Ok(results)) => {
                self.status = SearchStatus::Completed;
                self.search_applied = true;
                let urls = results
                    .items
                    .iter()
                    .map(|repo| repo.owner.avatar_url.clone())
                    .collect::<Vec<_>>();
                self.results = results;
                let to_fetch = self.avatars.begin_fetch(urls);
                if to_fetch.is_empty() {
                    Effect::None
                } else {
                    Effect::FetchAvatars(to_fetch)
                }
            }
            Message::SearchCompleted(Err(error)) => {
                self.status = SearchStatus::Failed(error.message().to_string());
                Effect::None
            }
            Message::PageSizeSelected(size) => {
                self.per_page = size;
                self.page = 1;
                self.refresh_if_applied()
            }
            Message::NextPage => {
                if !self.has_next_page() {
                    return Effect::None;
                }
                self.page += 1;
                self.refresh_if_applied()
            }
            Message::PreviousPage => {
                if !self.has_previous_page() {
                    return Effect::None;
                }
                self.page -= 1;
                self.refresh_if_applied()
            }
            Message::OpenRepository(url) => Effect::OpenRepository(url),
            Message::AvatarFetched { url, result } => {
                match result {
                    Ok(bytes) => self.avatars.insert(url, bytes),
                    // The placeholder stays; the URL becomes fetchable
                    // again when a later page mentions it.
                    Err(_) => self.avatars.mark_failed(&url),
                }
                Effect::None
            }
        }
    }

    fn start_search(&mut self) -> Effect {
        self.status = SearchStatus::InFlight;
        Effect::RunSearch(SearchQuery {
            filter: self.filter.clone(),
            page: self.page,
            per_page: self.per_page,
        })
    }

    /// Re-triggers the search for the current query after a pagination
    /// change, unless no search has completed yet.
    fn refresh_if_applied(&mut self) -> Effect {
        if self.search_applied {
            self.start_search()
        } else {
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repo::{RepoOwner, Repository};
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, avatar: &str) -> Repository {
        Repository {
            name: name.to_string(),
            owner: RepoOwner {
                login: "octocat".to_string(),
                avatar_url: avatar.to_string(),
            },
            stars: 10,
            forks: 2,
            open_issues: 1,
            updated_at: Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
            html_url: format!("https://github.com/octocat/{name}"),
        }
    }

    fn page_of(names: &[&str], total: u64) -> SearchResults {
        SearchResults {
            items: names
                .iter()
                .map(|name| repo(name, &format!("https://avatars.test/{name}.png")))
                .collect(),
            total_count: total,
        }
    }

    /// Drives the state to a completed first search with the given page.
    fn completed_state(results: SearchResults) -> State {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Ok(results)));
        state
    }

    #[test]
    fn filter_changes_never_fetch() {
        let mut state = State::new();
        let effect = state.handle_message(Message::FilterChanged("python".to_string()));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.filter(), "python");
        assert_eq!(state.status(), &SearchStatus::NotStarted);
    }

    #[test]
    fn search_request_goes_in_flight_with_the_current_query() {
        let mut state = State::new();
        let _ = state.handle_message(Message::FilterChanged("python".to_string()));

        let effect = state.handle_message(Message::SearchRequested);

        assert!(state.status().is_in_flight());
        assert_eq!(
            effect,
            Effect::RunSearch(SearchQuery {
                filter: "python".to_string(),
                page: 1,
                per_page: PageSize::Ten,
            })
        );
    }

    #[test]
    fn search_request_resets_to_page_one() {
        let mut state = completed_state(page_of(&["a"], 100));
        let _ = state.handle_message(Message::NextPage);
        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["b"], 100))));
        assert_eq!(state.page(), 2);

        let effect = state.handle_message(Message::SearchRequested);

        match effect {
            Effect::RunSearch(query) => assert_eq!(query.page, 1),
            other => panic!("expected RunSearch, got {other:?}"),
        }
    }

    #[test]
    fn search_request_while_in_flight_is_ignored() {
        let mut state = State::new();
        let first = state.handle_message(Message::SearchRequested);
        assert!(matches!(first, Effect::RunSearch(_)));

        let second = state.handle_message(Message::SearchRequested);
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn completion_re_enables_the_trigger() {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);
        assert!(state.status().is_in_flight());

        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["a"], 1))));

        assert_eq!(state.status(), &SearchStatus::Completed);
        assert!(state.search_applied());
    }

    #[test]
    fn completion_replaces_results_wholesale() {
        let mut state = completed_state(page_of(&["a", "b", "c"], 3));
        assert_eq!(state.results().len(), 3);

        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["z"], 1))));

        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results().items[0].name, "z");
        assert_eq!(state.results().total_count, 1);
    }

    #[test]
    fn empty_total_is_completed_not_failed() {
        let state = completed_state(page_of(&[], 0));

        assert_eq!(state.status(), &SearchStatus::Completed);
        assert!(state.results().is_empty());
        assert!(state.search_applied());
    }

    #[test]
    fn failure_surfaces_the_server_message() {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Err(SearchError::new(
            "validation failed",
        ))));

        assert_eq!(
            state.status(),
            &SearchStatus::Failed("validation failed".to_string())
        );
    }

    #[test]
    fn failure_without_message_surfaces_the_fallback() {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Err(SearchError::from_server(None))));

        assert_eq!(
            state.status(),
            &SearchStatus::Failed("unexpected error".to_string())
        );
    }

    #[test]
    fn failure_keeps_previously_displayed_results() {
        let mut state = completed_state(page_of(&["a", "b"], 2));

        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Err(SearchError::fallback())));

        assert!(matches!(state.status(), SearchStatus::Failed(_)));
        assert_eq!(state.results().len(), 2, "results survive the failure");
    }

    #[test]
    fn failed_first_search_leaves_pagination_dormant() {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);
        let _ = state.handle_message(Message::SearchCompleted(Err(SearchError::fallback())));
        assert!(!state.search_applied());

        let effect = state.handle_message(Message::PageSizeSelected(PageSize::Fifty));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn page_size_change_before_first_search_never_fetches() {
        let mut state = State::new();
        let effect = state.handle_message(Message::PageSizeSelected(PageSize::TwentyFive));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.per_page(), PageSize::TwentyFive);
        assert_eq!(state.status(), &SearchStatus::NotStarted);
    }

    #[test]
    fn page_size_change_after_completion_refetches_page_one() {
        let mut state = completed_state(page_of(&["a"], 100));
        let _ = state.handle_message(Message::NextPage);
        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["b"], 100))));

        let effect = state.handle_message(Message::PageSizeSelected(PageSize::Fifty));

        assert!(state.status().is_in_flight());
        match effect {
            Effect::RunSearch(query) => {
                assert_eq!(query.page, 1, "page size change resets to page 1");
                assert_eq!(query.per_page, PageSize::Fifty);
            }
            other => panic!("expected RunSearch, got {other:?}"),
        }
    }

    #[test]
    fn next_page_refetches_with_incremented_page() {
        let mut state = completed_state(page_of(&["a"], 25));

        let effect = state.handle_message(Message::NextPage);

        match effect {
            Effect::RunSearch(query) => assert_eq!(query.page, 2),
            other => panic!("expected RunSearch, got {other:?}"),
        }
    }

    #[test]
    fn previous_page_is_a_no_op_on_page_one() {
        let mut state = completed_state(page_of(&["a"], 25));
        let effect = state.handle_message(Message::PreviousPage);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn next_page_is_a_no_op_on_the_last_page() {
        // 10 rows per page, total 8: page 1 is the last page.
        let mut state = completed_state(page_of(&["a"], 8));
        let effect = state.handle_message(Message::NextPage);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn pagination_fires_even_while_a_search_is_in_flight() {
        let mut state = completed_state(page_of(&["a"], 100));
        let _ = state.handle_message(Message::NextPage);
        assert!(state.status().is_in_flight());

        // The next/previous controls are not gated on in-flight status.
        let effect = state.handle_message(Message::NextPage);
        match effect {
            Effect::RunSearch(query) => assert_eq!(query.page, 3),
            other => panic!("expected RunSearch, got {other:?}"),
        }
    }

    #[test]
    fn stale_completion_overwrites_newer_results() {
        // Documents the uncorrected race: responses are not correlated
        // with the query that produced them, so the last one to arrive
        // wins even if it answers an older request.
        let mut state = completed_state(page_of(&["page1"], 100));
        let _ = state.handle_message(Message::NextPage);

        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["page2"], 100))));
        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["page1"], 100))));

        assert_eq!(state.results().items[0].name, "page1");
    }

    #[test]
    fn completion_requests_each_distinct_avatar_once() {
        let mut state = State::new();
        let _ = state.handle_message(Message::SearchRequested);

        let results = SearchResults {
            items: vec![
                repo("a", "https://avatars.test/octocat.png"),
                repo("b", "https://avatars.test/octocat.png"),
                repo("c", "https://avatars.test/other.png"),
            ],
            total_count: 3,
        };
        let effect = state.handle_message(Message::SearchCompleted(Ok(results)));

        assert_eq!(
            effect,
            Effect::FetchAvatars(vec![
                "https://avatars.test/octocat.png".to_string(),
                "https://avatars.test/other.png".to_string(),
            ])
        );
    }

    #[test]
    fn cached_avatars_are_not_refetched_on_a_later_page() {
        let mut state = completed_state(page_of(&["a"], 100));
        let _ = state.handle_message(Message::AvatarFetched {
            url: "https://avatars.test/a.png".to_string(),
            result: Ok(vec![0xFF, 0xD8]),
        });

        let _ = state.handle_message(Message::NextPage);
        let effect = state.handle_message(Message::SearchCompleted(Ok(page_of(&["a"], 100))));

        assert_eq!(effect, Effect::None, "avatar is cached, nothing to fetch");
    }

    #[test]
    fn avatar_failure_never_touches_search_status() {
        let mut state = completed_state(page_of(&["a"], 1));

        let _ = state.handle_message(Message::AvatarFetched {
            url: "https://avatars.test/a.png".to_string(),
            result: Err(SearchError::fallback()),
        });

        assert_eq!(state.status(), &SearchStatus::Completed);
        assert!(state.avatars().handle("https://avatars.test/a.png").is_none());
    }

    #[test]
    fn open_repository_passes_the_url_through() {
        let mut state = State::new();
        let effect = state.handle_message(Message::OpenRepository(
            "https://github.com/octocat/hello".to_string(),
        ));

        assert_eq!(
            effect,
            Effect::OpenRepository("https://github.com/octocat/hello".to_string())
        );
    }

    #[test]
    fn range_counts_rendered_rows() {
        let mut state = completed_state(page_of(&["a", "b", "c"], 23));
        assert_eq!(state.range_start(), 1);
        assert_eq!(state.range_end(), 3);

        let _ = state.handle_message(Message::NextPage);
        let _ = state.handle_message(Message::SearchCompleted(Ok(page_of(&["d", "e", "f"], 23))));
        assert_eq!(state.range_start(), 11);
        assert_eq!(state.range_end(), 13);
    }

    #[test]
    fn last_page_detection_uses_the_server_total() {
        let state = completed_state(page_of(&["a"], 10));
        assert!(!state.has_next_page(), "10 of 10 shown, no next page");

        let state = completed_state(page_of(&["a"], 11));
        assert!(state.has_next_page());
    }

    #[test]
    fn initial_filter_preset_does_not_change_status() {
        let mut state = State::new();
        state.set_filter("python");
        state.set_page_size(PageSize::TwentyFive);

        assert_eq!(state.filter(), "python");
        assert_eq!(state.per_page(), PageSize::TwentyFive);
        assert_eq!(state.status(), &SearchStatus::NotStarted);
        assert!(!state.search_applied());
    }
}
