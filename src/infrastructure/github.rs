// SPDX-License-Identifier: MPL-2.0
//! GitHub search API adapter.
//!
//! Implements [`RepoSearcher`] over the `GET /search/repositories`
//! endpoint. The endpoint is configurable so the application also works
//! against GitHub Enterprise hosts.
//!
//! Error policy: a non-2xx response surfaces the `message` field of its
//! JSON body; connectivity failures and undecodable bodies carry no
//! server message and therefore surface the generic fallback. The two
//! cases are deliberately indistinguishable to the caller.

use crate::application::port::search::{RepoSearcher, SearchError};
use crate::config::Config;
use crate::domain::repo::{RepoOwner, Repository, SearchResults};
use crate::domain::search::SearchQuery;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Endpoint used when the configuration does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/repositories";

const USER_AGENT: &str = "RepoLens/0.1.0";

/// Search adapter over the GitHub API.
///
/// Holds only the endpoint; the HTTP client is built per request, which
/// keeps construction infallible.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    endpoint: String,
}

impl GitHubClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Builds the adapter from the persisted configuration, falling back
    /// to the public GitHub endpoint.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let endpoint = config
            .search_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn client() -> Result<reqwest::Client, SearchError> {
        // Build client with explicit redirect policy and user agent
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|_| SearchError::fallback())
    }
}

/// Query parameters for one search request, in the order the API
/// documents them: free text, page size, 1-based page number.
fn query_params(query: &SearchQuery) -> [(&'static str, String); 3] {
    [
        ("q", query.filter.clone()),
        ("per_page", query.per_page.rows().to_string()),
        ("page", query.page.to_string()),
    ]
}

#[async_trait]
impl RepoSearcher for GitHubClient {
    async fn search(&self, query: SearchQuery) -> Result<SearchResults, SearchError> {
        let client = Self::client()?;
        let response = client
            .get(&self.endpoint)
            .query(&query_params(&query))
            .send()
            .await
            .map_err(|_| SearchError::fallback())?;

        if !response.status().is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(SearchError::from_server(body.message));
        }

        let body: SearchResponseBody =
            response.json().await.map_err(|_| SearchError::fallback())?;
        body.into_results()
    }

    async fn fetch_avatar(&self, url: String) -> Result<Vec<u8>, SearchError> {
        let client = Self::client()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|_| SearchError::fallback())?;

        if !response.status().is_success() {
            return Err(SearchError::fallback());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| SearchError::fallback())?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    total_count: u64,
    #[serde(default)]
    items: Vec<RepoItem>,
}

#[derive(Debug, Deserialize)]
struct RepoItem {
    name: String,
    owner: OwnerItem,
    stargazers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    updated_at: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct OwnerItem {
    login: String,
    avatar_url: String,
}

/// Error body shape shared by GitHub's non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl SearchResponseBody {
    fn into_results(self) -> Result<SearchResults, SearchError> {
        let items = self
            .items
            .into_iter()
            .map(RepoItem::into_repository)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchResults {
            items,
            total_count: self.total_count,
        })
    }
}

impl RepoItem {
    fn into_repository(self) -> Result<Repository, SearchError> {
        // An unparseable timestamp means the body is malformed, which is
        // the same failure as an undecodable response.
        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|_| SearchError::fallback())?
            .with_timezone(&Utc);

        Ok(Repository {
            name: self.name,
            owner: RepoOwner {
                login: self.owner.login,
                avatar_url: self.owner.avatar_url,
            },
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            updated_at,
            html_url: self.html_url,
        })
    }
}
