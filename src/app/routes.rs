// SPDX-License-Identifier: MPL-2.0
//! Declarative route table for start-up navigation.
//!
//! Launchers can pass `--route /settings` to open the application on a
//! specific screen. Unknown paths fall back to the search screen, which
//! keeps stale shortcuts working after a route is renamed or removed.

use super::Screen;

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
}

/// Route table, scanned in declaration order.
pub const ROUTES: [Route; 2] = [
    Route {
        path: "/",
        screen: Screen::Search,
    },
    Route {
        path: "/settings",
        screen: Screen::Settings,
    },
];

/// Screen used when no route matches.
pub const FALLBACK_SCREEN: Screen = Screen::Search;

/// Resolves a route path to the screen to start on.
#[must_use]
pub fn resolve(path: &str) -> Screen {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.screen)
        .unwrap_or(FALLBACK_SCREEN)
}
