// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::search_page;
use crate::ui::settings;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Search(search_page::Message),
    SwitchScreen(Screen),
    Settings(settings::Message),
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start route (e.g. `/settings`). Unknown paths fall back
    /// to the search screen.
    pub route: Option<String>,
    /// Optional filter text preloaded into the search input. Preloading
    /// never triggers a search by itself.
    pub filter: Option<String>,
}
