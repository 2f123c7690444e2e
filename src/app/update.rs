// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] of mutable borrows into the
//! application state, matches the component's event, and translates it into
//! a `Task` of side effects (HTTP requests, config writes, browser opens).

use super::{Message, Screen};
use crate::application::port::search::SharedSearcher;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::search_page::{self, Effect as SearchEffect};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable borrows into `App` shared by all message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub search: &'a mut search_page::State,
    pub settings: &'a mut SettingsState,
    pub theme_mode: &'a mut ThemeMode,
    pub searcher: &'a SharedSearcher,
}

/// Handles messages from the search page, turning its effects into tasks.
pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search_page::Message,
) -> Task<Message> {
    match ctx.search.handle_message(message) {
        SearchEffect::None => Task::none(),
        SearchEffect::RunSearch(query) => {
            let searcher = ctx.searcher.clone();
            Task::perform(async move { searcher.search(query).await }, |result| {
                Message::Search(search_page::Message::SearchCompleted(result))
            })
        }
        SearchEffect::FetchAvatars(urls) => {
            let fetches = urls.into_iter().map(|url| {
                let searcher = ctx.searcher.clone();
                Task::perform(
                    async move {
                        let result = searcher.fetch_avatar(url.clone()).await;
                        (url, result)
                    },
                    |(url, result)| {
                        Message::Search(search_page::Message::AvatarFetched { url, result })
                    },
                )
            });
            Task::batch(fetches)
        }
        SearchEffect::OpenRepository(url) => {
            // Fire and forget; a browser that fails to open is not an app error.
            let _ = open::that(url);
            Task::none()
        }
    }
}

/// Handles messages from the settings screen and persists preference changes.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx)
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx)
        }
        SettingsEvent::DefaultPageSizeSelected(_) => persist_preferences(ctx),
    }
}

/// Handles messages from the navbar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::SwitchTo(target) => handle_screen_switch(ctx, target),
    }
}

/// Switches to another screen.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    Task::none()
}

/// Writes the current preferences to the config file.
///
/// The config is re-read first so fields the UI does not manage (such as a
/// custom search endpoint) survive the write. Save failures are surfaced
/// inline on the settings screen instead of being logged and lost.
fn persist_preferences(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(ctx.i18n.current_locale().to_string());
    cfg.theme_mode = Some(*ctx.theme_mode);
    cfg.page_size = Some(ctx.settings.default_page_size().rows());

    match config::save(&cfg) {
        Ok(()) => ctx.settings.set_save_error(None),
        Err(error) => ctx.settings.set_save_error(Some(error)),
    }

    Task::none()
}
