// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search and settings views.
//!
//! The `App` struct wires together the domains (search, localization, settings)
//! and translates messages into side effects like config persistence or HTTP
//! requests. This file intentionally keeps policy decisions (window sizing,
//! startup flags, theme selection) close to the main update loop so it is easy
//! to audit user-facing behavior.

mod message;
pub mod routes;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::search::SharedSearcher;
use crate::config;
use crate::domain::search::PageSize;
use crate::i18n::fluent::I18n;
use crate::infrastructure::github::GitHubClient;
use crate::ui::search_page;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    search: search_page::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Port through which repository searches and avatar fetches run.
    searcher: SharedSearcher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("search_status", self.search.status())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            search: search_page::State::new(),
            settings: SettingsState::default(),
            theme_mode: ThemeMode::System,
            searcher: Arc::new(GitHubClient::from_config(&config::Config::default())),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    ///
    /// Startup never issues a search request; the first fetch happens when the
    /// user submits the form.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(mode) = config.theme_mode {
            app.theme_mode = mode;
        }

        let page_size = config
            .page_size
            .and_then(PageSize::from_rows)
            .unwrap_or_default();
        app.search.set_page_size(page_size);

        if let Some(filter) = flags.filter {
            app.search.set_filter(filter);
        }

        if let Some(route) = flags.route.as_deref() {
            app.screen = routes::resolve(route);
        }

        app.settings = SettingsState::new(SettingsConfig {
            theme_mode: app.theme_mode,
            default_page_size: page_size,
        });
        app.searcher = Arc::new(GitHubClient::from_config(&config));

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            search: &mut self.search,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            searcher: &self.searcher,
        };

        match message {
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            search: &self.search,
            settings: &self.settings,
        })
    }
}
