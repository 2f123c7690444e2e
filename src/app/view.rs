// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar and the
//! current screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::search_page;
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub search: &'a search_page::State,
    pub settings: &'a SettingsState,
}

/// Renders the navbar and the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Search => view_search(ctx.search, ctx.i18n),
        Screen::Settings => view_settings(ctx.settings, ctx.i18n),
    };

    let column = iced::widget::Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_search<'a>(search: &'a search_page::State, i18n: &'a I18n) -> Element<'a, Message> {
    search
        .view(search_page::ViewEnv { i18n })
        .map(Message::Search)
}

fn view_settings<'a>(settings: &'a SettingsState, i18n: &'a I18n) -> Element<'a, Message> {
    settings
        .view(SettingsViewContext { i18n })
        .map(Message::Settings)
}
