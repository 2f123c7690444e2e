// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the application title and the screen switcher
//! (Search / Settings) that appear at the top of every screen. The
//! button for the active screen renders highlighted.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Container, Row, Space},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Screen currently on display; its button renders highlighted.
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowSearch,
    ShowSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ShowSearch => Event::SwitchTo(Screen::Search),
        Message::ShowSettings => Event::SwitchTo(Screen::Settings),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let app_name = text(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let search_button = nav_button(
        ctx.i18n.tr("navbar-search-button"),
        Message::ShowSearch,
        ctx.active == Screen::Search,
    );
    let settings_button = nav_button(
        ctx.i18n.tr("navbar-settings-button"),
        Message::ShowSettings,
        ctx.active == Screen::Settings,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(app_name)
        .push(Space::new().width(Length::Fill))
        .push(search_button)
        .push(settings_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn nav_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(if active {
            iced::widget::button::primary
        } else {
            iced::widget::button::secondary
        })
        .into()
}
