// SPDX-License-Identifier: MPL-2.0
//! Rendering for the repository search page.
//!
//! The page is a single column: heading, search form, then whichever
//! region the lifecycle calls for. Before the first completed search the
//! prompt renders; afterwards either the empty-state message or the
//! results table with its pagination footer. A failure adds an error
//! banner above whatever was already on screen.

use super::{Message, State};
use crate::domain::repo::Repository;
use crate::domain::search::{PageSize, SearchStatus};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_banner::{ErrorBanner, Severity};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::font::Weight;
use iced::widget::image::Image;
use iced::widget::{
    button, container, pick_list, rule, text, text_input, Column, Row, Space,
};
use iced::{alignment::Vertical, Border, Element, Font, Length, Theme};

/// Environment information required to render the search page.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Render the page for the current lifecycle state.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let title = text(env.i18n.tr("search-title")).size(typography::TITLE_LG);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(title)
            .push(self.search_form(&env));

        if let SearchStatus::Failed(message) = self.status() {
            content = content.push(
                ErrorBanner::new(Severity::Error)
                    .title(env.i18n.tr("search-failed-title"))
                    .message(message.clone())
                    .view::<Message>(),
            );
        }

        if !self.search_applied() {
            content = content.push(text(env.i18n.tr("search-initial-prompt")).size(typography::BODY));
        } else if self.results().is_empty() {
            content = content.push(text(env.i18n.tr("search-empty-results")).size(typography::BODY));
        } else {
            content = content
                .push(self.results_table(&env))
                .push(self.pagination_footer(&env));
        }

        container(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Filter label, filter input, and the Search trigger.
    fn search_form<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let label = text(env.i18n.tr("search-filter-label")).size(typography::BODY);

        let input = text_input("", self.filter())
            .on_input(Message::FilterChanged)
            .on_submit(Message::SearchRequested)
            .padding(spacing::XS)
            .width(Length::Fill);

        let search_button = button(text(env.i18n.tr("search-button")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(iced::widget::button::primary);
        // No on_press while a request is pending; the trigger renders
        // disabled until the search settles.
        let search_button = if self.status().is_in_flight() {
            search_button
        } else {
            search_button.on_press(Message::SearchRequested)
        };

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(label)
            .push(input)
            .push(search_button)
            .into()
    }

    fn results_table<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let mut table = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(header_row(env))
            .push(rule::horizontal(1));

        for repo in &self.results().items {
            table = table.push(self.repo_row(repo));
        }

        table.into()
    }

    /// One data row: avatar and name link, then the numeric columns and
    /// the last-updated date.
    fn repo_row<'a>(&'a self, repo: &'a Repository) -> Element<'a, Message> {
        let avatar: Element<'a, Message> = match self.avatars().handle(&repo.owner.avatar_url) {
            Some(handle) => Image::new(handle)
                .width(Length::Fixed(sizing::AVATAR_SM))
                .height(Length::Fixed(sizing::AVATAR_SM))
                .into(),
            None => avatar_placeholder(),
        };

        let name = button(text(repo.name.as_str()).size(typography::BODY))
            .on_press(Message::OpenRepository(repo.html_url.clone()))
            .padding(spacing::XXS)
            .style(iced::widget::button::text);

        let repository_cell = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .push(avatar)
            .push(name);

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(repository_cell)
            .push(numeric_cell(repo.stars))
            .push(numeric_cell(repo.forks))
            .push(numeric_cell(repo.open_issues))
            .push(
                text(repo.updated_at.format("%Y-%m-%d").to_string())
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::TABLE_COL_DATE)),
            )
            .into()
    }

    /// Rows-per-page selector, range label, and page controls, pushed to
    /// the right edge.
    fn pagination_footer<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let rows_label = text(env.i18n.tr("search-rows-per-page")).size(typography::BODY_SM);

        let size_picker = pick_list(PageSize::ALL, Some(self.per_page()), Message::PageSizeSelected)
            .padding(spacing::XXS)
            .text_size(typography::BODY_SM);

        let start = self.range_start().to_string();
        let end = self.range_end().to_string();
        let total = self.results().total_count.to_string();
        let range = text(env.i18n.tr_with_args(
            "search-range",
            &[
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("total", total.as_str()),
            ],
        ))
        .size(typography::BODY_SM);

        let previous = button(text(env.i18n.tr("search-previous-page")).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .style(iced::widget::button::secondary);
        let previous = if self.has_previous_page() {
            previous.on_press(Message::PreviousPage)
        } else {
            previous
        };

        let next = button(text(env.i18n.tr("search-next-page")).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .style(iced::widget::button::secondary);
        let next = if self.has_next_page() {
            next.on_press(Message::NextPage)
        } else {
            next
        };

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .push(Space::new().width(Length::Fill))
            .push(rows_label)
            .push(size_picker)
            .push(range)
            .push(previous)
            .push(next)
            .into()
    }
}

fn header_row<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(header_cell(
            env.i18n.tr("search-header-repository"),
            Length::Fill,
        ))
        .push(header_cell(
            env.i18n.tr("search-header-stars"),
            Length::Fixed(sizing::TABLE_COL_NUMERIC),
        ))
        .push(header_cell(
            env.i18n.tr("search-header-forks"),
            Length::Fixed(sizing::TABLE_COL_NUMERIC),
        ))
        .push(header_cell(
            env.i18n.tr("search-header-open-issues"),
            Length::Fixed(sizing::TABLE_COL_NUMERIC),
        ))
        .push(header_cell(
            env.i18n.tr("search-header-updated-at"),
            Length::Fixed(sizing::TABLE_COL_DATE),
        ))
        .into()
}

fn header_cell<'a>(label: String, width: Length) -> Element<'a, Message> {
    text(label)
        .size(typography::BODY_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .width(width)
        .into()
}

fn numeric_cell<'a>(value: u64) -> Element<'a, Message> {
    text(value.to_string())
        .size(typography::BODY)
        .width(Length::Fixed(sizing::TABLE_COL_NUMERIC))
        .into()
}

/// Square shown in place of an avatar that has not loaded.
fn avatar_placeholder<'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(sizing::AVATAR_SM))
        .height(Length::Fixed(sizing::AVATAR_SM))
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::GRAY_200.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
