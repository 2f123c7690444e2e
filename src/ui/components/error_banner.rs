// SPDX-License-Identifier: MPL-2.0
//! Reusable inline banner for errors and warnings with consistent styling.
//!
//! The banner renders a severity-colored title and a free-form message on a
//! subtly tinted background. It is meant to sit inside a screen's normal
//! layout flow (above a results table, below a form) rather than replace it.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_banner::{ErrorBanner, Severity};
//!
//! ErrorBanner::new(Severity::Error)
//!     .title("Search failed")
//!     .message("rate limit exceeded")
//!     .view()
//! ```

use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{Color, Element, Length, Theme};

/// Severity level determines the accent color of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// The operation failed outright (red).
    #[default]
    Error,
    /// The operation succeeded in a degraded way (orange).
    Warning,
}

impl Severity {
    /// Returns the accent color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
        }
    }
}

/// Configuration for the banner.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    severity: Severity,
    title: Option<String>,
    message: Option<String>,
}

impl ErrorBanner {
    /// Creates a new banner with the given severity.
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (short heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (explanation, typically straight from the error).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders the banner.
    pub fn view<Message: 'static>(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme| {
                let tint = Color {
                    a: opacity::TINT_SUBTLE,
                    ..accent_color
                };
                container::Style {
                    background: Some(iced::Background::Color(tint)),
                    border: iced::Border {
                        color: accent_color,
                        width: border::WIDTH_SM,
                        radius: radius::SM.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}
