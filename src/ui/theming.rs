// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use dark_light;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All selectable modes, in display order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The i18n key of this mode's display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }
}
