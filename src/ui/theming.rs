// SPDX-License-Identifier: MPL-2.0
//! Light and dark colors for the snackbar card.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Colors of one snackbar card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarColors {
    pub text: Color,
    pub background: Color,
    pub shadow: Color,
}

impl SnackbarColors {
    /// White card, dark text.
    #[must_use]
    pub fn light() -> Self {
        Self {
            text: Color {
                a: opacity::TEXT,
                ..palette::BLACK
            },
            background: palette::WHITE,
            shadow: palette::BLACK,
        }
    }

    /// Dark gray card, light text.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            text: Color {
                a: opacity::TEXT,
                ..palette::WHITE
            },
            background: palette::GRAY_800,
            shadow: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
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

    /// The iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme '{other}', expected light, dark or system")),
        }
    }
}
