// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::snackbar;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "show" button was pressed.
    ShowPressed,
    /// The "dismiss all" button was pressed.
    DismissAllPressed,
    /// Forwarded to the addressed snackbar.
    Snackbar(snackbar::Message),
    /// Redraw tick while a card is moving.
    Frame(Instant),
    WindowResized(iced::Size),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Text shown in each snackbar.
    pub message: Option<String>,
    /// Auto-dismiss delay override, in seconds.
    pub delay_secs: Option<f32>,
    pub theme: Option<ThemeMode>,
    /// Settings file to read instead of the default location.
    pub config_path: Option<PathBuf>,
}
