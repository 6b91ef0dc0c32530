// SPDX-License-Identifier: MPL-2.0
//! Construction-time configuration of a snackbar.

use super::animation::{Animation, Curve};
use super::layout;
use crate::config::defaults;
use crate::domain::{DampingRatio, Insets, MinHeight};
use std::time::Duration;

/// Immutable snackbar configuration.
///
/// `Default` picks up the process-wide minimum height at the time it is
/// called (see [`layout::set_default_min_height`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarOptions {
    /// Distance from the host's safe-area edges.
    pub margins: Insets,
    /// Padding around the icon and message.
    pub content_inset: Insets,
    pub min_height: MinHeight,
    pub animation_duration: Duration,
    pub damping: DampingRatio,
    pub initial_velocity: f32,
    /// Time between presentation and automatic dismissal.
    pub auto_dismiss_delay: Duration,
}

impl Default for SnackbarOptions {
    fn default() -> Self {
        Self {
            margins: defaults::MARGINS,
            content_inset: defaults::CONTENT_INSET,
            min_height: layout::default_min_height(),
            animation_duration: defaults::ANIMATION_DURATION,
            damping: DampingRatio::new(defaults::DAMPING_RATIO),
            initial_velocity: defaults::INITIAL_VELOCITY,
            auto_dismiss_delay: defaults::AUTO_DISMISS_DELAY,
        }
    }
}

impl SnackbarOptions {
    #[must_use]
    pub fn margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn content_inset(mut self, content_inset: Insets) -> Self {
        self.content_inset = content_inset;
        self
    }

    #[must_use]
    pub fn min_height(mut self, min_height: MinHeight) -> Self {
        self.min_height = min_height;
        self
    }

    #[must_use]
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    #[must_use]
    pub fn spring(mut self, damping: DampingRatio, initial_velocity: f32) -> Self {
        self.damping = damping;
        self.initial_velocity = initial_velocity;
        self
    }

    #[must_use]
    pub fn auto_dismiss_delay(mut self, delay: Duration) -> Self {
        self.auto_dismiss_delay = delay;
        self
    }

    /// Spring used to slide the card in.
    #[must_use]
    pub fn entrance_animation(&self) -> Animation {
        Animation::new(
            self.animation_duration,
            self.damping,
            self.initial_velocity,
            Curve::Spring,
        )
    }

    /// Same spring as the entrance, eased in.
    #[must_use]
    pub fn exit_animation(&self) -> Animation {
        self.entrance_animation().with_curve(Curve::EaseIn)
    }
}
