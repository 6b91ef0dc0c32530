// SPDX-License-Identifier: MPL-2.0
//! Collaborator contracts for the lifecycle controller.
//!
//! A [`Host`] is the surface a snackbar attaches to; a [`Scheduler`] owns
//! the clock, the one-shot dismiss timer and animation completion. Both are
//! driven from the single loop that owns the snackbar, so neither trait
//! requires `Send`.

use super::animation::Animation;
use super::controller::{Message, SnackbarId};
use crate::domain::{Insets, Size};
use iced::widget::image::Handle;
use std::time::{Duration, Instant};

/// What a host needs to draw an attached snackbar.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub id: SnackbarId,
    pub message: String,
    pub icon: Handle,
    pub margins: Insets,
    pub content_inset: Insets,
    /// Fitting height, already clamped to the minimum height.
    pub height: f32,
}

/// Surface hosting snackbar views.
pub trait Host {
    /// Adds the view to the surface.
    fn attach(&mut self, presentation: Presentation);

    /// Removes the view from the surface.
    fn detach(&mut self, id: SnackbarId);

    /// Whether the view is currently attached.
    fn is_attached(&self, id: SnackbarId) -> bool;

    /// Full size of the surface.
    fn size(&self) -> Size;

    /// Insets of the area not covered by system UI.
    fn safe_area_insets(&self) -> Insets;

    /// Updates the bottom offset constraint. Takes effect on the next layout pass.
    fn set_bottom_offset(&mut self, id: SnackbarId, offset: f32);

    /// Applies pending constraint changes, animating them when requested.
    fn layout_if_needed(&mut self, animation: Option<Animation>);

    /// Posts an accessibility announcement.
    fn announce(&mut self, _message: &str) {}
}

/// Identifies a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Clock, timers and animation completion on the owning loop.
pub trait Scheduler {
    /// Current time on this scheduler's clock.
    fn now(&self) -> Instant;

    /// Delivers `message` back to the owning loop once, after `delay`.
    fn schedule_once(&mut self, delay: Duration, message: Message) -> TimerHandle;

    /// Cancels a pending timer. Canceling twice or after firing is a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Delivers `on_complete` once `animation` has run to completion.
    fn animate(&mut self, animation: Animation, on_complete: Message);
}
