// SPDX-License-Identifier: MPL-2.0
//! iced host surface for snackbars.
//!
//! The stage mirrors the window: it knows its size and safe-area insets,
//! keeps one offset [`Track`] per attached snackbar and renders every
//! attached card as its own layer.

use crate::domain::{Frame, Insets, Size};
use crate::snackbar::{layout, Animation, Host, Message, Presentation, SnackbarId, Track};
use crate::ui::snackbar_view;
use crate::ui::theming::SnackbarColors;
use iced::Element;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Entry {
    presentation: Presentation,
    pending: Option<f32>,
    track: Track,
}

/// Surface the snackbars of a window attach to.
#[derive(Debug, Clone)]
pub struct Stage {
    size: Size,
    safe_area: Insets,
    entries: Vec<Entry>,
    announcements: Vec<String>,
}

impl Stage {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            safe_area: Insets::ZERO,
            entries: Vec::new(),
            announcements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Follows a window resize.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of attached snackbars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages announced so far, oldest first.
    #[must_use]
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// Whether any card is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|e| e.track.is_animating(now))
    }

    /// Current bottom offset of `id` at `now`.
    #[must_use]
    pub fn offset_at(&self, id: SnackbarId, now: Instant) -> Option<f32> {
        self.entry(id).map(|e| e.track.value_at(now))
    }

    /// Frame of `id` at `now`.
    #[must_use]
    pub fn frame_at(&self, id: SnackbarId, now: Instant) -> Option<Frame> {
        self.entry(id).map(|e| self.frame_of(e, now))
    }

    /// One layer per attached snackbar, oldest at the bottom of the stack.
    pub fn layers(&self, now: Instant, colors: SnackbarColors) -> Vec<Element<'_, Message>> {
        self.entries
            .iter()
            .map(|entry| snackbar_view::layer(&entry.presentation, self.frame_of(entry, now), colors))
            .collect()
    }

    fn frame_of(&self, entry: &Entry, now: Instant) -> Frame {
        layout::frame_at(
            self.size,
            self.safe_area,
            entry.presentation.margins,
            entry.presentation.height,
            entry.track.value_at(now),
        )
    }

    fn entry(&self, id: SnackbarId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.presentation.id == id)
    }
}

impl Host for Stage {
    fn attach(&mut self, presentation: Presentation) {
        if self.is_attached(presentation.id) {
            return;
        }
        let hidden = layout::hidden_offset(presentation.height, self.safe_area);
        self.entries.push(Entry {
            presentation,
            pending: None,
            track: Track::fixed(hidden, Instant::now()),
        });
    }

    fn detach(&mut self, id: SnackbarId) {
        self.entries.retain(|e| e.presentation.id != id);
    }

    fn is_attached(&self, id: SnackbarId) -> bool {
        self.entry(id).is_some()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn safe_area_insets(&self) -> Insets {
        self.safe_area
    }

    fn set_bottom_offset(&mut self, id: SnackbarId, offset: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.presentation.id == id) {
            entry.pending = Some(offset);
        }
    }

    fn layout_if_needed(&mut self, animation: Option<Animation>) {
        let now = Instant::now();
        for entry in &mut self.entries {
            if let Some(target) = entry.pending.take() {
                entry.track = entry.track.retarget(target, now, animation);
            }
        }
    }

    fn announce(&mut self, message: &str) {
        tracing::info!(text = message, "snackbar announcement");
        self.announcements.push(message.to_string());
    }
}
