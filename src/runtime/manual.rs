// SPDX-License-Identifier: MPL-2.0
//! Deterministic collaborators driven by a virtual clock.
//!
//! [`ManualScheduler`] only moves when told to, and [`HeadlessHost`] records
//! every call instead of drawing. Together they let a test step a snackbar
//! through its whole lifecycle without sleeping.

use crate::domain::{Insets, Size};
use crate::snackbar::{Animation, Host, Message, Presentation, Scheduler, SnackbarId, TimerHandle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    timer: Option<TimerHandle>,
    message: Message,
}

/// Scheduler whose clock advances only through [`ManualScheduler::advance`].
#[derive(Debug)]
pub struct ManualScheduler {
    origin: Instant,
    elapsed: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Moves the clock forward by `step` and returns the messages that came
    /// due, ordered by due time then by scheduling order.
    pub fn advance(&mut self, step: Duration) -> Vec<Message> {
        self.elapsed += step;
        let now = self.elapsed;

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.message).collect()
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.pending.iter().filter(|p| p.timer.is_some()).count()
    }

    /// Number of animations still running.
    #[must_use]
    pub fn pending_animations(&self) -> usize {
        self.pending.iter().filter(|p| p.timer.is_none()).count()
    }

    fn push(&mut self, delay: Duration, timer: Option<TimerHandle>, message: Message) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.elapsed + delay,
            seq,
            timer,
            message,
        });
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn schedule_once(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let handle = TimerHandle::new(self.next_seq);
        self.push(delay, Some(handle), message);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.timer != Some(handle));
    }

    fn animate(&mut self, animation: Animation, on_complete: Message) {
        self.push(animation.duration, None, on_complete);
    }
}

/// Host that records what a real surface would have drawn.
#[derive(Debug)]
pub struct HeadlessHost {
    size: Size,
    safe_area: Insets,
    attached: HashMap<SnackbarId, Presentation>,
    attach_counts: HashMap<SnackbarId, usize>,
    detach_counts: HashMap<SnackbarId, usize>,
    pending_offsets: Vec<(SnackbarId, f32)>,
    offsets: HashMap<SnackbarId, Vec<f32>>,
    layout_passes: usize,
    animations: Vec<Animation>,
    announcements: Vec<String>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            safe_area: Insets::ZERO,
            attached: HashMap::new(),
            attach_counts: HashMap::new(),
            detach_counts: HashMap::new(),
            pending_offsets: Vec::new(),
            offsets: HashMap::new(),
            layout_passes: 0,
            animations: Vec::new(),
            announcements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// How many times `id` was attached.
    #[must_use]
    pub fn attach_count(&self, id: SnackbarId) -> usize {
        self.attach_counts.get(&id).copied().unwrap_or(0)
    }

    /// How many times `id` was detached.
    #[must_use]
    pub fn detach_count(&self, id: SnackbarId) -> usize {
        self.detach_counts.get(&id).copied().unwrap_or(0)
    }

    /// Presentation of an attached snackbar.
    #[must_use]
    pub fn presentation(&self, id: SnackbarId) -> Option<&Presentation> {
        self.attached.get(&id)
    }

    /// Last bottom offset applied by a layout pass.
    #[must_use]
    pub fn offset(&self, id: SnackbarId) -> Option<f32> {
        self.offsets.get(&id).and_then(|history| history.last().copied())
    }

    /// Every bottom offset applied to `id`, in order.
    #[must_use]
    pub fn offset_history(&self, id: SnackbarId) -> Vec<f32> {
        self.offsets.get(&id).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    #[must_use]
    pub fn animated_passes(&self) -> usize {
        self.animations.len()
    }

    /// Animations of every animated layout pass, in order.
    #[must_use]
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    #[must_use]
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}

impl Host for HeadlessHost {
    fn attach(&mut self, presentation: Presentation) {
        *self.attach_counts.entry(presentation.id).or_default() += 1;
        self.attached.insert(presentation.id, presentation);
    }

    fn detach(&mut self, id: SnackbarId) {
        if self.attached.remove(&id).is_some() {
            *self.detach_counts.entry(id).or_default() += 1;
        }
        self.pending_offsets.retain(|(pending, _)| *pending != id);
    }

    fn is_attached(&self, id: SnackbarId) -> bool {
        self.attached.contains_key(&id)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn safe_area_insets(&self) -> Insets {
        self.safe_area
    }

    fn set_bottom_offset(&mut self, id: SnackbarId, offset: f32) {
        self.pending_offsets.push((id, offset));
    }

    fn layout_if_needed(&mut self, animation: Option<Animation>) {
        self.layout_passes += 1;
        if let Some(animation) = animation {
            self.animations.push(animation);
        }
        for (id, offset) in self.pending_offsets.drain(..) {
            self.offsets.entry(id).or_default().push(offset);
        }
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::Phase;

    fn dismiss_message() -> Message {
        Message::Dismiss(SnackbarId::new())
    }

    #[test]
    fn advance_returns_due_messages_in_order() {
        let mut scheduler = ManualScheduler::new();
        let late = dismiss_message();
        let early = dismiss_message();
        scheduler.schedule_once(Duration::from_millis(300), late);
        scheduler.schedule_once(Duration::from_millis(100), early);

        assert!(scheduler.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(300)), vec![early, late]);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn canceled_timer_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_once(Duration::from_millis(100), dismiss_message());
        scheduler.cancel(handle);
        scheduler.cancel(handle);

        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn now_tracks_virtual_time() {
        let mut scheduler = ManualScheduler::new();
        let start = scheduler.now();
        scheduler.advance(Duration::from_millis(1500));
        assert_eq!(scheduler.now() - start, Duration::from_millis(1500));
        assert_eq!(scheduler.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn animation_completion_is_not_a_timer() {
        let mut scheduler = ManualScheduler::new();
        let id = SnackbarId::new();
        let animation = crate::snackbar::SnackbarOptions::default().entrance_animation();
        scheduler.animate(
            animation,
            Message::AnimationFinished {
                id,
                phase: Phase::Entrance,
            },
        );

        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(scheduler.pending_animations(), 1);
    }

    #[test]
    fn host_applies_offsets_on_layout_pass() {
        let mut host = HeadlessHost::new(Size::new(320.0, 480.0));
        let id = SnackbarId::new();
        host.set_bottom_offset(id, 10.0);
        assert_eq!(host.offset(id), None);

        host.layout_if_needed(None);
        assert_eq!(host.offset(id), Some(10.0));
        assert_eq!(host.layout_passes(), 1);
        assert_eq!(host.animated_passes(), 0);
    }
}
