// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle controller.
//!
//! A [`Snackbar`] moves once through `Created → Presented →
//! DismissRequested → Dismissed`. Every public operation is safe to call
//! redundantly: showing twice, dismissing twice or dismissing before showing
//! are silent no-ops.

use super::host::{Host, Presentation, Scheduler, TimerHandle};
use super::layout::{self, TextMetrics};
use super::options::SnackbarOptions;
use super::state::LifecycleState;
use iced::widget::image::Handle;
use std::fmt;
use std::time::Instant;

/// Unique identifier for a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnackbarId(u64);

impl SnackbarId {
    /// Creates a new unique snackbar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SnackbarId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnackbarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snackbar-{}", self.0)
    }
}

/// Which transition an animation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entrance,
    Exit,
}

/// Messages delivered to a snackbar by its owning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Timer fired or dismissal requested from elsewhere.
    Dismiss(SnackbarId),
    /// An animation started by the snackbar ran to completion.
    AnimationFinished { id: SnackbarId, phase: Phase },
}

impl Message {
    /// The snackbar this message is addressed to.
    #[must_use]
    pub fn id(&self) -> SnackbarId {
        match self {
            Message::Dismiss(id) | Message::AnimationFinished { id, .. } => *id,
        }
    }
}

/// Callback fired once when the snackbar reaches `Dismissed`.
pub type DismissCallback = Box<dyn FnOnce(&Snackbar) + Send>;

/// A transient bottom notification with an icon and a message.
pub struct Snackbar {
    id: SnackbarId,
    message: String,
    icon: Handle,
    options: SnackbarOptions,
    metrics: TextMetrics,
    state: LifecycleState,
    /// Armed between `show` and the start of dismissal.
    dismiss_timer: Option<TimerHandle>,
    auto_dismiss_deadline: Option<Instant>,
    /// Fitting height computed on `show`, reused by the exit transition.
    height: f32,
    on_dismiss: Option<DismissCallback>,
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("state", &self.state)
            .field("timer_armed", &self.dismiss_timer.is_some())
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Snackbar {
    /// Creates a snackbar with default options.
    pub fn new(message: impl Into<String>, icon: Handle) -> Self {
        Self::with_options(message, icon, SnackbarOptions::default())
    }

    /// Creates a snackbar with explicit options.
    pub fn with_options(message: impl Into<String>, icon: Handle, options: SnackbarOptions) -> Self {
        Self {
            id: SnackbarId::new(),
            message: message.into(),
            icon,
            options,
            metrics: TextMetrics::default(),
            state: LifecycleState::Created,
            dismiss_timer: None,
            auto_dismiss_deadline: None,
            height: 0.0,
            on_dismiss: None,
        }
    }

    /// Sets the callback fired once on dismissal.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce(&Snackbar) + Send + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Replaces the options. Only meaningful before `show`.
    #[must_use]
    pub fn options(mut self, options: SnackbarOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the text metrics used to measure the message.
    #[must_use]
    pub fn text_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn icon(&self) -> &Handle {
        &self.icon
    }

    #[must_use]
    pub fn config(&self) -> &SnackbarOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Fitting height computed when shown. Zero before `show`.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// When the auto-dismiss timer is due, on the scheduler's clock.
    #[must_use]
    pub fn auto_dismiss_deadline(&self) -> Option<Instant> {
        self.auto_dismiss_deadline
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.dismiss_timer.is_some()
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.state.is_terminal()
    }

    /// Attaches the snackbar to `host`, arms the dismiss timer and slides
    /// the card in.
    ///
    /// Does nothing unless the snackbar is still `Created`.
    pub fn show(&mut self, host: &mut dyn Host, scheduler: &mut dyn Scheduler) {
        if self.state != LifecycleState::Created || host.is_attached(self.id) {
            tracing::trace!(id = %self.id, state = %self.state, "show ignored");
            return;
        }

        self.height = layout::fitting_height(
            &self.message,
            host.size().width,
            self.options.margins,
            self.options.content_inset,
            self.options.min_height,
            &self.metrics,
        );
        host.attach(self.presentation());

        let delay = self.options.auto_dismiss_delay;
        self.dismiss_timer = Some(scheduler.schedule_once(delay, Message::Dismiss(self.id)));
        self.auto_dismiss_deadline = Some(scheduler.now() + delay);
        self.state = LifecycleState::Presented;

        // Start fully below the safe area, then spring up to rest.
        let safe_area = host.safe_area_insets();
        host.set_bottom_offset(self.id, layout::hidden_offset(self.height, safe_area));
        host.layout_if_needed(None);

        let animation = self.options.entrance_animation();
        host.set_bottom_offset(self.id, layout::resting_offset(self.options.margins));
        host.layout_if_needed(Some(animation));
        scheduler.animate(
            animation,
            Message::AnimationFinished {
                id: self.id,
                phase: Phase::Entrance,
            },
        );

        host.announce(&self.message);

        tracing::debug!(
            id = %self.id,
            height = self.height,
            delay_ms = delay.as_millis() as u64,
            "snackbar presented"
        );
    }

    /// Starts the animated dismissal.
    ///
    /// Does nothing unless the dismiss timer is armed, which rules out
    /// dismissing before `show` and dismissing twice.
    pub fn dismiss(&mut self, host: &mut dyn Host, scheduler: &mut dyn Scheduler) {
        let Some(timer) = self.dismiss_timer.take() else {
            tracing::trace!(id = %self.id, state = %self.state, "dismiss ignored");
            return;
        };
        scheduler.cancel(timer);
        self.state = LifecycleState::DismissRequested;

        let safe_area = host.safe_area_insets();
        let animation = self.options.exit_animation();
        host.set_bottom_offset(self.id, layout::hidden_offset(self.height, safe_area));
        host.layout_if_needed(Some(animation));
        scheduler.animate(
            animation,
            Message::AnimationFinished {
                id: self.id,
                phase: Phase::Exit,
            },
        );

        tracing::debug!(id = %self.id, "snackbar dismissal requested");
    }

    /// Tears the snackbar down without animating.
    ///
    /// Also cuts short an exit animation that is already running.
    pub fn dismiss_immediately(&mut self, host: &mut dyn Host, scheduler: &mut dyn Scheduler) {
        if let Some(timer) = self.dismiss_timer.take() {
            scheduler.cancel(timer);
        }
        if self.state.is_on_screen() {
            self.state = LifecycleState::DismissRequested;
            self.finish(host);
        }
    }

    /// Handles a message from the owning loop. Messages for other snackbars
    /// are ignored.
    pub fn update(&mut self, message: Message, host: &mut dyn Host, scheduler: &mut dyn Scheduler) {
        if message.id() != self.id {
            return;
        }

        match message {
            Message::Dismiss(_) => self.dismiss(host, scheduler),
            Message::AnimationFinished {
                phase: Phase::Entrance,
                ..
            } => {
                tracing::trace!(id = %self.id, "entrance finished");
            }
            Message::AnimationFinished {
                phase: Phase::Exit, ..
            } => {
                if self.state == LifecycleState::DismissRequested {
                    self.finish(host);
                }
            }
        }
    }

    fn finish(&mut self, host: &mut dyn Host) {
        self.state = LifecycleState::Dismissed;
        if let Some(callback) = self.on_dismiss.take() {
            callback(self);
        }
        host.detach(self.id);

        tracing::debug!(id = %self.id, "snackbar dismissed");
    }

    fn presentation(&self) -> Presentation {
        Presentation {
            id: self.id,
            message: self.message.clone(),
            icon: self.icon.clone(),
            margins: self.options.margins,
            content_inset: self.options.content_inset,
            height: self.height,
        }
    }
}
