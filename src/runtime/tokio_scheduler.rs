// SPDX-License-Identifier: MPL-2.0
//! Scheduler backed by tokio timers.
//!
//! Timers and animation completions are spawned sleeps that post their
//! message onto the owning loop's channel instead of touching the snackbar.
//! Must be used from within a tokio runtime.

use crate::snackbar::{Animation, Message, Scheduler, TimerHandle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

/// Scheduler posting onto an unbounded channel.
#[derive(Debug)]
pub struct TokioScheduler {
    sender: UnboundedSender<Message>,
    timers: HashMap<TimerHandle, AbortHandle>,
    next_timer: u64,
}

impl TokioScheduler {
    /// Creates a scheduler delivering to `sender`.
    #[must_use]
    pub fn new(sender: UnboundedSender<Message>) -> Self {
        Self {
            sender,
            timers: HashMap::new(),
            next_timer: 0,
        }
    }

    /// Number of timers that have neither fired nor been canceled.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.values().filter(|h| !h.is_finished()).count()
    }

    fn post_after(&self, delay: Duration, message: Message) -> AbortHandle {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(message).is_err() {
                tracing::trace!(?message, "owning loop gone, message dropped");
            }
        })
        .abort_handle()
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Instant {
        // Follows tokio's clock so paused-time tests stay consistent.
        tokio::time::Instant::now().into_std()
    }

    fn schedule_once(&mut self, delay: Duration, message: Message) -> TimerHandle {
        self.timers.retain(|_, handle| !handle.is_finished());

        let handle = TimerHandle::new(self.next_timer);
        self.next_timer += 1;
        self.timers.insert(handle, self.post_after(delay, message));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.timers.remove(&handle) {
            task.abort();
        }
    }

    fn animate(&mut self, animation: Animation, on_complete: Message) {
        drop(self.post_after(animation.duration, on_complete));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::SnackbarId;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn timer_posts_message_after_delay() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(sender);
        let message = Message::Dismiss(SnackbarId::new());
        let start = tokio::time::Instant::now();

        scheduler.schedule_once(Duration::from_millis(1500), message);

        assert_eq!(receiver.recv().await, Some(message));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn canceled_timer_does_not_post() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(sender);
        let handle = scheduler.schedule_once(Duration::from_millis(100), Message::Dismiss(SnackbarId::new()));

        scheduler.cancel(handle);
        scheduler.cancel(handle);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(receiver.try_recv().is_err());
        assert_eq!(scheduler.armed_timers(), 0);
    }
}
