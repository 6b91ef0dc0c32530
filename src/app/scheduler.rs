// SPDX-License-Identifier: MPL-2.0
//! `Scheduler` on top of iced tasks.
//!
//! Every timer or animation completion becomes a task that sleeps and then
//! yields the snackbar message. Tasks are queued here during `update` and
//! handed to the runtime with [`TaskScheduler::drain`], so the message
//! comes back through `App::update` on the UI loop.

use crate::snackbar::{Animation, Message, Scheduler, TimerHandle};
use iced::task::Handle;
use iced::Task;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Default)]
pub struct TaskScheduler {
    queued: Vec<Task<Message>>,
    timers: HashMap<TimerHandle, Handle>,
    next_timer: u64,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("queued", &self.queued.len())
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every task queued since the last call.
    pub fn drain(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.queued))
    }

    /// Number of tasks waiting to be drained.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Number of timers not yet canceled.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.len()
    }

    fn after(delay: Duration, message: Message) -> Task<Message> {
        // The sleep is created on first poll, inside the runtime's executor.
        Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message)
    }
}

impl Scheduler for TaskScheduler {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule_once(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let (task, handle) = Self::after(delay, message).abortable();
        let timer = TimerHandle::new(self.next_timer);
        self.next_timer += 1;

        self.queued.push(task);
        self.timers.insert(timer, handle);
        timer
    }

    fn cancel(&mut self, timer: TimerHandle) {
        if let Some(handle) = self.timers.remove(&timer) {
            handle.abort();
        }
    }

    fn animate(&mut self, animation: Animation, on_complete: Message) {
        self.queued.push(Self::after(animation.duration, on_complete));
    }
}
