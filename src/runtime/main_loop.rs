// SPDX-License-Identifier: MPL-2.0
//! Single-owner loop for snackbars outside of an iced application.
//!
//! The loop owns the host, the scheduler and every live snackbar. Other
//! threads never touch them; they hold a [`DismissHandle`] that posts a
//! message onto the loop's queue, and the loop applies it on its next turn.

use super::tokio_scheduler::TokioScheduler;
use crate::snackbar::{Host, Message, Snackbar, SnackbarId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Requests dismissal of a snackbar from any thread.
#[derive(Debug, Clone)]
pub struct DismissHandle {
    id: SnackbarId,
    sender: UnboundedSender<Message>,
}

impl DismissHandle {
    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    /// Queues a dismissal on the owning loop.
    ///
    /// Safe to call any number of times; the snackbar ignores requests once
    /// its dismissal has started.
    pub fn dismiss(&self) {
        if self.sender.send(Message::Dismiss(self.id)).is_err() {
            tracing::trace!(id = %self.id, "dismiss after loop shutdown ignored");
        }
    }
}

/// Owns a host and the snackbars presented on it.
#[derive(Debug)]
pub struct MainLoop<H: Host> {
    host: H,
    scheduler: TokioScheduler,
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
    snackbars: Vec<Snackbar>,
}

impl<H: Host> MainLoop<H> {
    /// Creates a loop around `host`. Must be called inside a tokio runtime
    /// before any snackbar is presented.
    pub fn new(host: H) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            host,
            scheduler: TokioScheduler::new(sender.clone()),
            sender,
            receiver,
            snackbars: Vec::new(),
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Number of snackbars not yet dismissed.
    #[must_use]
    pub fn live(&self) -> usize {
        self.snackbars.len()
    }

    /// Shows `snackbar` on the host and keeps it until it is dismissed.
    pub fn present(&mut self, mut snackbar: Snackbar) -> DismissHandle {
        snackbar.show(&mut self.host, &mut self.scheduler);
        let handle = self.handle(snackbar.id());
        if !snackbar.is_dismissed() {
            self.snackbars.push(snackbar);
        }
        handle
    }

    /// Returns a handle that dismisses `id` through the queue.
    #[must_use]
    pub fn handle(&self, id: SnackbarId) -> DismissHandle {
        DismissHandle {
            id,
            sender: self.sender.clone(),
        }
    }

    /// Applies one message on the loop.
    pub fn dispatch(&mut self, message: Message) {
        let Self {
            host,
            scheduler,
            snackbars,
            ..
        } = self;

        match snackbars.iter_mut().find(|s| s.id() == message.id()) {
            Some(snackbar) => snackbar.update(message, host, scheduler),
            None => tracing::trace!(?message, "message for unknown snackbar"),
        }
        snackbars.retain(|s| !s.is_dismissed());
    }

    /// Processes queued messages until every snackbar is dismissed.
    pub async fn run(&mut self) {
        while !self.snackbars.is_empty() {
            match self.receiver.recv().await {
                Some(message) => self.dispatch(message),
                None => break,
            }
        }
    }
}
