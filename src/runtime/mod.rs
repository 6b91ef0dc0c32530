// SPDX-License-Identifier: MPL-2.0
//! Execution environments for the lifecycle controller.
//!
//! - [`ManualScheduler`] and [`HeadlessHost`]: virtual clock, nothing drawn
//! - [`TokioScheduler`]: real timers posting onto a channel
//! - [`MainLoop`] and [`DismissHandle`]: a single owning loop that any
//!   thread can ask to dismiss a snackbar
//!
//! The iced application has its own task-based scheduler in
//! [`app`](crate::app).

mod main_loop;
mod manual;
mod tokio_scheduler;

pub use main_loop::{DismissHandle, MainLoop};
pub use manual::{HeadlessHost, ManualScheduler};
pub use tokio_scheduler::TokioScheduler;
