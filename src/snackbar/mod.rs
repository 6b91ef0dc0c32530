// SPDX-License-Identifier: MPL-2.0
//! Snackbar notifications that slide in from the bottom of a host surface.
//!
//! A snackbar shows an icon and a message, stays for a configurable delay,
//! then animates out on its own or when dismissed explicitly.
//!
//! # Components
//!
//! - [`controller`] - `Snackbar` lifecycle and the loop `Message`s it reacts to
//! - [`host`] - `Host` and `Scheduler` collaborator traits
//! - [`layout`] - fitting height, resting frame and bottom offsets
//! - [`animation`] - spring parameters and sampling
//! - [`options`] - construction-time configuration
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::snackbar::Snackbar;
//!
//! let mut snackbar = Snackbar::new("Saved", icon)
//!     .on_dismiss(|s| tracing::info!(id = %s.id(), "gone"));
//!
//! snackbar.show(&mut host, &mut scheduler);
//!
//! // Later, on the owning loop, for every message the scheduler delivers:
//! snackbar.update(message, &mut host, &mut scheduler);
//! ```
//!
//! # Design Considerations
//!
//! - One snackbar per instance; several instances overlap rather than stack
//! - Show, dismiss and immediate dismiss are idempotent
//! - The dismiss callback fires exactly once

pub mod animation;
pub mod controller;
pub mod host;
pub mod layout;
pub mod options;
pub mod state;

pub use animation::{Animation, Curve, Track};
pub use controller::{DismissCallback, Message, Phase, Snackbar, SnackbarId};
pub use host::{Host, Presentation, Scheduler, TimerHandle};
pub use layout::{default_min_height, set_default_min_height, TextMetrics};
pub use options::SnackbarOptions;
pub use state::LifecycleState;
