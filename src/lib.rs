// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a transient bottom-of-screen notification component.
//!
//! A [`snackbar::Snackbar`] shows a short message with an icon, springs into
//! view, dismisses itself after a delay (or on tap) and reports back through
//! a one-shot callback. The lifecycle is host agnostic: it drives any
//! [`snackbar::Host`] through a [`snackbar::Scheduler`], with an iced stage,
//! a tokio main loop and a deterministic headless pair provided here.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod icon;
pub mod runtime;
pub mod snackbar;
pub mod ui;
