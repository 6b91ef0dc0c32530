// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Pure value types with ZERO external dependencies.
//!
//! This module contains geometry and bounded value objects shared by the
//! lifecycle controller, the layout arithmetic and the iced host surface.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`geometry`]: Layout primitives ([`Insets`](geometry::Insets), [`Size`](geometry::Size),
//!   [`Frame`](geometry::Frame))
//! - [`newtypes`]: Bounded values ([`DampingRatio`](newtypes::DampingRatio),
//!   [`MinHeight`](newtypes::MinHeight))

pub mod geometry;
pub mod newtypes;

pub use geometry::{Frame, Insets, Size};
pub use newtypes::{DampingRatio, MinHeight};
