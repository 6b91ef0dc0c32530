// SPDX-License-Identifier: MPL-2.0
//! iced presentation of snackbars: tokens, colors, the host surface and
//! the card widget.

pub mod design_tokens;
pub mod snackbar_view;
pub mod stage;
pub mod theming;

pub use stage::Stage;
