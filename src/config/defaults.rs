// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Margins and content padding
//! - **Animation**: Spring duration, damping and velocity
//! - **Timing**: Auto-dismiss delay bounds

use crate::domain::Insets;
use std::time::Duration;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Distance from the host's safe-area edges (top, left, bottom, right).
pub const MARGINS: Insets = Insets::new(0.0, 12.0, 16.0, 12.0);

/// Padding around the icon and message (top, left, bottom, right).
pub const CONTENT_INSET: Insets = Insets::new(0.0, 10.0, 0.0, 10.0);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the entrance and exit animations.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(500);

/// Spring damping ratio shared by entrance and exit.
pub const DAMPING_RATIO: f32 = 0.7;

/// Initial spring velocity shared by entrance and exit.
pub const INITIAL_VELOCITY: f32 = 5.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Time a snackbar stays on screen before dismissing itself.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(1500);

/// Longest accepted auto-dismiss delay (in milliseconds).
pub const MAX_AUTO_DISMISS_DELAY_MS: u64 = 60_000;

/// Longest accepted animation duration (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DAMPING_RATIO > 0.0 && DAMPING_RATIO <= 1.0);
    assert!(AUTO_DISMISS_DELAY.as_millis() as u64 <= MAX_AUTO_DISMISS_DELAY_MS);
    assert!(ANIMATION_DURATION.as_millis() as u64 <= MAX_ANIMATION_DURATION_MS);
};
