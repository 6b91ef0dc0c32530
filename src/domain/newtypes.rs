// SPDX-License-Identifier: MPL-2.0
//! Snackbar newtypes.
//!
//! This module provides type-safe wrappers for animation and layout values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Damping Bounds
// =============================================================================

/// Spring damping ratio bounds.
pub mod damping_bounds {
    /// Smallest accepted ratio. Zero would never settle.
    pub const MIN: f32 = 0.01;
    /// Critical damping. Larger ratios are treated as critical.
    pub const MAX: f32 = 1.0;
    /// Default damping ratio.
    pub const DEFAULT: f32 = 0.7;
}

// =============================================================================
// DampingRatio
// =============================================================================

/// Spring damping ratio, guaranteed to be within (0, 1].
///
/// Values closer to zero oscillate longer; `1.0` settles without overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingRatio(f32);

impl DampingRatio {
    /// Creates a new damping ratio, clamping the value to the valid range.
    ///
    /// NaN falls back to the default ratio.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(damping_bounds::MIN, damping_bounds::MAX))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the spring settles without overshoot.
    #[must_use]
    pub fn is_critical(self) -> bool {
        self.0 >= damping_bounds::MAX
    }
}

impl Default for DampingRatio {
    fn default() -> Self {
        Self(damping_bounds::DEFAULT)
    }
}

// =============================================================================
// MinHeight
// =============================================================================

/// Minimum snackbar height in logical pixels, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinHeight(f32);

impl MinHeight {
    /// Default minimum height.
    pub const DEFAULT: f32 = 48.0;

    /// Creates a new minimum height. Negative and NaN values become zero.
    #[must_use]
    pub fn new(height: f32) -> Self {
        Self(height.max(0.0))
    }

    /// Returns the raw height.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Raises `height` to this minimum.
    #[must_use]
    pub fn clamp(self, height: f32) -> f32 {
        height.max(self.0)
    }
}

impl Default for MinHeight {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
