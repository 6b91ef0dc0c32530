// SPDX-License-Identifier: MPL-2.0
//! Snackbar layout arithmetic.
//!
//! The snackbar hangs from the bottom of the host's safe area. Its vertical
//! position is expressed as a *bottom offset*: the distance between the
//! snackbar's bottom edge and the safe-area bottom edge, positive downwards.
//! Resting on screen means an offset of `-margins.bottom`; hidden means the
//! whole card plus the bottom safe inset sits below that edge.

use crate::domain::{Frame, Insets, MinHeight, Size};
use std::sync::atomic::{AtomicU32, Ordering};

/// Icon edge length.
pub const ICON_SIZE: f32 = 20.0;
/// Gap between icon and message.
pub const ICON_SPACING: f32 = 4.0;
/// Padding above and below the content row.
pub const VERTICAL_PADDING: f32 = 14.0;
/// Minimum gap kept after the message.
pub const TRAILING_GAP: f32 = 10.0;

// Stores `f32` bits; `0x4240_0000` is 48.0.
static DEFAULT_MIN_HEIGHT: AtomicU32 = AtomicU32::new(0x4240_0000);

/// Returns the process-wide default minimum height.
#[must_use]
pub fn default_min_height() -> MinHeight {
    MinHeight::new(f32::from_bits(DEFAULT_MIN_HEIGHT.load(Ordering::Relaxed)))
}

/// Sets the process-wide default minimum height.
///
/// Only snackbars constructed afterwards pick up the new value.
pub fn set_default_min_height(height: MinHeight) {
    DEFAULT_MIN_HEIGHT.store(height.value().to_bits(), Ordering::Relaxed);
}

/// Approximate text metrics used to wrap the message.
///
/// Real glyph shaping happens in the renderer; the estimate only needs to
/// be stable so the same message always yields the same height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    /// Average advance as a fraction of the font size.
    pub average_advance: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            average_advance: 0.55,
            line_height: 1.3,
        }
    }
}

impl TextMetrics {
    /// Width of a run of `chars` characters.
    fn run_width(&self, chars: usize) -> f32 {
        chars as f32 * self.font_size * self.average_advance
    }

    /// Height of one line.
    #[must_use]
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Number of lines `text` wraps to within `width`.
    ///
    /// Words wider than the line are broken. Empty text still takes a line.
    #[must_use]
    pub fn line_count(&self, text: &str, width: f32) -> usize {
        let char_width = self.run_width(1);
        if width < char_width {
            // Degenerate width: one character per line.
            return text.chars().filter(|c| !c.is_whitespace()).count().max(1);
        }

        let mut lines = 0;
        for paragraph in text.split('\n') {
            lines += 1;
            let mut used = 0.0_f32;
            for word in paragraph.split_whitespace() {
                let word_width = self.run_width(word.chars().count());
                let space = if used > 0.0 { char_width } else { 0.0 };

                if used + space + word_width <= width {
                    used += space + word_width;
                } else if word_width <= width {
                    lines += 1;
                    used = word_width;
                } else {
                    // Break the word across as many lines as it needs.
                    let extra = (word_width / width).ceil() as usize;
                    lines += if used > 0.0 { extra } else { extra - 1 };
                    used = word_width - (extra - 1) as f32 * width;
                }
            }
        }
        lines.max(1)
    }
}

/// Reports the height the snackbar content needs at `width`.
///
/// Content is `[icon] 4 [message] >=10` with 14 points above and below.
/// The result is not yet clamped to the minimum height.
#[must_use]
pub fn measure(message: &str, width: f32, content_inset: Insets, metrics: &TextMetrics) -> f32 {
    let text_width = (width
        - content_inset.horizontal()
        - ICON_SIZE
        - ICON_SPACING
        - TRAILING_GAP)
        .max(0.0);
    let text_height = metrics.line_count(message, text_width) as f32 * metrics.line_height_px();
    let row = text_height.max(ICON_SIZE);

    VERTICAL_PADDING * 2.0 + row + content_inset.vertical()
}

/// Width the content is measured at: host width minus the side margins.
#[must_use]
pub fn fitting_width(host_width: f32, margins: Insets) -> f32 {
    (host_width - margins.horizontal()).max(0.0)
}

/// Minimal fitting height for `message` on a host `host_width` wide,
/// never below `min_height`.
#[must_use]
pub fn fitting_height(
    message: &str,
    host_width: f32,
    margins: Insets,
    content_inset: Insets,
    min_height: MinHeight,
    metrics: &TextMetrics,
) -> f32 {
    let width = fitting_width(host_width, margins);
    min_height.clamp(measure(message, width, content_inset, metrics))
}

/// Bottom offset of the card at rest.
#[must_use]
pub fn resting_offset(margins: Insets) -> f32 {
    -margins.bottom
}

/// Bottom offset that places the card fully below the visible area.
#[must_use]
pub fn hidden_offset(height: f32, safe_area: Insets) -> f32 {
    height + safe_area.bottom
}

/// Frame of the card for a given bottom offset.
///
/// The card spans the safe width minus the side margins and is centered
/// horizontally on the host.
#[must_use]
pub fn frame_at(
    host: Size,
    safe_area: Insets,
    margins: Insets,
    height: f32,
    bottom_offset: f32,
) -> Frame {
    let width = (host.width - safe_area.horizontal() - margins.horizontal()).max(0.0);
    let safe_bottom = host.height - safe_area.bottom;

    Frame {
        x: (host.width - width) / 2.0,
        y: safe_bottom + bottom_offset - height,
        width,
        height,
    }
}

/// Frame of the card at rest.
#[must_use]
pub fn resting_frame(host: Size, safe_area: Insets, margins: Insets, height: f32) -> Frame {
    frame_at(host, safe_area, margins, height, resting_offset(margins))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGINS: Insets = Insets::new(0.0, 12.0, 16.0, 12.0);
    const CONTENT: Insets = Insets::new(0.0, 10.0, 0.0, 10.0);

    #[test]
    fn short_message_fits_minimum_height() {
        let height = fitting_height(
            "Saved",
            375.0,
            MARGINS,
            CONTENT,
            MinHeight::new(48.0),
            &TextMetrics::default(),
        );
        assert_eq!(height, 48.0);
    }

    #[test]
    fn long_message_grows_beyond_minimum() {
        let message = "The document could not be synchronised because the server \
                       rejected the request after several attempts";
        let height = fitting_height(
            message,
            320.0,
            MARGINS,
            CONTENT,
            MinHeight::new(48.0),
            &TextMetrics::default(),
        );
        assert!(height > 48.0, "height was {height}");
    }

    #[test]
    fn fitting_height_never_below_minimum_for_any_width() {
        let metrics = TextMetrics::default();
        let min = MinHeight::new(64.0);
        for width in [-50.0, 0.0, 1.0, 10.0, 48.0, 120.0, 375.0, 1024.0, 4096.0] {
            for message in ["", "Saved", "a much longer message that wraps a few times"] {
                let height = fitting_height(message, width, MARGINS, CONTENT, min, &metrics);
                assert!(height >= 64.0, "width {width} message {message:?} gave {height}");
            }
        }
    }

    #[test]
    fn narrower_width_never_reduces_line_count() {
        let metrics = TextMetrics::default();
        let text = "one two three four five six seven eight nine ten";
        let wide = metrics.line_count(text, 400.0);
        let narrow = metrics.line_count(text, 80.0);
        assert!(narrow >= wide);
        assert_eq!(wide, 1);
    }

    #[test]
    fn explicit_newlines_start_new_lines() {
        let metrics = TextMetrics::default();
        assert_eq!(metrics.line_count("first\nsecond", 500.0), 2);
        assert_eq!(metrics.line_count("", 500.0), 1);
    }

    #[test]
    fn overlong_word_is_broken() {
        let metrics = TextMetrics::default();
        // 40 chars * 7.15 px = 286 px into 100 px lines.
        let word = "x".repeat(40);
        assert_eq!(metrics.line_count(&word, 100.0), 3);
    }

    #[test]
    fn fitting_width_subtracts_side_margins() {
        assert_eq!(fitting_width(375.0, MARGINS), 351.0);
        assert_eq!(fitting_width(10.0, MARGINS), 0.0);
    }

    #[test]
    fn resting_frame_respects_margins_and_safe_area() {
        let host = Size::new(400.0, 800.0);
        let safe = Insets::new(44.0, 0.0, 34.0, 0.0);
        let frame = resting_frame(host, safe, MARGINS, 48.0);

        assert_eq!(frame.width, 376.0);
        assert_eq!(frame.x, 12.0);
        assert_eq!(frame.max_y(), 800.0 - 34.0 - 16.0);
        assert_eq!(frame.mid_x(), 200.0);
    }

    #[test]
    fn hidden_frame_is_below_visible_area() {
        let host = Size::new(400.0, 800.0);
        let safe = Insets::new(0.0, 0.0, 34.0, 0.0);
        let frame = frame_at(host, safe, MARGINS, 48.0, hidden_offset(48.0, safe));
        assert!(frame.y >= host.height);
    }

    #[test]
    fn default_min_height_is_process_wide() {
        let original = default_min_height();
        assert_eq!(original.value(), MinHeight::DEFAULT);

        set_default_min_height(MinHeight::new(56.0));
        assert_eq!(default_min_height().value(), 56.0);

        set_default_min_height(original);
        assert_eq!(default_min_height(), original);
    }
}
