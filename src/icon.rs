// SPDX-License-Identifier: MPL-2.0
//! Built-in icons.
//! Rasterizes a round checkmark badge with tiny-skia, used both as the
//! default snackbar icon and as the demo window icon.

use iced::widget::image::Handle;
use iced::window::{icon, Icon};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Edge length of the rasterized badge. Rendered at twice the on-screen
/// icon size so it stays sharp on high-DPI displays.
pub const BADGE_SIZE: u32 = 40;

/// Rasterize the checkmark badge to a `size`×`size` RGBA buffer.
/// Returns `None` if `size` is zero.
pub fn checkmark_badge_rgba(size: u32) -> Option<Vec<u8>> {
    let mut pixmap = Pixmap::new(size, size)?;
    let s = size as f32;

    let circle = PathBuilder::from_circle(s / 2.0, s / 2.0, s / 2.0)?;
    let mut fill = Paint::default();
    fill.set_color_rgba8(67, 179, 103, 255);
    fill.anti_alias = true;
    pixmap.fill_path(&circle, &fill, FillRule::Winding, Transform::identity(), None);

    let mut check = PathBuilder::new();
    check.move_to(s * 0.28, s * 0.52);
    check.line_to(s * 0.44, s * 0.68);
    check.line_to(s * 0.73, s * 0.36);
    let check = check.finish()?;

    let mut stroke_paint = Paint::default();
    stroke_paint.set_color_rgba8(255, 255, 255, 255);
    stroke_paint.anti_alias = true;
    let stroke = Stroke {
        width: s * 0.1,
        line_cap: LineCap::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&check, &stroke_paint, &stroke, Transform::identity(), None);

    Some(pixmap.data().to_vec())
}

/// Default snackbar icon.
///
/// Falls back to a single white pixel if rasterization fails.
pub fn checkmark_badge() -> Handle {
    match checkmark_badge_rgba(BADGE_SIZE) {
        Some(pixels) => Handle::from_rgba(BADGE_SIZE, BADGE_SIZE, pixels),
        None => Handle::from_rgba(1, 1, vec![255, 255, 255, 255]),
    }
}

/// Window title bar icon. Returns `None` if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let target = 128u32;
    let data = checkmark_badge_rgba(target)?;
    icon::from_rgba(data, target, target).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_has_expected_buffer_size() {
        let pixels = checkmark_badge_rgba(BADGE_SIZE).expect("badge renders");
        assert_eq!(pixels.len(), (BADGE_SIZE * BADGE_SIZE * 4) as usize);
    }

    #[test]
    fn badge_center_is_opaque_and_corners_transparent() {
        let size = BADGE_SIZE as usize;
        let pixels = checkmark_badge_rgba(BADGE_SIZE).expect("badge renders");
        let alpha = |x: usize, y: usize| pixels[(y * size + x) * 4 + 3];

        assert_eq!(alpha(size / 2, size / 4), 255);
        assert_eq!(alpha(0, 0), 0);
    }

    #[test]
    fn zero_size_badge_is_none() {
        assert!(checkmark_badge_rgba(0).is_none());
    }
}
