// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the snackbar's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snackbar::ui::design_tokens::{opacity, palette};
use iced::Color;

// Snackbar text on a light card
let text = Color {
    a: opacity::TEXT,
    ..palette::BLACK
};
assert!(text.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Card background in dark mode.
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);
    /// Secondary text in the demo window.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Message text over the card.
    pub const TEXT: f32 = 0.8;
    /// Card drop shadow.
    pub const SHADOW: f32 = 0.14;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    use crate::snackbar::layout;

    /// Between icon and message.
    pub const ICON_GAP: f32 = layout::ICON_SPACING;
    /// Above and below the content row.
    pub const CONTENT_VERTICAL: f32 = layout::VERTICAL_PADDING;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    use crate::snackbar::layout;

    pub const ICON: f32 = layout::ICON_SIZE;
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Snackbar message.
    pub const MESSAGE: f32 = 13.0;
    /// Demo headings.
    pub const TITLE: f32 = 20.0;
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Snackbar card corners.
    pub const CARD: f32 = 6.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::opacity;
    use iced::{Color, Shadow, Vector};

    /// Soft shadow under the card, tinted with `color`.
    #[must_use]
    pub fn card(color: Color) -> Shadow {
        Shadow {
            color: Color {
                a: opacity::SHADOW,
                ..color
            },
            offset: Vector { x: 0.0, y: 2.0 },
            blur_radius: 6.0,
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TEXT > 0.0 && opacity::TEXT < 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < opacity::TEXT);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::MESSAGE);
    assert!(radius::CARD > 0.0);
    assert!(sizing::BUTTON_HEIGHT > sizing::ICON);
};
