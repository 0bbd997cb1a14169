// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the crate's design tokens.

## Organization

- **Palette**: Base colors, including the four built-in toast states
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Insets**: Resting distances from the screen edges
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced_core::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Semantic toast state colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.184, 0.8, 0.443); // #2ecc71
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.769, 0.059); // #f1c40f
    pub const ERROR_500: Color = Color::from_rgb(0.906, 0.298, 0.235); // #e74c3c
    pub const INFO_500: Color = Color::from_rgb(0.204, 0.286, 0.369); // #34495e
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed width of every toast card.
    pub const TOAST_WIDTH: f32 = 280.0;

    /// Maximum width the message text may occupy when measuring.
    pub const TOAST_TEXT_WIDTH: f32 = 240.0;

    /// A toast is never shorter than this, whatever its message.
    pub const TOAST_MIN_HEIGHT: f32 = 40.0;

    /// Vertical padding added around the measured message text.
    pub const TOAST_TEXT_PADDING: f32 = 12.0;

    /// Edge length of the state icon.
    pub const TOAST_ICON: f32 = 28.0;

    /// Horizontal padding between card edge, icon, and label.
    pub const TOAST_CONTENT_PADDING: f32 = 10.0;
}

// ============================================================================
// Resting Insets
// ============================================================================

pub mod insets {
    /// Distance from the top screen edge for top-located toasts.
    pub const TOAST_TOP: f32 = 50.0;

    /// Distance from the bottom screen edge for bottom-located toasts.
    pub const TOAST_BOTTOM: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - demo screen heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - toast message text, button labels
    pub const BODY: f32 = 14.0;

    /// Caption - status line, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;

    /// Corner radius of the toast card.
    pub const TOAST: f32 = 6.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced_core::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_TEXT_WIDTH < sizing::TOAST_WIDTH);
    assert!(sizing::TOAST_ICON < sizing::TOAST_MIN_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
