// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Base colors and scales backing the default bubble look.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Radius**: Border radii

## Examples

```
use iced_bubbles::ui::design_tokens::{opacity, palette};
use iced::Color;

// The default bubble background
let background = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
assert_eq!(background.a, 0.5);
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
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Bubble corners
    pub const BUBBLE: f32 = 9.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Radius validation
    assert!(radius::BUBBLE > 0.0);
};
