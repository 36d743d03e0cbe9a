// SPDX-License-Identifier: MPL-2.0
//! Stacking arithmetic.
//!
//! Offsets are logical pixels from the bottom edge of the overlay to the
//! bottom edge of a bubble, positive upward. A bubble enters just below the
//! edge and every push moves the whole stack up by one bubble plus margin,
//! so resting offsets never overlap.

use crate::config::BubbleStyle;
use iced::Size;

/// Line height of the label, relative to the font size.
///
/// Matches the default relative line height of Iced text.
pub const LINE_HEIGHT: f32 = 1.3;

/// Height of a single-line bubble: label line plus inset on both sides.
#[must_use]
pub fn bubble_height(style: &BubbleStyle) -> f32 {
    style.font_size() * LINE_HEIGHT + 2.0 * style.inset_margin()
}

/// Widest a bubble may grow on a surface of the given size.
///
/// Bubbles are centred; longer labels are clipped inside this width so the
/// horizontal margins are always preserved.
#[must_use]
pub fn max_bubble_width(style: &BubbleStyle, surface: Size) -> f32 {
    (surface.width - 2.0 * style.horizontal_margin()).max(0.0)
}

/// Distance every bubble moves up when a new one is pushed.
#[must_use]
pub fn push_delta(height: f32, style: &BubbleStyle) -> f32 {
    height + style.vertical_margin()
}

/// Starting offset of a new bubble, one push below the resting position.
#[must_use]
pub fn entry_offset(height: f32, style: &BubbleStyle) -> f32 {
    -push_delta(height, style)
}
