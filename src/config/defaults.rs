// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all bubble style constants.
//!
//! This module serves as the single source of truth for default values
//! and accepted ranges. Constants are organized by category.
//!
//! # Categories
//!
//! - **Typography**: Label font size bounds
//! - **Geometry**: Inset, stacking and edge margins, corner radius
//! - **Timing**: Push, lifetime and fade-out durations
//! - **Animation**: Frame interval used while bubbles are on screen

use crate::ui::design_tokens::radius;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Default label font size (bold system font).
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// Minimum allowed label font size.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Maximum allowed label font size.
pub const MAX_FONT_SIZE: f32 = 96.0;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Padding around the text label inside a bubble.
pub const DEFAULT_INSET_MARGIN: f32 = 10.0;

/// Vertical space between consecutive bubbles.
pub const DEFAULT_VERTICAL_MARGIN: f32 = 10.0;

/// Minimum space kept between a bubble and the left/right surface edges.
pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 10.0;

/// Corner radius of the bubble background.
pub const DEFAULT_CORNER_RADIUS: f32 = radius::BUBBLE;

/// Upper bound for every margin and the corner radius.
pub const MAX_MARGIN: f32 = 200.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of the push-into-screen animation (in milliseconds).
pub const DEFAULT_PUSH_DURATION_MS: u64 = 500;

/// Time from appearance to the beginning of the fade-out (in milliseconds).
pub const DEFAULT_LIFETIME_MS: u64 = 3_000;

/// Duration of the fade-out animation (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = 500;

/// Maximum push or fade-out animation duration (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 10_000;

/// Maximum bubble lifetime (in milliseconds).
pub const MAX_LIFETIME_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks while bubbles are visible (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FONT_SIZE > 0.0);
    assert!(MIN_FONT_SIZE < DEFAULT_FONT_SIZE);
    assert!(MAX_FONT_SIZE > DEFAULT_FONT_SIZE);

    assert!(DEFAULT_INSET_MARGIN <= MAX_MARGIN);
    assert!(DEFAULT_VERTICAL_MARGIN <= MAX_MARGIN);
    assert!(DEFAULT_HORIZONTAL_MARGIN <= MAX_MARGIN);
    assert!(DEFAULT_CORNER_RADIUS <= MAX_MARGIN);

    assert!(DEFAULT_PUSH_DURATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_LIFETIME_MS <= MAX_LIFETIME_MS);

    assert!(FRAME_INTERVAL_MS > 0);
    assert!(FRAME_INTERVAL_MS < DEFAULT_PUSH_DURATION_MS);
};
