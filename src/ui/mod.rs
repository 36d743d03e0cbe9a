// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`bubbles`] - Bubble notifications: coordinator, host surfaces, rendering
//! - [`styles`] - Widget styles
//! - [`design_tokens`] - Design system constants (colors, opacity, radii)

pub mod bubbles;
pub mod design_tokens;
pub mod styles;
