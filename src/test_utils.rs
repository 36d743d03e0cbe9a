// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets and opacities come out of eased interpolation, so tests compare
//! them with the `approx` assertion macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;
