// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation for the push, linger and fade-out phases.
//!
//! Nothing here owns a clock: every function takes the elapsed time or the
//! current [`Instant`] explicitly, so a bubble's whole lifecycle can be
//! replayed deterministically.

use crate::config::BubbleStyle;
use std::time::{Duration, Instant};

/// Fraction of `duration` covered by `elapsed`, in `0.0..=1.0`.
///
/// A zero duration completes immediately.
#[must_use]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-in-out curve.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation that lands exactly on `to` at `t == 1.0`.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

/// An eased move of a scalar value between two points in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Returns the eased value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        lerp(self.from, self.to, ease_in_out(progress(elapsed, self.duration)))
    }

    /// Returns the value the transition ends on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts a new move towards `to`, continuing from the value at `now`.
    pub fn retarget(&mut self, now: Instant, to: f32, duration: Duration) {
        *self = Self::new(self.value_at(now), to, now, duration);
    }
}

/// Durations captured from the style when a bubble is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub push: Duration,
    pub lifetime: Duration,
    pub fade: Duration,
}

impl Timing {
    /// Age at which the bubble is fully transparent and removed.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.lifetime + self.fade
    }
}

impl From<&BubbleStyle> for Timing {
    fn from(style: &BubbleStyle) -> Self {
        Self {
            push: style.push_duration(),
            lifetime: style.lifetime(),
            fade: style.fade_duration(),
        }
    }
}

/// Lifecycle phase of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding into place and fading in.
    Pushing,
    /// Fully visible, waiting for its lifetime to elapse.
    Lingering,
    /// Fading out.
    FadingOut,
    /// Fully transparent; due for removal.
    Finished,
}

impl Phase {
    /// Classifies a bubble by its age since it was posted.
    ///
    /// The fade-out is scheduled from the posting time, so a lifetime shorter
    /// than the push duration starts fading before the push completes.
    #[must_use]
    pub fn at(age: Duration, timing: &Timing) -> Self {
        if age >= timing.total() {
            Phase::Finished
        } else if age >= timing.lifetime {
            Phase::FadingOut
        } else if age < timing.push {
            Phase::Pushing
        } else {
            Phase::Lingering
        }
    }
}

/// Opacity of a bubble of the given age.
#[must_use]
pub fn opacity_at(age: Duration, timing: &Timing) -> f32 {
    let fade_in = ease_in_out(progress(age, timing.push));
    let fade_out = match age.checked_sub(timing.lifetime) {
        Some(since_fade) => 1.0 - ease_in_out(progress(since_fade, timing.fade)),
        None => 1.0,
    };
    fade_in * fade_out
}
