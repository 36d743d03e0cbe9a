// SPDX-License-Identifier: MPL-2.0
//! Bubble stacking and lifecycle management.
//!
//! The `Coordinator` owns the overlay, the ordered list of bubbles on it and
//! their animations. It is driven entirely by the Iced update loop: `show`
//! pushes a bubble, `Message::Tick` advances time and removes bubbles whose
//! fade-out has completed.

use super::animation::{self, Phase, Timing, Transition};
use super::bubble::{Bubble, BubbleId};
use super::host::{Host, HostEvent, Hosts};
use super::layout;
use super::view;
use crate::config::{BubbleStyle, FRAME_INTERVAL_MS};
use crate::error::{Error, Result};
use iced::{time, window, Element, Size, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Interval between animation ticks while bubbles are on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

/// Messages for coordinator state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame; removes bubbles whose fade-out has completed.
    Tick(Instant),
    /// A window was opened, resized or closed.
    Host(HostEvent),
}

/// The full-surface layer bubbles are drawn on, bound to one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    window: window::Id,
    size: Size,
}

impl Overlay {
    #[must_use]
    pub fn window(&self) -> window::Id {
        self.window
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

impl From<&Host> for Overlay {
    fn from(host: &Host) -> Self {
        Self {
            window: host.window(),
            size: host.size(),
        }
    }
}

/// Snapshot of one bubble at a given instant, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleFrame {
    pub id: BubbleId,
    pub text: String,
    /// Distance from the overlay's bottom edge to the bubble's bottom edge.
    pub offset: f32,
    pub opacity: f32,
    pub height: f32,
    pub max_width: f32,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
struct Entry {
    id: BubbleId,
    text: String,
    height: f32,
    posted_at: Instant,
    timing: Timing,
    offset: Transition,
}

impl Entry {
    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.posted_at)
    }

    fn phase(&self, now: Instant) -> Phase {
        Phase::at(self.age(now), &self.timing)
    }
}

/// Stacks and animates bubbles on a single overlay.
#[derive(Debug, Default)]
pub struct Coordinator {
    style: BubbleStyle,
    overlay: Option<Overlay>,
    /// Bubbles on the overlay (oldest first).
    entries: VecDeque<Entry>,
}

impl Coordinator {
    /// Creates an empty coordinator with the given style.
    #[must_use]
    pub fn new(style: BubbleStyle) -> Self {
        Self {
            style,
            overlay: None,
            entries: VecDeque::new(),
        }
    }

    /// Pushes a bubble onto the overlay.
    ///
    /// The overlay is created on first use and bound to `host`. Once it
    /// exists, `host` is only used to refresh the overlay size when it refers
    /// to the same window.
    ///
    /// Every bubble already on screen slides up by the new bubble's height
    /// plus the vertical margin while the new one enters from below the edge
    /// and fades in. The new bubble starts fading out once the style's
    /// lifetime has elapsed and is removed by the first tick after the fade.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHostSurface`] when no overlay exists yet and no
    /// host is given. Nothing is added in that case.
    pub fn show(&mut self, bubble: Bubble, host: Option<&Host>, now: Instant) -> Result<BubbleId> {
        self.attach(host)?;

        let height = layout::bubble_height(&self.style);
        let delta = layout::push_delta(height, &self.style);
        let push = self.style.push_duration();

        for entry in &mut self.entries {
            let target = entry.offset.target() + delta;
            entry.offset.retarget(now, target, push);
        }

        let (id, text) = bubble.into_parts();
        let start = layout::entry_offset(height, &self.style);
        debug!(?id, %text, stacked = self.entries.len(), "showing bubble");

        self.entries.push_back(Entry {
            id,
            text,
            height,
            posted_at: now,
            timing: Timing::from(&self.style),
            offset: Transition::new(start, start + delta, now, push),
        });

        Ok(id)
    }

    /// Removes every bubble whose fade-out has completed.
    ///
    /// Returns the IDs of the removed bubbles, oldest first.
    pub fn tick(&mut self, now: Instant) -> Vec<BubbleId> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if entry.phase(now) == Phase::Finished {
                removed.push(entry.id);
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            debug!(?removed, remaining = self.entries.len(), "removed faded bubbles");
        } else {
            trace!(visible = self.entries.len(), "bubble tick");
        }
        removed
    }

    /// Handles a coordinator message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                self.tick(now);
            }
            Message::Host(HostEvent::Opened(..)) => {}
            Message::Host(HostEvent::Resized(window, size)) => {
                if let Some(overlay) = self.overlay.as_mut().filter(|o| o.window == window) {
                    overlay.size = size;
                }
            }
            Message::Host(HostEvent::Closed(window)) => {
                if self.overlay.is_some_and(|o| o.window == window) {
                    debug!(?window, "host window closed, detaching bubble overlay");
                    self.detach();
                }
            }
        }
    }

    /// Reconciles the overlay with the window registry.
    ///
    /// Picks up the current size of the overlay's window, or detaches the
    /// overlay when that window is no longer registered.
    pub fn sync(&mut self, hosts: &Hosts) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        match hosts.get(overlay.window) {
            Some(host) => overlay.size = host.size(),
            None => {
                debug!(window = ?overlay.window, "host window gone, detaching bubble overlay");
                self.detach();
            }
        }
    }

    /// Animation ticks while bubbles are on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Render snapshots of every bubble at `now`, oldest first.
    #[must_use]
    pub fn frames(&self, now: Instant) -> Vec<BubbleFrame> {
        let max_width = self
            .overlay
            .map_or(0.0, |o| layout::max_bubble_width(&self.style, o.size));

        self.entries
            .iter()
            .map(|entry| {
                let age = entry.age(now);
                BubbleFrame {
                    id: entry.id,
                    text: entry.text.clone(),
                    offset: entry.offset.value_at(now),
                    opacity: animation::opacity_at(age, &entry.timing),
                    height: entry.height,
                    max_width,
                    phase: Phase::at(age, &entry.timing),
                }
            })
            .collect()
    }

    /// Renders the overlay with all bubbles at `now`.
    pub fn view<'a, M: 'a>(&self, now: Instant) -> Element<'a, M> {
        view::overlay(self.frames(now), &self.style)
    }

    /// Returns whether any bubble is on screen and needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns the number of bubbles on the overlay.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// IDs of the bubbles on the overlay, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = BubbleId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    #[must_use]
    pub fn style(&self) -> &BubbleStyle {
        &self.style
    }

    /// Replaces the style.
    ///
    /// Bubbles already on screen keep their timing and position; colors,
    /// font and margins apply to all bubbles from the next frame.
    pub fn set_style(&mut self, style: BubbleStyle) {
        self.style = style;
    }

    /// Removes all bubbles, keeping the overlay.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes all bubbles and the overlay.
    ///
    /// The next `show` needs a host again.
    pub fn detach(&mut self) {
        self.entries.clear();
        self.overlay = None;
    }

    fn attach(&mut self, host: Option<&Host>) -> Result<Overlay> {
        if let Some(overlay) = self.overlay.as_mut() {
            if let Some(host) = host {
                if host.window() == overlay.window {
                    overlay.size = host.size();
                }
            }
            return Ok(*overlay);
        }

        let Some(host) = host else {
            warn!("no host surface available, bubble not shown");
            return Err(Error::NoHostSurface);
        };

        let overlay = Overlay::from(host);
        debug!(window = ?overlay.window, size = ?overlay.size, "attached bubble overlay");
        self.overlay = Some(overlay);
        Ok(overlay)
    }
}
