// SPDX-License-Identifier: MPL-2.0
//! Core bubble data structures.

use super::coordinator::Coordinator;
use super::host::Host;
use crate::error::Result;
use std::time::Instant;

/// Unique identifier for a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleId(u64);

impl BubbleId {
    /// Creates a new unique bubble ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BubbleId {
    fn default() -> Self {
        Self::new()
    }
}

/// A transient text notification waiting to be shown.
#[derive(Debug, Clone)]
pub struct Bubble {
    id: BubbleId,
    text: String,
}

impl Bubble {
    /// Creates a new bubble with the given label text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: BubbleId::new(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> BubbleId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pushes the bubble onto the coordinator's overlay.
    ///
    /// Shorthand for [`Coordinator::show`].
    pub fn show(self, coordinator: &mut Coordinator, host: Option<&Host>, now: Instant) -> Result<BubbleId> {
        coordinator.show(self, host, now)
    }

    pub(super) fn into_parts(self) -> (BubbleId, String) {
        (self.id, self.text)
    }
}
