// SPDX-License-Identifier: MPL-2.0
//! Transient bubble notifications.
//!
//! A bubble is a small rounded label that slides in from the bottom of a
//! window, pushes previously shown bubbles up, lingers, then fades out and
//! is removed. All bubbles share one overlay owned by a [`Coordinator`].
//!
//! # Components
//!
//! - [`bubble`] - `Bubble` and its unique `BubbleId`
//! - [`coordinator`] - `Coordinator` stacking and animating bubbles
//! - [`host`] - `Host` surfaces and the `Hosts` window registry
//! - [`animation`] - Easing, transitions and lifecycle phases
//! - [`layout`] - Stacking arithmetic
//! - [`view`] - Iced rendering of bubble frames
//!
//! # Usage
//!
//! ```ignore
//! use iced_bubbles::ui::bubbles::{Bubble, Coordinator, Hosts, Message as BubbleMessage};
//! use std::time::Instant;
//!
//! // Update: track windows and forward messages
//! hosts.update(event);
//! coordinator.update(BubbleMessage::Host(event));
//!
//! // Show a bubble on the first open window
//! Bubble::new("Copied to clipboard").show(&mut coordinator, hosts.first().as_ref(), Instant::now())?;
//!
//! // Subscriptions
//! Subscription::batch([
//!     Hosts::subscription().map(Message::Host),
//!     coordinator.subscription().map(Message::Bubbles),
//! ]);
//!
//! // View: layer the overlay above the content
//! stack![content, coordinator.view(Instant::now())]
//! ```

pub mod animation;
pub mod bubble;
pub mod coordinator;
pub mod host;
pub mod layout;
pub mod view;

pub use animation::Phase;
pub use bubble::{Bubble, BubbleId};
pub use coordinator::{BubbleFrame, Coordinator, Message, Overlay, FRAME_INTERVAL};
pub use host::{Host, HostEvent, Hosts};
