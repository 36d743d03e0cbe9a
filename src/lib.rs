// SPDX-License-Identifier: MPL-2.0
//! `iced_bubbles` provides transient "bubble" notifications for Iced
//! applications.
//!
//! Bubbles slide in from the bottom of the window, stack above the ones
//! already shown, linger for a fixed time, then fade out. Styling is an
//! explicit [`config::BubbleStyle`] handed to the [`Coordinator`], and the
//! window the overlay lives on is an explicit [`Host`].

#![doc(html_root_url = "https://docs.rs/iced_bubbles/0.1.0")]

pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use config::BubbleStyle;
pub use error::Error;
pub use ui::bubbles::{Bubble, BubbleId, Coordinator, Host, Hosts};
