// SPDX-License-Identifier: MPL-2.0
//! Host surfaces the bubble overlay can attach to.
//!
//! A [`Host`] is an explicit reference to a window and its current size.
//! [`Hosts`] keeps track of the open windows from Iced window events so the
//! application can resolve one at display time with [`Hosts::first`].

use iced::{event, window, Event, Size, Subscription};

/// A window the overlay can be placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Host {
    window: window::Id,
    size: Size,
}

impl Host {
    #[must_use]
    pub fn new(window: window::Id, size: Size) -> Self {
        Self { window, size }
    }

    #[must_use]
    pub fn window(&self) -> window::Id {
        self.window
    }

    /// Logical size of the window.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Window lifecycle changes relevant to bubble hosting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Opened(window::Id, Size),
    Resized(window::Id, Size),
    Closed(window::Id),
}

/// Open windows, in the order they were opened.
#[derive(Debug, Clone, Default)]
pub struct Hosts {
    windows: Vec<Host>,
}

impl Hosts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a window, or refreshes its size if already known.
    pub fn opened(&mut self, window: window::Id, size: Size) {
        if let Some(host) = self.get_mut(window) {
            host.size = size;
        } else {
            self.windows.push(Host::new(window, size));
        }
    }

    /// Updates the size of a window. Unknown windows are registered.
    pub fn resized(&mut self, window: window::Id, size: Size) {
        self.opened(window, size);
    }

    /// Forgets a window. Returns `true` if it was known.
    pub fn closed(&mut self, window: window::Id) -> bool {
        let before = self.windows.len();
        self.windows.retain(|host| host.window != window);
        self.windows.len() < before
    }

    /// Applies a window event.
    pub fn update(&mut self, event: HostEvent) {
        match event {
            HostEvent::Opened(window, size) => self.opened(window, size),
            HostEvent::Resized(window, size) => self.resized(window, size),
            HostEvent::Closed(window) => {
                self.closed(window);
            }
        }
    }

    /// The first window opened that is still open.
    #[must_use]
    pub fn first(&self) -> Option<Host> {
        self.windows.first().copied()
    }

    #[must_use]
    pub fn get(&self, window: window::Id) -> Option<Host> {
        self.windows.iter().find(|host| host.window == window).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Listens to window open, resize and close events.
    pub fn subscription() -> Subscription<HostEvent> {
        event::listen_with(host_event)
    }

    fn get_mut(&mut self, window: window::Id) -> Option<&mut Host> {
        self.windows.iter_mut().find(|host| host.window == window)
    }
}

fn host_event(event: Event, _status: event::Status, window: window::Id) -> Option<HostEvent> {
    match event {
        Event::Window(window::Event::Opened { size, .. }) => Some(HostEvent::Opened(window, size)),
        Event::Window(window::Event::Resized(size)) => Some(HostEvent::Resized(window, size)),
        Event::Window(window::Event::Closed) => Some(HostEvent::Closed(window)),
        _ => None,
    }
}
