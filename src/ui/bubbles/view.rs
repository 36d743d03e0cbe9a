// SPDX-License-Identifier: MPL-2.0
//! Rendering of bubble frames.
//!
//! Each bubble is a rounded, padded label centred horizontally and lifted
//! from the bottom edge by its offset. Offsets below the edge are drawn by
//! translating the bubble down, so a new bubble rises into view from outside
//! the surface. The overlay is a `Stack` filling the host surface; none of
//! its widgets react to input, so the content beneath stays interactive.

use super::coordinator::BubbleFrame;
use crate::config::BubbleStyle;
use crate::ui::styles;
use iced::widget::{float, text, Container, Stack, Text};
use iced::{alignment, Element, Length, Padding, Theme, Vector};

/// Where a bubble is drawn relative to the bottom edge of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Bottom padding lifting the bubble above the edge.
    pub lift: f32,
    /// Downward translation of a bubble still (partly) below the edge.
    pub sink: f32,
}

/// Maps a bottom offset to padding above the edge or translation below it.
///
/// Exactly one of `lift` and `sink` is non-zero, and `lift - sink == offset`.
#[must_use]
pub fn placement(offset: f32) -> Placement {
    if offset >= 0.0 {
        Placement {
            lift: offset,
            sink: 0.0,
        }
    } else {
        Placement {
            lift: 0.0,
            sink: -offset,
        }
    }
}

/// Renders a single bubble.
pub fn bubble<'a, M: 'a>(frame: &BubbleFrame, style: &BubbleStyle) -> Element<'a, M> {
    let text_color = styles::bubble::fade(style.text_color(), frame.opacity);
    let background = style.background();
    let radius = style.corner_radius();
    let opacity = frame.opacity;

    let label = Text::new(frame.text.clone())
        .size(style.font_size())
        .font(style.font())
        .wrapping(text::Wrapping::None)
        .color(text_color);

    Container::new(label)
        .padding(style.inset_margin())
        .max_width(frame.max_width)
        .clip(true)
        .style(move |_theme: &Theme| styles::bubble::bubble_container(background, radius, opacity))
        .into()
}

/// Renders the overlay with all bubble frames.
pub fn overlay<'a, M: 'a>(frames: Vec<BubbleFrame>, style: &BubbleStyle) -> Element<'a, M> {
    if frames.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'a, M>> = frames
        .iter()
        .map(|frame| {
            let Placement { lift, sink } = placement(frame.offset);
            let positioned =
                float(bubble(frame, style)).translate(move |_bounds, _viewport| Vector::new(0.0, sink));

            Container::new(positioned)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(Padding {
                    bottom: lift,
                    ..Padding::ZERO
                })
                .clip(true)
                .into()
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::ui::bubbles::{Bubble, BubbleId, Coordinator, Host, Phase};
    use iced::{window, Size};
    use std::time::{Duration, Instant};

    fn frame(offset: f32, opacity: f32) -> BubbleFrame {
        BubbleFrame {
            id: BubbleId::new(),
            text: "Copied".to_string(),
            offset,
            opacity,
            height: 42.1,
            max_width: 300.0,
            phase: Phase::Lingering,
        }
    }

    #[test]
    fn overlay_accepts_frames_below_the_edge() {
        let style = BubbleStyle::default();
        let _: Element<'_, ()> = overlay(vec![frame(-52.1, 0.0), frame(0.0, 1.0)], &style);
    }

    #[test]
    fn empty_overlay_renders() {
        let _: Element<'_, ()> = overlay(Vec::new(), &BubbleStyle::default());
    }

    #[test]
    fn placement_lifts_bubbles_above_the_edge() {
        assert_eq!(placement(30.0), Placement { lift: 30.0, sink: 0.0 });
        assert_eq!(placement(0.0), Placement { lift: 0.0, sink: 0.0 });
    }

    #[test]
    fn placement_sinks_bubbles_below_the_edge() {
        let below = placement(-52.1);
        assert_eq!(below.lift, 0.0);
        assert_abs_diff_eq!(below.sink, 52.1, epsilon = F32_EPSILON);
    }

    #[test]
    fn first_bubble_rises_from_below_the_edge_during_push() {
        let start = Instant::now();
        let host = Host::new(window::Id::unique(), Size::new(320.0, 480.0));
        let mut coordinator = Coordinator::default();
        coordinator
            .show(Bubble::new("Saved"), Some(&host), start)
            .expect("host is available");
        let push = coordinator.style().push_duration();

        let sinks: Vec<f32> = (0..=4u32)
            .map(|step| {
                let frame = &coordinator.frames(start + push * step / 4)[0];
                let placed = placement(frame.offset);
                assert_abs_diff_eq!(placed.lift - placed.sink, frame.offset, epsilon = F32_EPSILON);
                placed.sink
            })
            .collect();

        assert!(sinks[0] > 0.0);
        assert!(sinks.windows(2).all(|w| w[0] >= w[1]));
        assert!(sinks[1] > sinks[3]);
        assert_abs_diff_eq!(sinks[4], 0.0, epsilon = F32_EPSILON);
        assert_eq!(
            placement(coordinator.frames(start + push + Duration::from_millis(1))[0].offset).sink,
            0.0
        );
    }
}
