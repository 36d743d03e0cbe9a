// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Color;
    use iced_bubbles::config::BubbleStyle;
    use iced_bubbles::ui::design_tokens::{opacity, palette, radius};
    use iced_bubbles::ui::styles::bubble;

    #[test]
    fn bubble_style_is_callable() {
        let style = BubbleStyle::default();

        let container = bubble::bubble_container(style.background(), style.corner_radius(), 1.0);
        assert!(container.background.is_some());
    }

    #[test]
    fn default_style_is_built_from_design_tokens() {
        let style = BubbleStyle::default();

        assert_eq!(
            style.background(),
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            }
        );
        assert_eq!(style.text_color(), palette::WHITE);
        assert_eq!(style.corner_radius(), radius::BUBBLE);
    }

    #[test]
    fn fully_faded_bubble_is_invisible() {
        let style = BubbleStyle::default();
        assert_eq!(bubble::fade(style.text_color(), 0.0).a, 0.0);
        assert_eq!(bubble::fade(style.background(), 0.0).a, 0.0);
    }
}
