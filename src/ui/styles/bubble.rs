// SPDX-License-Identifier: MPL-2.0
//! Bubble container styles.

use crate::ui::design_tokens::opacity;
use iced::widget::container;
use iced::{Background, Border, Color};

/// Scales the alpha of `color` by `factor`, clamped to `0.0..=1.0`.
#[must_use]
pub fn fade(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Rounded bubble background at the given animation opacity.
#[must_use]
pub fn bubble_container(background: Color, radius: f32, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(background, opacity))),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::ui::design_tokens::{palette, radius};

    #[test]
    fn fade_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        let faded = fade(color, 0.5);

        assert_eq!((faded.r, faded.g, faded.b), (0.2, 0.4, 0.6));
        assert_abs_diff_eq!(faded.a, 0.25, epsilon = F32_EPSILON);
    }

    #[test]
    fn fade_clamps_factor() {
        assert_eq!(fade(palette::WHITE, 2.0).a, 1.0);
        assert_eq!(fade(palette::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn bubble_container_uses_faded_background_and_radius() {
        let style = bubble_container(palette::BLACK, radius::BUBBLE, 0.5);

        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: 0.5,
                ..palette::BLACK
            }))
        );
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::BUBBLE));
    }
}
