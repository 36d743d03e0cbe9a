// SPDX-License-Identifier: MPL-2.0
//! Bubble style configuration, including loading and saving it to a
//! `bubbles.toml` file.
//!
//! [`BubbleStyle`] is the explicit replacement for process-wide style knobs:
//! it is handed to the coordinator at construction time (or swapped later
//! with `Coordinator::set_style`). [`Config`] is its on-disk form, where every
//! key is optional and missing keys take the defaults from [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_bubbles::config::{self, BubbleStyle};
//! use std::time::Duration;
//!
//! // Load the user's style, falling back to defaults
//! let style = config::load().unwrap_or_default();
//!
//! // Tweak it and persist
//! let style = style.with_lifetime(Duration::from_secs(5));
//! config::save(&style).expect("Failed to save bubble style");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::design_tokens::{opacity, palette};
use iced::font::Weight;
use iced::{Color, Font};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "bubbles.toml";
const APP_NAME: &str = "IcedBubbles";

/// Visual and timing settings shared by every bubble of a coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    background: Color,
    text_color: Color,
    font_size: f32,
    bold: bool,
    inset_margin: f32,
    vertical_margin: f32,
    horizontal_margin: f32,
    corner_radius: f32,
    push_duration: Duration,
    lifetime: Duration,
    fade_duration: Duration,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            text_color: palette::WHITE,
            font_size: DEFAULT_FONT_SIZE,
            bold: true,
            inset_margin: DEFAULT_INSET_MARGIN,
            vertical_margin: DEFAULT_VERTICAL_MARGIN,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            corner_radius: DEFAULT_CORNER_RADIUS,
            push_duration: Duration::from_millis(DEFAULT_PUSH_DURATION_MS),
            lifetime: Duration::from_millis(DEFAULT_LIFETIME_MS),
            fade_duration: Duration::from_millis(DEFAULT_FADE_DURATION_MS),
        }
    }
}

impl BubbleStyle {
    /// Creates a style with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a style from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(Self::from(config))
    }

    /// Serializes the style to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&Config::from(self))?)
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the label font size, clamped to the supported range.
    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = clamp_finite(size, MIN_FONT_SIZE, MAX_FONT_SIZE, DEFAULT_FONT_SIZE);
        self
    }

    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the padding around the text label.
    #[must_use]
    pub fn with_inset_margin(mut self, margin: f32) -> Self {
        self.inset_margin = clamp_margin(margin, DEFAULT_INSET_MARGIN);
        self
    }

    /// Sets the vertical space between consecutive bubbles.
    #[must_use]
    pub fn with_vertical_margin(mut self, margin: f32) -> Self {
        self.vertical_margin = clamp_margin(margin, DEFAULT_VERTICAL_MARGIN);
        self
    }

    /// Sets the minimum space between a bubble and the surface edges.
    #[must_use]
    pub fn with_horizontal_margin(mut self, margin: f32) -> Self {
        self.horizontal_margin = clamp_margin(margin, DEFAULT_HORIZONTAL_MARGIN);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = clamp_margin(radius, DEFAULT_CORNER_RADIUS);
        self
    }

    /// Sets the duration of the push-into-screen animation.
    #[must_use]
    pub fn with_push_duration(mut self, duration: Duration) -> Self {
        self.push_duration = duration.min(Duration::from_millis(MAX_ANIMATION_MS));
        self
    }

    /// Sets the time from appearance to the beginning of the fade-out.
    #[must_use]
    pub fn with_lifetime(mut self, duration: Duration) -> Self {
        self.lifetime = duration.min(Duration::from_millis(MAX_LIFETIME_MS));
        self
    }

    /// Sets the duration of the fade-out animation.
    #[must_use]
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration.min(Duration::from_millis(MAX_ANIMATION_MS));
        self
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the label font, bold by default.
    #[must_use]
    pub fn font(&self) -> Font {
        if self.bold {
            Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }
        } else {
            Font::DEFAULT
        }
    }

    #[must_use]
    pub fn inset_margin(&self) -> f32 {
        self.inset_margin
    }

    #[must_use]
    pub fn vertical_margin(&self) -> f32 {
        self.vertical_margin
    }

    #[must_use]
    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    #[must_use]
    pub fn push_duration(&self) -> Duration {
        self.push_duration
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }
}

fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

fn clamp_margin(value: f32, fallback: f32) -> f32 {
    clamp_finite(value, 0.0, MAX_MARGIN, fallback)
}

/// On-disk representation of a [`BubbleStyle`].
///
/// Colors are stored as `[r, g, b, a]` arrays in the `0.0..=1.0` range and
/// durations in milliseconds.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub background: Option<[f32; 4]>,
    #[serde(default)]
    pub text_color: Option<[f32; 4]>,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub inset_margin: Option<f32>,
    #[serde(default)]
    pub vertical_margin: Option<f32>,
    #[serde(default)]
    pub horizontal_margin: Option<f32>,
    #[serde(default)]
    pub corner_radius: Option<f32>,
    #[serde(default)]
    pub push_duration_ms: Option<u64>,
    #[serde(default)]
    pub lifetime_ms: Option<u64>,
    #[serde(default)]
    pub fade_duration_ms: Option<u64>,
}

impl From<Config> for BubbleStyle {
    fn from(config: Config) -> Self {
        let mut style = BubbleStyle::default();
        if let Some(rgba) = config.background {
            style = style.with_background(color_from_rgba(rgba));
        }
        if let Some(rgba) = config.text_color {
            style = style.with_text_color(color_from_rgba(rgba));
        }
        if let Some(size) = config.font_size {
            style = style.with_font_size(size);
        }
        if let Some(bold) = config.bold {
            style = style.with_bold(bold);
        }
        if let Some(margin) = config.inset_margin {
            style = style.with_inset_margin(margin);
        }
        if let Some(margin) = config.vertical_margin {
            style = style.with_vertical_margin(margin);
        }
        if let Some(margin) = config.horizontal_margin {
            style = style.with_horizontal_margin(margin);
        }
        if let Some(radius) = config.corner_radius {
            style = style.with_corner_radius(radius);
        }
        if let Some(ms) = config.push_duration_ms {
            style = style.with_push_duration(Duration::from_millis(ms));
        }
        if let Some(ms) = config.lifetime_ms {
            style = style.with_lifetime(Duration::from_millis(ms));
        }
        if let Some(ms) = config.fade_duration_ms {
            style = style.with_fade_duration(Duration::from_millis(ms));
        }
        style
    }
}

impl From<&BubbleStyle> for Config {
    fn from(style: &BubbleStyle) -> Self {
        Self {
            background: Some(rgba_from_color(style.background)),
            text_color: Some(rgba_from_color(style.text_color)),
            font_size: Some(style.font_size),
            bold: Some(style.bold),
            inset_margin: Some(style.inset_margin),
            vertical_margin: Some(style.vertical_margin),
            horizontal_margin: Some(style.horizontal_margin),
            corner_radius: Some(style.corner_radius),
            push_duration_ms: Some(millis(style.push_duration)),
            lifetime_ms: Some(millis(style.lifetime)),
            fade_duration_ms: Some(millis(style.fade_duration)),
        }
    }
}

fn color_from_rgba([r, g, b, a]: [f32; 4]) -> Color {
    let channel = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 1.0 };
    Color::from_rgba(channel(r), channel(g), channel(b), channel(a))
}

fn rgba_from_color(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the style from the user configuration directory, or defaults when
/// no file exists.
pub fn load() -> Result<BubbleStyle> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(BubbleStyle::default())
}

/// Saves the style to the user configuration directory.
pub fn save(style: &BubbleStyle) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(style, &path);
    }
    Ok(())
}

/// Loads the style from `path`. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<BubbleStyle> {
    let content = fs::read_to_string(path)?;
    match BubbleStyle::from_toml_str(&content) {
        Ok(style) => Ok(style),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid bubble style, using defaults");
            Ok(BubbleStyle::default())
        }
    }
}

/// Saves the style to `path`, creating parent directories as needed.
pub fn save_to_path(style: &BubbleStyle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = style.to_toml_string()?;
    fs::write(path, content)?;
    Ok(())
}
