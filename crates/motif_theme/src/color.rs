//! Color utilities
//!
//! Hex parsing and a simple luminance heuristic for picking readable text.
//! Accepted forms are `RGB`, `RRGGBB` and `RRGGBBAA`, each with an optional
//! leading `#`. Alpha is parsed but ignored for luminance. Anything else is
//! rejected with [`ThemeError::InvalidColor`].

use crate::error::{Result, ThemeError};
use std::fmt;
use std::str::FromStr;

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#FFFFFF";

/// An 8-bit RGB color parsed from a hex string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ThemeError::InvalidColor(input.to_string());
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let digit = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 | 8 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Perceived brightness in `0.0..=1.0`:
    /// `(0.299 R + 0.587 G + 0.114 B) / 255`
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Black text on light colors, white text on dark ones
    pub fn contrasting_text(&self) -> &'static str {
        if self.luminance() > 0.5 {
            BLACK_TEXT
        } else {
            WHITE_TEXT
        }
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Luminance of a hex color
pub fn luminance(hex: &str) -> Result<f32> {
    Rgb::parse(hex).map(|rgb| rgb.luminance())
}

/// Text color (`#000000` or `#FFFFFF`) that reads well on `background`
pub fn contrasting_text_color(background: &str) -> Result<&'static str> {
    Rgb::parse(background).map(|rgb| rgb.contrasting_text())
}

/// Adjustments accepted by [`adjust_color`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdjustOptions {
    pub alpha: Option<f32>,
    pub lighten: Option<f32>,
    pub darken: Option<f32>,
}

/// Returns `color` unchanged.
///
/// The options are accepted so call sites can already express the intended
/// adjustment; no color-space math is applied.
pub fn adjust_color(color: &str, _options: AdjustOptions) -> String {
    color.to_string()
}
