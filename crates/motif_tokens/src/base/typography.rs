//! Base typography tokens
//!
//! Font families, the size scale, weights, line heights, letter spacing and
//! text transforms.

use serde::Serialize;

pub const FONT_PRIMARY: &str = "Inter";
pub const FONT_SECONDARY: &str = "Merriweather";
pub const FONT_MONO: &str = "JetBrains Mono";
pub const FONT_SYSTEM: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontFamilies {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub mono: &'static str,
    pub system: &'static str,
}

/// Fixed font size scale, xs through 6xl
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
    #[serde(rename = "3xl")]
    pub xl3: &'static str,
    #[serde(rename = "4xl")]
    pub xl4: &'static str,
    #[serde(rename = "5xl")]
    pub xl5: &'static str,
    #[serde(rename = "6xl")]
    pub xl6: &'static str,
}

/// Viewport-relative sizes expressed as CSS `clamp()` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FluidSizes {
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub scale: SizeScale,
    pub fluid: FluidSizes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub thin: u16,
    pub extralight: u16,
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
    pub black: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineHeights {
    pub none: f32,
    pub tight: f32,
    pub snug: f32,
    pub normal: f32,
    pub relaxed: f32,
    pub loose: f32,
    pub heading: f32,
    pub body: f32,
    pub code: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LetterSpacing {
    pub tighter: &'static str,
    pub tight: &'static str,
    pub normal: &'static str,
    pub wide: &'static str,
    pub wider: &'static str,
    pub widest: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextTransforms {
    pub normal: &'static str,
    pub uppercase: &'static str,
    pub lowercase: &'static str,
    pub capitalize: &'static str,
}

/// The complete base typography table
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTypography {
    pub fonts: FontFamilies,
    pub sizes: FontSizes,
    pub weights: FontWeights,
    pub line_heights: LineHeights,
    pub letter_spacing: LetterSpacing,
    pub transforms: TextTransforms,
}

impl BaseTypography {
    pub const STANDARD: BaseTypography = BaseTypography {
        fonts: FontFamilies {
            primary: FONT_PRIMARY,
            secondary: FONT_SECONDARY,
            mono: FONT_MONO,
            system: FONT_SYSTEM,
        },
        sizes: FontSizes {
            scale: SizeScale {
                xs: "12px",
                sm: "14px",
                base: "16px",
                lg: "18px",
                xl: "20px",
                xl2: "24px",
                xl3: "30px",
                xl4: "36px",
                xl5: "48px",
                xl6: "60px",
            },
            fluid: FluidSizes {
                sm: "clamp(14px, 1.5vw, 16px)",
                base: "clamp(16px, 2vw, 18px)",
                lg: "clamp(18px, 2.5vw, 20px)",
                xl: "clamp(20px, 3vw, 24px)",
            },
        },
        weights: FontWeights {
            thin: 100,
            extralight: 200,
            light: 300,
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
            extrabold: 800,
            black: 900,
        },
        line_heights: LineHeights {
            none: 1.0,
            tight: 1.25,
            snug: 1.375,
            normal: 1.5,
            relaxed: 1.625,
            loose: 2.0,
            heading: 1.2,
            body: 1.5,
            code: 1.7,
        },
        letter_spacing: LetterSpacing {
            tighter: "-0.05em",
            tight: "-0.025em",
            normal: "0",
            wide: "0.025em",
            wider: "0.05em",
            widest: "0.1em",
        },
        transforms: TextTransforms {
            normal: "none",
            uppercase: "uppercase",
            lowercase: "lowercase",
            capitalize: "capitalize",
        },
    };
}

impl Default for BaseTypography {
    fn default() -> Self {
        Self::STANDARD
    }
}
