//! Base tokens
//!
//! Primitive design values with no usage context:
//! - Colors
//! - Typography (fonts, sizes, weights, line heights)
//! - Spacing (scale, layout widths, component ramps)

pub mod colors;
mod spacing;
mod typography;

pub use colors::{
    BaseColors, BrandColors, GrayScale, OpacityLevels, StatusPalette, ZonePair, ZonePalette,
};
pub use spacing::*;
pub use typography::*;
