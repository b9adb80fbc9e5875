//! Motif design tokens
//!
//! Two layers of tokens:
//!
//! - **Base tokens** ([`base`]): raw palette, typography and spacing values
//! - **Semantic tokens** ([`semantic`]): purpose-named values such as
//!   `text.primary` or `border.focus`, derived from the base tables
//!
//! # Quick Start
//!
//! ```rust
//! use motif_tokens::{SemanticColor, SemanticTokens};
//!
//! let tokens = SemanticTokens::standard();
//! assert_eq!(tokens.colors.get(SemanticColor::BorderFocus), "#6366F1");
//! ```

pub mod base;
pub mod semantic;

pub use base::{BaseColors, BaseSpacing, BaseTypography};
pub use semantic::{compose, SemanticColor, SemanticColors, SemanticTokens, TextStyle};
