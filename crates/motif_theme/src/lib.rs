//! Motif Theme System
//!
//! Theme documents, scoped theme stores and value processing for component
//! libraries built on [`motif_tokens`].
//!
//! # Overview
//!
//! The theme system provides:
//! - **Theme documents**: an identified, versioned [`StyleSet`] of colors,
//!   typography, spacing, radii and shadows
//! - **Stores**: one live document per [`ThemeStore`], partial updates via
//!   [`StylePatch`], full replacement, synchronous change notification
//! - **Scopes**: [`create_theme_scope`] / [`use_theme`] for consumers that
//!   should not carry the store around
//! - **Processing**: the [`ProcessedTheme`] view with computed contrast colors
//!
//! # Quick Start
//!
//! ```rust
//! use motif_theme::{create_theme_scope, use_theme, StylePatch};
//!
//! let scope = create_theme_scope(None).unwrap();
//! let _guard = scope.enter();
//!
//! let ctx = use_theme().unwrap();
//! let mut colors = ctx.theme.styles.colors.clone();
//! colors.primary = "#FF0000".into();
//! ctx.update_theme(StylePatch::new().colors(colors)).unwrap();
//!
//! assert_eq!(use_theme().unwrap().theme.styles.colors.primary, "#FF0000");
//! ```
//!
//! # Update Granularity
//!
//! [`ThemeStore::update`] replaces whole subsystems: a patch carrying
//! `colors` replaces every color. Single fields are changed with
//! [`ThemeStore::update_with`], which edits a copy of the current styles.

pub mod color;
pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod patch;
pub mod processor;
pub mod scope;
pub mod store;

// Re-export commonly used types
pub use color::{adjust_color, contrasting_text_color, luminance, AdjustOptions, Rgb};
pub use defaults::{default_document, default_styles};
pub use document::{
    ColorStyles, RadiusStyles, ShadowStyles, SpacingStyles, StatusColors, StyleSet,
    ThemeDocument, TypographyFonts, TypographySizes, TypographyStyles, TypographyWeights,
    Violation, Zone,
};
pub use error::{Result, ThemeError};
pub use patch::{StylePatch, Subsystem};
pub use processor::{process, ProcessedTheme};
pub use scope::{
    create_theme_scope, current_store, expect_theme, use_theme, ScopeGuard, ThemeContext,
    ThemeScope,
};
pub use store::{SubscriptionId, ThemeListener, ThemeStore};

pub use motif_tokens;
