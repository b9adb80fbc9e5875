//! Live theme updates
//!
//! Creates a scope, subscribes a listener that stands in for a re-rendering
//! component, then applies a partial update and a full replacement.
//!
//! Run with `RUST_LOG=motif_theme=debug cargo run --example live_update`.

use motif_theme::motif_tokens::{SemanticColor, SemanticTokens};
use motif_theme::{create_theme_scope, default_document, use_theme, StylePatch, ThemeError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ThemeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let scope = create_theme_scope(None)?;
    scope.store().subscribe(|theme| {
        tracing::info!(
            "render: theme '{}' primary={} (text on primary: {})",
            theme.id,
            theme.styles.colors.primary,
            theme.contrast_text("colors.primary").unwrap_or("n/a"),
        );
    });

    scope.provide(|| -> Result<(), ThemeError> {
        let ctx = use_theme()?;

        // Swap in the semantic focus color as the primary color
        let mut colors = ctx.theme.styles.colors.clone();
        colors.primary = SemanticTokens::standard()
            .colors
            .get(SemanticColor::BorderFocus)
            .to_string();
        ctx.update_theme(StylePatch::new().colors(colors))?;

        let mut midnight = default_document()
            .with_description("Dark surfaces with light text");
        midnight.id = "midnight".into();
        midnight.name = "Midnight".into();
        midnight.styles.colors.background = "#111827".into();
        midnight.styles.colors.foreground = "#F9FAFB".into();
        ctx.set_theme(midnight)?;

        let theme = use_theme()?.theme;
        tracing::info!(
            "final theme '{}' background={} (text: {})",
            theme.id,
            theme.styles.colors.background,
            theme.contrast_text("colors.background").unwrap_or("n/a"),
        );
        Ok(())
    })
}
