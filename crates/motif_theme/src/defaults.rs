//! Built-in default theme
//!
//! Values are part of the public contract: consumers compare against these
//! literals, so they must not drift. Entries that coincide with a base token
//! reference the token; the rest are literals.

use crate::document::*;
use motif_tokens::base::colors::{self, brand, gray, status};
use motif_tokens::base::{FONT_PRIMARY, FONT_SECONDARY};

pub const DEFAULT_THEME_ID: &str = "default";
pub const DEFAULT_THEME_NAME: &str = "Default Theme";
pub const DEFAULT_THEME_VERSION: &str = "1.0.0";

/// Spacing scale of the default theme, in pixels
pub const DEFAULT_SPACING_SCALE: [f64; 13] = [
    0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0, 80.0, 96.0,
];

/// The document a scope starts with when none is supplied
pub fn default_document() -> ThemeDocument {
    ThemeDocument::new(DEFAULT_THEME_ID, DEFAULT_THEME_NAME, default_styles())
        .with_version(DEFAULT_THEME_VERSION)
}

pub fn default_styles() -> StyleSet {
    StyleSet {
        colors: default_colors(),
        typography: default_typography(),
        spacing: SpacingStyles {
            unit: 4.0,
            scale: DEFAULT_SPACING_SCALE.to_vec(),
        },
        radii: RadiusStyles {
            none: "0".into(),
            sm: "4px".into(),
            md: "6px".into(),
            lg: "8px".into(),
            full: "9999px".into(),
        },
        shadows: ShadowStyles {
            none: "none".into(),
            sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".into(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1)".into(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1)".into(),
        },
    }
}

fn default_colors() -> ColorStyles {
    ColorStyles {
        primary: brand::PRIMARY.into(),
        secondary: "#666666".into(),
        accent: brand::ACCENT.into(),
        background: colors::WHITE.into(),
        foreground: colors::BLACK.into(),
        muted: gray::GRAY_100.into(),
        muted_foreground: gray::GRAY_500.into(),
        border: gray::GRAY_200.into(),
        input: colors::WHITE.into(),
        zones: None,
        status: StatusColors {
            success: status::SUCCESS.into(),
            warning: status::WARNING.into(),
            error: status::ERROR.into(),
            info: status::INFO.into(),
        },
    }
}

fn default_typography() -> TypographyStyles {
    TypographyStyles {
        fonts: TypographyFonts {
            primary: FONT_PRIMARY.into(),
            secondary: FONT_SECONDARY.into(),
        },
        sizes: TypographySizes {
            xs: "12px".into(),
            sm: "14px".into(),
            base: "16px".into(),
            lg: "18px".into(),
            xl: "20px".into(),
            xl2: "24px".into(),
            xl3: "30px".into(),
        },
        weights: TypographyWeights {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identity_literals() {
        let doc = default_document();
        assert_eq!(doc.id, "default");
        assert_eq!(doc.name, "Default Theme");
        assert_eq!(doc.version.as_deref(), Some("1.0.0"));
        assert_eq!(doc.description, None);
        assert_eq!(doc.overrides, None);
    }

    #[test]
    fn color_literals() {
        let colors = default_document().styles.colors;
        assert_eq!(
            colors.entries().map(|(_, v)| v.to_string()),
            [
                "#000000", "#666666", "#6366F1", "#FFFFFF", "#000000", "#F3F4F6", "#6B7280",
                "#E5E7EB", "#FFFFFF", "#10B981", "#F59E0B", "#EF4444", "#3B82F6",
            ]
            .map(String::from)
        );
        assert!(colors.zones.is_none());
    }

    #[test]
    fn layout_literals() {
        let styles = default_styles();
        assert_eq!(styles.spacing.unit, 4.0);
        assert_eq!(
            styles.spacing.scale,
            vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0, 80.0, 96.0]
        );
        assert_eq!(styles.radii.md, "6px");
        assert_eq!(styles.radii.full, "9999px");
        assert_eq!(styles.typography.sizes.xl3, "30px");
        assert_eq!(styles.typography.weights.semibold, 600);
        assert_eq!(styles.shadows.sm, "0 1px 2px 0 rgb(0 0 0 / 0.05)");
    }
}
