//! Semantic tokens
//!
//! Purpose-named tokens derived from the base tables. [`compose`] is a pure
//! regrouping: it looks values up in the base tables and never validates them.

use crate::base::{
    BaseColors, BaseSpacing, BaseTypography, ComponentSpacing, FluidSizes, LayoutWidths,
    ScaleStep, StatusPalette, ZonePalette,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticColor {
    // Backgrounds
    BackgroundDefault,
    BackgroundMuted,
    BackgroundSubtle,
    BackgroundInverse,

    // Text
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,

    // Borders
    BorderDefault,
    BorderMuted,
    BorderFocus,

    // Actions
    ActionPrimary,
    ActionSecondary,
    ActionAccent,

    // Status
    StatusSuccess,
    StatusWarning,
    StatusError,
    StatusInfo,

    // Zones
    ZoneProblemPrimary,
    ZoneProblemSecondary,
    ZoneProjectPrimary,
    ZoneProjectSecondary,
    ZoneLaunchPrimary,
    ZoneLaunchSecondary,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 24] = [
        SemanticColor::BackgroundDefault,
        SemanticColor::BackgroundMuted,
        SemanticColor::BackgroundSubtle,
        SemanticColor::BackgroundInverse,
        SemanticColor::TextPrimary,
        SemanticColor::TextSecondary,
        SemanticColor::TextMuted,
        SemanticColor::TextInverse,
        SemanticColor::BorderDefault,
        SemanticColor::BorderMuted,
        SemanticColor::BorderFocus,
        SemanticColor::ActionPrimary,
        SemanticColor::ActionSecondary,
        SemanticColor::ActionAccent,
        SemanticColor::StatusSuccess,
        SemanticColor::StatusWarning,
        SemanticColor::StatusError,
        SemanticColor::StatusInfo,
        SemanticColor::ZoneProblemPrimary,
        SemanticColor::ZoneProblemSecondary,
        SemanticColor::ZoneProjectPrimary,
        SemanticColor::ZoneProjectSecondary,
        SemanticColor::ZoneLaunchPrimary,
        SemanticColor::ZoneLaunchSecondary,
    ];

    /// Dotted path of the token, e.g. `"text.primary"`
    pub fn path(self) -> &'static str {
        match self {
            Self::BackgroundDefault => "background.default",
            Self::BackgroundMuted => "background.muted",
            Self::BackgroundSubtle => "background.subtle",
            Self::BackgroundInverse => "background.inverse",
            Self::TextPrimary => "text.primary",
            Self::TextSecondary => "text.secondary",
            Self::TextMuted => "text.muted",
            Self::TextInverse => "text.inverse",
            Self::BorderDefault => "border.default",
            Self::BorderMuted => "border.muted",
            Self::BorderFocus => "border.focus",
            Self::ActionPrimary => "action.primary",
            Self::ActionSecondary => "action.secondary",
            Self::ActionAccent => "action.accent",
            Self::StatusSuccess => "status.success",
            Self::StatusWarning => "status.warning",
            Self::StatusError => "status.error",
            Self::StatusInfo => "status.info",
            Self::ZoneProblemPrimary => "zones.problem.primary",
            Self::ZoneProblemSecondary => "zones.problem.secondary",
            Self::ZoneProjectPrimary => "zones.project.primary",
            Self::ZoneProjectSecondary => "zones.project.secondary",
            Self::ZoneLaunchPrimary => "zones.launch.primary",
            Self::ZoneLaunchSecondary => "zones.launch.secondary",
        }
    }

    /// Inverse of [`SemanticColor::path`]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.path() == path)
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub default: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub inverse: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub inverse: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    pub default: &'static str,
    pub muted: &'static str,
    pub focus: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Complete set of semantic color tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub action: ActionColors,
    pub status: StatusPalette,
    pub zones: ZonePalette,
}

impl SemanticColors {
    /// Get a color by token key
    pub fn get(&self, token: SemanticColor) -> &'static str {
        match token {
            SemanticColor::BackgroundDefault => self.background.default,
            SemanticColor::BackgroundMuted => self.background.muted,
            SemanticColor::BackgroundSubtle => self.background.subtle,
            SemanticColor::BackgroundInverse => self.background.inverse,
            SemanticColor::TextPrimary => self.text.primary,
            SemanticColor::TextSecondary => self.text.secondary,
            SemanticColor::TextMuted => self.text.muted,
            SemanticColor::TextInverse => self.text.inverse,
            SemanticColor::BorderDefault => self.border.default,
            SemanticColor::BorderMuted => self.border.muted,
            SemanticColor::BorderFocus => self.border.focus,
            SemanticColor::ActionPrimary => self.action.primary,
            SemanticColor::ActionSecondary => self.action.secondary,
            SemanticColor::ActionAccent => self.action.accent,
            SemanticColor::StatusSuccess => self.status.success,
            SemanticColor::StatusWarning => self.status.warning,
            SemanticColor::StatusError => self.status.error,
            SemanticColor::StatusInfo => self.status.info,
            SemanticColor::ZoneProblemPrimary => self.zones.problem.primary,
            SemanticColor::ZoneProblemSecondary => self.zones.problem.secondary,
            SemanticColor::ZoneProjectPrimary => self.zones.project.primary,
            SemanticColor::ZoneProjectSecondary => self.zones.project.secondary,
            SemanticColor::ZoneLaunchPrimary => self.zones.launch.primary,
            SemanticColor::ZoneLaunchSecondary => self.zones.launch.secondary,
        }
    }
}

/// A resolved text style: family, size, weight and line height
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font: &'static str,
    pub size: &'static str,
    pub weight: u16,
    pub line_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Headings {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyStyles {
    pub default: TextStyle,
    pub large: TextStyle,
    pub small: TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CodeStyles {
    pub default: TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SemanticTypography {
    pub headings: Headings,
    pub body: BodyStyles,
    pub code: CodeStyles,
    pub fluid: FluidSizes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticSpacing {
    pub layout: LayoutWidths,
    pub component: ComponentSpacing,
    pub scale: &'static [ScaleStep],
}

/// The full semantic token set
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SemanticTokens {
    pub colors: SemanticColors,
    pub typography: SemanticTypography,
    pub spacing: SemanticSpacing,
}

static STANDARD_TOKENS: OnceLock<SemanticTokens> = OnceLock::new();

impl SemanticTokens {
    /// Semantic tokens composed from the standard base tables.
    ///
    /// Composed on first access; base tables never change afterwards.
    pub fn standard() -> &'static SemanticTokens {
        STANDARD_TOKENS.get_or_init(|| {
            compose(
                &BaseColors::STANDARD,
                &BaseTypography::STANDARD,
                &BaseSpacing::STANDARD,
            )
        })
    }

    /// Generate a CSS variable map from all semantic color tokens.
    ///
    /// Keys are variable names without the `--` prefix, with the dotted
    /// path flattened (`text.primary` becomes `text-primary`).
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        SemanticColor::ALL
            .iter()
            .map(|&token| {
                (
                    token.path().replace('.', "-"),
                    self.colors.get(token).to_string(),
                )
            })
            .collect()
    }
}

/// Derive semantic tokens from the three base tables.
pub fn compose(
    colors: &BaseColors,
    typography: &BaseTypography,
    spacing: &BaseSpacing,
) -> SemanticTokens {
    SemanticTokens {
        colors: compose_colors(colors),
        typography: compose_typography(typography),
        spacing: SemanticSpacing {
            layout: spacing.layout,
            component: spacing.component,
            scale: spacing.scale,
        },
    }
}

fn compose_colors(base: &BaseColors) -> SemanticColors {
    SemanticColors {
        background: BackgroundColors {
            default: base.white,
            muted: base.gray.gray_50,
            subtle: base.gray.gray_100,
            inverse: base.black,
        },
        text: TextColors {
            primary: base.gray.gray_900,
            secondary: base.gray.gray_600,
            muted: base.gray.gray_500,
            inverse: base.white,
        },
        border: BorderColors {
            default: base.gray.gray_200,
            muted: base.gray.gray_100,
            focus: base.brand.accent,
        },
        action: ActionColors {
            primary: base.brand.primary,
            secondary: base.brand.secondary,
            accent: base.brand.accent,
        },
        status: base.status,
        zones: base.zones,
    }
}

fn compose_typography(base: &BaseTypography) -> SemanticTypography {
    let scale = &base.sizes.scale;
    let weights = &base.weights;
    let heading = |size, weight| TextStyle {
        font: base.fonts.primary,
        size,
        weight,
        line_height: base.line_heights.heading,
    };
    let body = |size| TextStyle {
        font: base.fonts.primary,
        size,
        weight: weights.normal,
        line_height: base.line_heights.body,
    };

    SemanticTypography {
        headings: Headings {
            h1: heading(scale.xl3, weights.bold),
            h2: heading(scale.xl2, weights.bold),
            h3: heading(scale.xl, weights.semibold),
            h4: heading(scale.lg, weights.semibold),
        },
        body: BodyStyles {
            default: body(scale.base),
            large: body(scale.lg),
            small: body(scale.sm),
        },
        code: CodeStyles {
            default: TextStyle {
                font: base.fonts.mono,
                size: scale.sm,
                weight: weights.normal,
                line_height: base.line_heights.code,
            },
        },
        fluid: base.sizes.fluid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_round_trip() {
        for token in SemanticColor::ALL {
            assert_eq!(SemanticColor::from_path(token.path()), Some(token));
        }
        assert_eq!(SemanticColor::from_path("text.loud"), None);
    }

    #[test]
    fn colors_reference_base_palette() {
        let base = BaseColors::STANDARD;
        let tokens = compose(&base, &BaseTypography::STANDARD, &BaseSpacing::STANDARD);

        assert_eq!(tokens.colors.get(SemanticColor::TextPrimary), base.gray.gray_900);
        assert_eq!(tokens.colors.get(SemanticColor::BorderFocus), base.brand.accent);
        assert_eq!(tokens.colors.get(SemanticColor::BackgroundInverse), base.black);
        assert_eq!(tokens.colors.status, base.status);
    }

    #[test]
    fn headings_step_down_the_scale() {
        let typography = &SemanticTokens::standard().typography;
        assert_eq!(typography.headings.h1.size, "30px");
        assert_eq!(typography.headings.h1.weight, 700);
        assert_eq!(typography.headings.h4.size, "18px");
        assert_eq!(typography.headings.h4.weight, 600);
        assert_eq!(typography.code.default.font, "JetBrains Mono");
        assert_eq!(typography.code.default.line_height, 1.7);
    }

    #[test]
    fn css_variables_cover_every_token() {
        let vars = SemanticTokens::standard().to_css_variable_map();
        assert_eq!(vars.len(), SemanticColor::ALL.len());
        assert_eq!(vars["text-primary"], "#111827");
        assert_eq!(vars["zones-launch-secondary"], "#0081CF");
    }
}
