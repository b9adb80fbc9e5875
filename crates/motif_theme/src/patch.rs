//! Style patches
//!
//! A [`StylePatch`] names which style subsystems an update carries. Applying
//! a patch replaces each present subsystem as a whole; there is no per-field
//! merge inside a subsystem. Callers that want to change one field copy the
//! current subsystem, edit it and put it in the patch (or use
//! [`crate::ThemeStore::update_with`]).

use crate::document::*;
use serde::{Deserialize, Serialize};

/// Identifies one of the five style subsystems
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Subsystem {
    Colors,
    Typography,
    Spacing,
    Radii,
    Shadows,
}

impl Subsystem {
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Colors,
        Subsystem::Typography,
        Subsystem::Spacing,
        Subsystem::Radii,
        Subsystem::Shadows,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Radii => "radii",
            Self::Shadows => "shadows",
        }
    }
}

/// Partial style set: each present subsystem replaces the current one
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<RadiusStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowStyles>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that replaces every subsystem
    pub fn full(styles: StyleSet) -> Self {
        Self {
            colors: Some(styles.colors),
            typography: Some(styles.typography),
            spacing: Some(styles.spacing),
            radii: Some(styles.radii),
            shadows: Some(styles.shadows),
        }
    }

    pub fn colors(mut self, colors: ColorStyles) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn typography(mut self, typography: TypographyStyles) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn spacing(mut self, spacing: SpacingStyles) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn radii(mut self, radii: RadiusStyles) -> Self {
        self.radii = Some(radii);
        self
    }

    pub fn shadows(mut self, shadows: ShadowStyles) -> Self {
        self.shadows = Some(shadows);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.subsystems().is_empty()
    }

    /// Subsystems carried by this patch, in canonical order
    pub fn subsystems(&self) -> Vec<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .filter(|subsystem| match subsystem {
                Subsystem::Colors => self.colors.is_some(),
                Subsystem::Typography => self.typography.is_some(),
                Subsystem::Spacing => self.spacing.is_some(),
                Subsystem::Radii => self.radii.is_some(),
                Subsystem::Shadows => self.shadows.is_some(),
            })
            .collect()
    }

    /// Validate the present subsystems that carry structural invariants
    pub fn validate(&self) -> Result<(), Violation> {
        match &self.spacing {
            Some(spacing) => spacing.validate(),
            None => Ok(()),
        }
    }

    /// Patch holding only the subsystems that differ between `before` and
    /// `after`, taken from `after`
    pub fn changes(before: &StyleSet, after: StyleSet) -> Self {
        Self {
            colors: (after.colors != before.colors).then_some(after.colors),
            typography: (after.typography != before.typography).then_some(after.typography),
            spacing: (after.spacing != before.spacing).then_some(after.spacing),
            radii: (after.radii != before.radii).then_some(after.radii),
            shadows: (after.shadows != before.shadows).then_some(after.shadows),
        }
    }

    /// Replace each present subsystem of `styles`
    pub fn apply_to(self, styles: &mut StyleSet) {
        if let Some(colors) = self.colors {
            styles.colors = colors;
        }
        if let Some(typography) = self.typography {
            styles.typography = typography;
        }
        if let Some(spacing) = self.spacing {
            styles.spacing = spacing;
        }
        if let Some(radii) = self.radii {
            styles.radii = radii;
        }
        if let Some(shadows) = self.shadows {
            styles.shadows = shadows;
        }
    }
}

impl From<StyleSet> for StylePatch {
    fn from(styles: StyleSet) -> Self {
        Self::full(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_styles;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_subsystems_are_untouched() {
        let mut styles = default_styles();
        let before = styles.clone();

        let mut radii = before.radii.clone();
        radii.md = "12px".into();
        StylePatch::new().radii(radii.clone()).apply_to(&mut styles);

        assert_eq!(styles.radii, radii);
        assert_eq!(styles.colors, before.colors);
        assert_eq!(styles.typography, before.typography);
        assert_eq!(styles.spacing, before.spacing);
        assert_eq!(styles.shadows, before.shadows);
    }

    #[test]
    fn subsystems_listed_in_canonical_order() {
        let styles = default_styles();
        let patch = StylePatch::new()
            .shadows(styles.shadows)
            .colors(styles.colors);
        assert_eq!(
            patch.subsystems(),
            vec![Subsystem::Colors, Subsystem::Shadows]
        );
        assert!(StylePatch::new().is_empty());
        assert_eq!(StylePatch::full(default_styles()).subsystems().len(), 5);
    }

    #[test]
    fn validation_only_covers_present_subsystems() {
        let mut spacing = default_styles().spacing;
        spacing.scale = vec![8.0, 4.0];
        let patch = StylePatch::new().spacing(spacing);
        assert_eq!(patch.validate().unwrap_err().path, "spacing.scale[1]");
        assert!(StylePatch::new().validate().is_ok());
    }

    #[test]
    fn changes_carry_only_edited_subsystems() {
        let before = default_styles();
        let mut after = before.clone();
        after.colors.primary = "#FF0000".into();
        after.shadows.sm = "none".into();

        let patch = StylePatch::changes(&before, after.clone());
        assert_eq!(
            patch.subsystems(),
            vec![Subsystem::Colors, Subsystem::Shadows]
        );
        assert_eq!(patch.colors, Some(after.colors));
        assert!(StylePatch::changes(&before, before.clone()).is_empty());
    }

    #[test]
    fn deserializes_partial_delta() {
        let json = serde_json::json!({
            "radii": { "none": "0", "sm": "2px", "md": "4px", "lg": "6px", "full": "50%" }
        });
        let patch: StylePatch = serde_json::from_value(json).unwrap();
        assert_eq!(patch.subsystems(), vec![Subsystem::Radii]);
        assert_eq!(patch.radii.unwrap().full, "50%");
    }
}
