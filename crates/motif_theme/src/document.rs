//! Theme document model
//!
//! A [`ThemeDocument`] is an identified, versioned bundle holding exactly one
//! [`StyleSet`]. The style set has five fixed subsystems; only
//! `colors.zones` is optional. Color, length, font and weight values are
//! carried through untouched: presence is guaranteed by the types, and
//! validation only checks the spacing structure.

use crate::patch::StylePatch;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single structural problem found while validating a theme
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `spacing.scale[3]`
    pub path: String,
    pub reason: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A complete named theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub styles: StyleSet,
    /// Partial styles reserved for layered theming. Carried with the
    /// document but not applied by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<StylePatch>,
}

impl ThemeDocument {
    pub fn new(id: impl Into<String>, name: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            version: None,
            styles,
            overrides: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_overrides(mut self, overrides: StylePatch) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Check the structural invariants of the styles and overrides
    pub fn validate(&self) -> Result<(), Violation> {
        self.styles.validate()?;
        if let Some(overrides) = &self.overrides {
            overrides
                .validate()
                .map_err(|v| Violation::new(format!("overrides.{}", v.path), v.reason))?;
        }
        Ok(())
    }
}

/// The five style subsystems of a theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleSet {
    pub colors: ColorStyles,
    pub typography: TypographyStyles,
    pub spacing: SpacingStyles,
    pub radii: RadiusStyles,
    pub shadows: ShadowStyles,
}

impl StyleSet {
    pub fn validate(&self) -> Result<(), Violation> {
        self.spacing.validate()
    }
}

// ========== Colors ==========

/// Named display zone with its accent color
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display ordering hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Zone {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: None,
            description: None,
            order: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStyles {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<IndexMap<String, Zone>>,
    pub status: StatusColors,
}

impl ColorStyles {
    /// Every required color as `(path, value)`, zones excluded
    pub fn entries(&self) -> [(&'static str, &str); 13] {
        [
            ("colors.primary", self.primary.as_str()),
            ("colors.secondary", self.secondary.as_str()),
            ("colors.accent", self.accent.as_str()),
            ("colors.background", self.background.as_str()),
            ("colors.foreground", self.foreground.as_str()),
            ("colors.muted", self.muted.as_str()),
            ("colors.mutedForeground", self.muted_foreground.as_str()),
            ("colors.border", self.border.as_str()),
            ("colors.input", self.input.as_str()),
            ("colors.status.success", self.status.success.as_str()),
            ("colors.status.warning", self.status.warning.as_str()),
            ("colors.status.error", self.status.error.as_str()),
            ("colors.status.info", self.status.info.as_str()),
        ]
    }

    /// Zones sorted for display: by `order` when present, unordered zones
    /// last, ties kept in map order.
    pub fn zones_in_order(&self) -> Vec<(&str, &Zone)> {
        let mut zones: Vec<(&str, &Zone)> = self
            .zones
            .iter()
            .flatten()
            .map(|(key, zone)| (key.as_str(), zone))
            .collect();
        zones.sort_by_key(|(_, zone)| (zone.order.is_none(), zone.order));
        zones
    }
}

// ========== Typography ==========

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyFonts {
    pub primary: String,
    pub secondary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyWeights {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyStyles {
    pub fonts: TypographyFonts,
    pub sizes: TypographySizes,
    pub weights: TypographyWeights,
}

// ========== Spacing ==========

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingStyles {
    /// Base unit in pixels
    pub unit: f64,
    /// Ascending multiples, conventionally starting at 0
    pub scale: Vec<f64>,
}

impl SpacingStyles {
    /// Scale value at `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scale.get(index).copied()
    }

    pub fn validate(&self) -> Result<(), Violation> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(Violation::new(
                "spacing.unit",
                format!("unit {} must be a positive number", self.unit),
            ));
        }
        for (i, value) in self.scale.iter().enumerate() {
            if !value.is_finite() {
                return Err(Violation::new(
                    format!("spacing.scale[{i}]"),
                    format!("{value} is not a finite number"),
                ));
            }
        }
        if let Some(i) = self.scale.windows(2).position(|w| w[1] < w[0]) {
            return Err(Violation::new(
                format!("spacing.scale[{}]", i + 1),
                format!(
                    "scale must be non-decreasing ({} follows {})",
                    self.scale[i + 1],
                    self.scale[i]
                ),
            ));
        }
        if let Some(first) = self.scale.first().filter(|first| **first != 0.0) {
            tracing::warn!("spacing.scale starts at {} instead of 0", first);
        }
        Ok(())
    }
}

// ========== Radii / Shadows ==========

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusStyles {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowStyles {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}
