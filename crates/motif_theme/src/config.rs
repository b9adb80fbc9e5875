//! Theme documents as TOML
//!
//! Field names follow the document's serialized shape (`mutedForeground`,
//! `"2xl"`), so a theme file looks like:
//!
//! ```toml
//! id = "ocean"
//! name = "Ocean"
//! version = "2.0.0"
//!
//! [styles.colors]
//! primary = "#0EA5E9"
//! mutedForeground = "#64748B"
//! # ...
//!
//! [styles.colors.zones.problem]
//! name = "Problem"
//! color = "#FF6B6B"
//! order = 1
//! ```
//!
//! Loaded documents are validated before they are returned.

use crate::document::ThemeDocument;
use crate::error::{Result, ThemeError};
use crate::patch::StylePatch;

impl ThemeDocument {
    /// Parse and validate a theme document from TOML
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let document: ThemeDocument = toml::from_str(src)?;
        document
            .validate()
            .map_err(|v| ThemeError::InvalidDocument(v.to_string()))?;
        tracing::debug!("loaded theme '{}' from TOML", document.id);
        Ok(document)
    }

    /// Serialize the document as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl StylePatch {
    /// Parse and validate a partial style set from TOML
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let patch: StylePatch = toml::from_str(src)?;
        patch
            .validate()
            .map_err(|v| ThemeError::MalformedDelta(v.to_string()))?;
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;
    use crate::patch::Subsystem;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_document_round_trips() {
        let doc = default_document();
        let src = doc.to_toml_string().unwrap();
        assert!(src.contains("mutedForeground = \"#6B7280\""));
        assert!(src.contains("2xl = \"24px\""));
        assert_eq!(ThemeDocument::from_toml_str(&src).unwrap(), doc);
    }

    #[test]
    fn missing_subsystem_is_a_parse_error() {
        let doc = default_document();
        let mut value = toml::Value::try_from(&doc).unwrap();
        if let Some(styles) = value.get_mut("styles").and_then(|s| s.as_table_mut()) {
            styles.remove("shadows");
        }
        let src = toml::to_string(&value).unwrap();

        let err = ThemeDocument::from_toml_str(&src).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)), "{err}");
    }

    #[test]
    fn invalid_values_are_rejected_after_parsing() {
        let mut doc = default_document();
        doc.styles.spacing.scale = vec![0.0, 8.0, 4.0];
        let src = toml::to_string(&doc).unwrap();

        let err = ThemeDocument::from_toml_str(&src).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidDocument(_)), "{err}");
    }

    #[test]
    fn patch_from_toml() {
        let patch = StylePatch::from_toml_str(
            r#"
[shadows]
none = "none"
sm = "0 1px 1px 0 rgb(0 0 0 / 0.1)"
md = "0 2px 4px 0 rgb(0 0 0 / 0.1)"
lg = "0 8px 16px 0 rgb(0 0 0 / 0.1)"
"#,
        )
        .unwrap();
        assert_eq!(patch.subsystems(), vec![Subsystem::Shadows]);
    }

    #[test]
    fn integer_spacing_values_are_accepted() {
        let src = default_document()
            .to_toml_string()
            .unwrap()
            .replace("unit = 4.0", "unit = 4");
        let doc = ThemeDocument::from_toml_str(&src).unwrap();
        assert_eq!(doc.styles.spacing.unit, 4.0);
    }

    #[test]
    fn fractional_spacing_is_written_exactly() {
        let mut doc = default_document();
        doc.styles.spacing.unit = 0.1;
        doc.styles.spacing.scale = vec![0.0, 0.25, 1.5];

        let src = doc.to_toml_string().unwrap();
        assert!(src.contains("unit = 0.1\n"), "{src}");
        assert!(src.contains("0.25"), "{src}");
        assert_eq!(ThemeDocument::from_toml_str(&src).unwrap(), doc);
    }
}
