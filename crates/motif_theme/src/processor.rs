//! Theme value processing
//!
//! [`process`] turns the stored document into the view consumers read. The
//! document is cloned unchanged; computed values live beside it so the
//! canonical shape never changes.

use crate::color::Rgb;
use crate::document::ThemeDocument;
use rustc_hash::FxHashMap;
use std::ops::Deref;

/// The consumer-facing view of a theme document
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedTheme {
    document: ThemeDocument,
    /// Contrasting text color per hex color path
    contrast: FxHashMap<String, &'static str>,
}

impl ProcessedTheme {
    /// The stored document, structurally unchanged
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// Contrasting text color for a color path such as `colors.primary`,
    /// `colors.status.error` or `colors.zones.problem`.
    ///
    /// `None` when the path is unknown or its value is not a hex color.
    pub fn contrast_text(&self, path: &str) -> Option<&'static str> {
        self.contrast.get(path).copied()
    }

    /// All computed contrast colors
    pub fn contrast_map(&self) -> &FxHashMap<String, &'static str> {
        &self.contrast
    }

    pub fn into_document(self) -> ThemeDocument {
        self.document
    }
}

impl Deref for ProcessedTheme {
    type Target = ThemeDocument;

    fn deref(&self) -> &ThemeDocument {
        &self.document
    }
}

/// Derive the exposed view of `doc`.
///
/// Non-hex colors (named colors, `rgb()`, `var()`) pass through without a
/// contrast entry.
pub fn process(doc: &ThemeDocument) -> ProcessedTheme {
    let colors = &doc.styles.colors;
    let mut contrast = FxHashMap::default();

    let zones = colors
        .zones
        .iter()
        .flatten()
        .map(|(key, zone)| (format!("colors.zones.{key}"), zone.color.as_str()));
    let entries = colors
        .entries()
        .into_iter()
        .map(|(path, value)| (path.to_string(), value))
        .chain(zones);

    for (path, value) in entries {
        match Rgb::parse(value) {
            Ok(rgb) => {
                contrast.insert(path, rgb.contrasting_text());
            }
            Err(_) => tracing::trace!("no contrast for {path}: {value:?} is not a hex color"),
        }
    }

    ProcessedTheme {
        document: doc.clone(),
        contrast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;
    use crate::document::Zone;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_is_preserved() {
        let doc = default_document();
        let processed = process(&doc);
        assert_eq!(processed.document(), &doc);
        assert_eq!(processed.styles.colors.primary, "#000000");
    }

    #[test]
    fn contrast_for_default_colors() {
        let processed = process(&default_document());
        assert_eq!(processed.contrast_text("colors.primary"), Some("#FFFFFF"));
        assert_eq!(processed.contrast_text("colors.background"), Some("#000000"));
        assert_eq!(processed.contrast_text("colors.status.error"), Some("#FFFFFF"));
        assert_eq!(processed.contrast_map().len(), 13);
    }

    #[test]
    fn zones_and_non_hex_values() {
        let mut doc = default_document();
        doc.styles.colors.accent = "rebeccapurple".into();
        doc.styles.colors.zones = Some(IndexMap::from([(
            "problem".to_string(),
            Zone::new("Problem", "#FF6B6B"),
        )]));

        let processed = process(&doc);
        assert_eq!(processed.contrast_text("colors.accent"), None);
        assert_eq!(processed.contrast_text("colors.zones.problem"), Some("#000000"));
        assert_eq!(processed.styles.colors.accent, "rebeccapurple");
    }

    #[test]
    fn input_is_not_mutated() {
        let doc = default_document();
        let before = doc.clone();
        let _ = process(&doc);
        assert_eq!(doc, before);
    }
}
