use motif_tokens::base::colors::gray;
use motif_tokens::{compose, BaseColors, BaseSpacing, BaseTypography, SemanticColor, SemanticTokens};

#[test]
fn standard_tokens_match_a_fresh_composition() {
    let fresh = compose(
        &BaseColors::STANDARD,
        &BaseTypography::STANDARD,
        &BaseSpacing::STANDARD,
    );
    assert_eq!(&fresh, SemanticTokens::standard());
}

#[test]
fn composition_follows_custom_base_tables() {
    let mut colors = BaseColors::STANDARD;
    colors.brand.accent = "#FF00FF";
    colors.gray.gray_900 = "#101010";

    let tokens = compose(&colors, &BaseTypography::STANDARD, &BaseSpacing::STANDARD);

    assert_eq!(tokens.colors.get(SemanticColor::BorderFocus), "#FF00FF");
    assert_eq!(tokens.colors.get(SemanticColor::ActionAccent), "#FF00FF");
    assert_eq!(tokens.colors.get(SemanticColor::TextPrimary), "#101010");
    assert_eq!(
        tokens.colors.get(SemanticColor::BorderMuted),
        gray::GRAY_100,
        "untouched base entries should flow through unchanged"
    );
}

#[test]
fn spacing_tokens_are_the_base_tables() {
    let tokens = SemanticTokens::standard();
    assert_eq!(tokens.spacing.layout.container, "1280px");
    assert_eq!(tokens.spacing.component.radius.full, "9999px");
    assert_eq!(tokens.spacing.scale.len(), 13);
}

#[test]
fn serialized_shape_uses_usage_context_names() {
    let json = serde_json::to_value(SemanticTokens::standard()).unwrap();

    assert_eq!(json["colors"]["text"]["primary"], "#111827");
    assert_eq!(json["colors"]["zones"]["problem"]["primary"], "#FF6B6B");
    assert_eq!(json["typography"]["headings"]["h2"]["size"], "24px");
    assert_eq!(json["typography"]["body"]["default"]["lineHeight"], 1.5);
    assert_eq!(json["spacing"]["scale"][1]["value"], "4px");
}
