//! End-to-end processing of parsed declarations.

use dynamic_ink::{
    default_theme, flatten, process_modes, ColorDeclaration, ColorMode, FlatColorMap,
    ProcessedColors,
};
use serde_json::json;

fn parse(yaml: &str) -> ColorDeclaration {
    ColorDeclaration::from_yaml_str(yaml).unwrap()
}

fn as_json(processed: &ProcessedColors) -> serde_json::Value {
    serde_json::to_value(processed).unwrap()
}

#[test]
fn test_ink_with_dark_variant() {
    let colors = parse(
        r##"
        ink:
            DEFAULT: "#242424"
            bold: "#000000"
        "@dark":
            ink:
                DEFAULT: "#ddd"
                bold: "#fff"
        "##,
    );

    let processed = process_modes(&colors);

    assert_eq!(
        as_json(&processed),
        json!({
            "default": {"ink": "#242424", "ink-bold": "#000000"},
            "dark": {"ink": "#ddd", "ink-bold": "#fff"},
            "light": {}
        })
    );
}

#[test]
fn test_flatten_explicit_default_bucket() {
    let colors = parse(
        r##"
        "@default":
            ink:
                DEFAULT: "#242424"
                bold: "#000000"
        "##,
    );

    let bucket = colors
        .get(ColorMode::Default.key())
        .and_then(|node| node.as_branch())
        .unwrap();
    let flat = flatten(bucket);

    assert_eq!(flat["ink"], "#242424");
    assert_eq!(flat["ink-bold"], "#000000");
}

#[test]
fn test_explicit_default_wins_over_root() {
    let colors = parse(
        r##"
        x:
            DEFAULT: "#111"
        "@default":
            x:
                DEFAULT: "#222"
        "##,
    );

    let processed = process_modes(&colors);
    assert_eq!(as_json(&processed)["default"], json!({"x": "#222"}));
}

#[test]
fn test_empty_document() {
    let processed = process_modes(&parse("{}"));
    assert_eq!(
        as_json(&processed),
        json!({"default": {}, "dark": {}, "light": {}})
    );
}

#[test]
fn test_json_and_yaml_agree() {
    let from_yaml = parse(
        r##"
        background: "#fff"
        "@light":
            paper: { DEFAULT: "#fafafa", edge: "#eee" }
        "##,
    );
    let from_json = ColorDeclaration::from_json_str(
        r##"{"background": "#fff", "@light": {"paper": {"DEFAULT": "#fafafa", "edge": "#eee"}}}"##,
    )
    .unwrap();

    assert_eq!(from_yaml, from_json);
    let processed = process_modes(&from_json);
    let keys: Vec<&str> = processed.light.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["paper", "paper-edge"]);
}

#[test]
fn test_resolved_dark_palette_of_default_theme() {
    let processed = process_modes(default_theme());
    let dark = processed.resolve(ColorMode::Dark);

    let expected: FlatColorMap = [
        ("background", "#1c1917"),
        ("ink", "#d6d3d1"),
        ("ink-bold", "#ffffff"),
        ("ink-medium", "#78716c"),
        ("ink-light", "#44403c"),
        ("ink-xlight", "#292524"),
        ("accent", "#f87171"),
        ("accent-light", "#b91c1c"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(dark, expected);
    assert_eq!(processed.all_keys().len(), 8);
}

#[test]
fn test_mode_keys_are_only_special_at_top_level() {
    let colors = parse(
        r##"
        brand:
            "@dark": "#000"
        "##,
    );

    let processed = process_modes(&colors);
    assert_eq!(processed.default["brand-@dark"], "#000");
    assert!(processed.dark.is_empty());
}
