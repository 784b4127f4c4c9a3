//! Flattening nested color trees into single-level maps.
//!
//! Nested families are collapsed into dash-joined keys. The `DEFAULT` shade of
//! a family takes the family's own name:
//!
//! | Declaration                          | Flat key    |
//! |--------------------------------------|-------------|
//! | `ink: "#242424"`                     | `ink`       |
//! | `ink: { DEFAULT: "#242424" }`        | `ink`       |
//! | `ink: { bold: "#000000" }`           | `ink-bold`  |
//! | `ink: { muted: { light: "#eee" } }`  | `ink-muted-light` |

use indexmap::IndexMap;

use crate::declaration::{ColorDeclaration, ColorNode};

/// Key naming the family's unsuffixed shade.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Separator between path segments in flat keys.
pub const KEY_SEPARATOR: char = '-';

/// A single-level mapping from dash-joined color keys to color values.
///
/// Entries are ordered by first insertion, following the declaration's
/// order.
pub type FlatColorMap = IndexMap<String, String>;

/// Flattens a nested declaration into a [`FlatColorMap`].
///
/// Entries are produced in declaration order. If two paths collapse onto the
/// same key, the later one wins and the key keeps its first position.
///
/// # Example
///
/// ```rust
/// use dynamic_ink::{flatten, ColorDeclaration};
///
/// let colors = ColorDeclaration::new()
///     .family("ink", |ink| ink.color("DEFAULT", "#242424").color("bold", "#000000"));
///
/// let flat = flatten(&colors);
/// assert_eq!(flat.get("ink").map(String::as_str), Some("#242424"));
/// assert_eq!(flat.get("ink-bold").map(String::as_str), Some("#000000"));
/// ```
pub fn flatten(declaration: &ColorDeclaration) -> FlatColorMap {
    let mut flat = FlatColorMap::with_capacity(declaration.len());

    for (name, node) in declaration {
        match node {
            ColorNode::Leaf(value) => {
                flat.insert(name.clone(), value.clone());
            }
            ColorNode::Branch(family) => {
                for (key, value) in flatten(family) {
                    flat.insert(join_key(name, &key), value);
                }
            }
        }
    }

    flat
}

fn join_key(family: &str, key: &str) -> String {
    if key == DEFAULT_KEY {
        family.to_string()
    } else {
        let mut joined = String::with_capacity(family.len() + key.len() + 1);
        joined.push_str(family);
        joined.push(KEY_SEPARATOR);
        joined.push_str(key);
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(flat: &FlatColorMap) -> Vec<&str> {
        flat.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&ColorDeclaration::new()).is_empty());
    }

    #[test]
    fn test_flat_input_is_unchanged() {
        let colors = ColorDeclaration::new()
            .color("background", "#fff")
            .color("accent", "#f00");

        let flat = flatten(&colors);
        assert_eq!(keys(&flat), vec!["background", "accent"]);
        assert_eq!(flat["accent"], "#f00");
    }

    #[test]
    fn test_default_takes_family_name() {
        let colors = ColorDeclaration::new().family("ink", |ink| ink.color("DEFAULT", "#242424"));

        let flat = flatten(&colors);
        assert_eq!(keys(&flat), vec!["ink"]);
        assert_eq!(flat["ink"], "#242424");
    }

    #[test]
    fn test_shades_are_dash_joined() {
        let colors = ColorDeclaration::new().family("ink", |ink| ink.color("bold", "#000"));

        let flat = flatten(&colors);
        assert_eq!(keys(&flat), vec!["ink-bold"]);
    }

    #[test]
    fn test_deep_nesting() {
        let colors = ColorDeclaration::new()
            .family("a", |a| a.family("b", |b| b.color("c", "#fff")));

        let flat = flatten(&colors);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a-b-c"], "#fff");
    }

    #[test]
    fn test_default_inside_nested_family() {
        let colors = ColorDeclaration::new().family("ink", |ink| {
            ink.family("muted", |muted| muted.color("DEFAULT", "#888").color("light", "#ccc"))
        });

        let flat = flatten(&colors);
        assert_eq!(keys(&flat), vec!["ink-muted", "ink-muted-light"]);
    }

    #[test]
    fn test_top_level_default_is_kept() {
        let colors = ColorDeclaration::new().color("DEFAULT", "#123");

        let flat = flatten(&colors);
        assert_eq!(flat["DEFAULT"], "#123");
    }

    #[test]
    fn test_collision_last_writer_wins_in_first_position() {
        let colors = ColorDeclaration::new()
            .color("ink-bold", "#111")
            .color("accent", "#f00")
            .family("ink", |ink| ink.color("bold", "#222"));

        let flat = flatten(&colors);
        assert_eq!(keys(&flat), vec!["ink-bold", "accent"]);
        assert_eq!(flat["ink-bold"], "#222");
    }

    #[test]
    fn test_leaf_values_are_not_validated() {
        let colors = ColorDeclaration::new().color("ink", "currentColor");
        assert_eq!(flatten(&colors)["ink"], "currentColor");
    }
}
