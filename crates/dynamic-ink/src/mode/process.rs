use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::kind::{ColorMode, MODE_PREFIX};
use crate::declaration::ColorDeclaration;
use crate::flatten::{flatten, FlatColorMap};

/// A declaration split into flat per-mode color maps.
///
/// Serializes as an object with exactly the keys `default`, `dark` and
/// `light`. A mode absent from the declaration has an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedColors {
    /// Root colors overlaid with `@default`.
    pub default: FlatColorMap,
    /// Colors declared under `@dark`.
    pub dark: FlatColorMap,
    /// Colors declared under `@light`.
    pub light: FlatColorMap,
}

impl ProcessedColors {
    /// Returns the flat map for one mode.
    pub fn bucket(&self, mode: ColorMode) -> &FlatColorMap {
        match mode {
            ColorMode::Default => &self.default,
            ColorMode::Dark => &self.dark,
            ColorMode::Light => &self.light,
        }
    }

    /// Returns every key used by any mode, without duplicates.
    ///
    /// Keys are listed in first-seen order: default keys first, then keys
    /// only present in dark, then keys only present in light.
    pub fn all_keys(&self) -> Vec<&str> {
        let keys: IndexSet<&str> = ColorMode::ALL
            .into_iter()
            .flat_map(|mode| self.bucket(mode).keys().map(String::as_str))
            .collect();
        keys.into_iter().collect()
    }

    /// Returns the effective palette for a presentation mode.
    ///
    /// The default map is taken as the base and the mode's own entries
    /// replace matching keys. Keys only present in the mode are appended.
    /// `resolve(ColorMode::Default)` is the default map unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynamic_ink::{process_modes, ColorDeclaration, ColorMode};
    ///
    /// let colors = ColorDeclaration::from_yaml_str(r##"
    /// background: "#ffffff"
    /// ink: "#242424"
    /// "@dark":
    ///   ink: "#dddddd"
    /// "##).unwrap();
    ///
    /// let palette = process_modes(&colors).resolve(ColorMode::Dark);
    /// assert_eq!(palette["background"], "#ffffff");
    /// assert_eq!(palette["ink"], "#dddddd");
    /// ```
    pub fn resolve(&self, mode: ColorMode) -> FlatColorMap {
        let mut palette = self.default.clone();
        if mode != ColorMode::Default {
            for (key, value) in self.bucket(mode) {
                palette.insert(key.clone(), value.clone());
            }
        }
        palette
    }

    /// Returns true if no mode has any color.
    pub fn is_empty(&self) -> bool {
        ColorMode::ALL
            .into_iter()
            .all(|mode| self.bucket(mode).is_empty())
    }
}

/// Splits a declaration into its modes and flattens each one.
///
/// Top-level keys `@default`, `@dark` and `@light` select a mode bucket.
/// Every other top-level key that does not start with `@` is a root color
/// and belongs to the default mode; entries under `@default` replace root
/// entries with the same top-level name. Other `@`-prefixed keys are
/// skipped with a warning, as is a mode key bound to a single color. Parsed
/// declarations never contain one, see
/// [`ModeNotMapping`](crate::DeclarationError::ModeNotMapping).
///
/// # Example
///
/// ```rust
/// use dynamic_ink::{process_modes, ColorDeclaration};
///
/// let colors = ColorDeclaration::new()
///     .family("ink", |ink| ink.color("DEFAULT", "#242424").color("bold", "#000000"))
///     .family("@dark", |dark| {
///         dark.family("ink", |ink| ink.color("DEFAULT", "#ddd").color("bold", "#fff"))
///     });
///
/// let processed = process_modes(&colors);
/// assert_eq!(processed.default["ink-bold"], "#000000");
/// assert_eq!(processed.dark["ink"], "#ddd");
/// assert!(processed.light.is_empty());
/// ```
pub fn process_modes(declaration: &ColorDeclaration) -> ProcessedColors {
    let mut root = ColorDeclaration::new();
    let mut explicit_default = None;
    let mut dark = None;
    let mut light = None;

    for (name, node) in declaration {
        match ColorMode::from_key(name) {
            Some(mode) => {
                let Some(bucket) = node.as_branch() else {
                    warn!(key = %name, "skipping mode key bound to a single color");
                    continue;
                };
                match mode {
                    ColorMode::Default => explicit_default = Some(bucket),
                    ColorMode::Dark => dark = Some(bucket),
                    ColorMode::Light => light = Some(bucket),
                }
            }
            None if name.starts_with(MODE_PREFIX) => {
                warn!(key = %name, "skipping unknown mode key");
            }
            None => {
                root.insert(name.clone(), node.clone());
            }
        }
    }

    let default_colors = match explicit_default {
        Some(bucket) => root.overlay(bucket),
        None => root,
    };

    let processed = ProcessedColors {
        default: flatten(&default_colors),
        dark: dark.map(flatten).unwrap_or_default(),
        light: light.map(flatten).unwrap_or_default(),
    };

    debug!(
        default = processed.default.len(),
        dark = processed.dark.len(),
        light = processed.light.len(),
        "processed color modes"
    );

    processed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pairs: &[(&str, &str)]) -> FlatColorMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_declaration() {
        let processed = process_modes(&ColorDeclaration::new());
        assert_eq!(processed, ProcessedColors::default());
        assert!(processed.is_empty());
    }

    #[test]
    fn test_dark_only_is_isolated() {
        let colors = ColorDeclaration::new().family("@dark", |dark| dark.color("x", "#000"));

        let processed = process_modes(&colors);
        assert_eq!(processed.dark, flat(&[("x", "#000")]));
        assert!(processed.default.is_empty());
        assert!(processed.light.is_empty());
    }

    #[test]
    fn test_explicit_default_overrides_root() {
        let colors = ColorDeclaration::new()
            .family("x", |x| x.color("DEFAULT", "#111"))
            .family("@default", |d| d.family("x", |x| x.color("DEFAULT", "#222")));

        let processed = process_modes(&colors);
        assert_eq!(processed.default, flat(&[("x", "#222")]));
    }

    #[test]
    fn test_root_and_explicit_default_are_merged() {
        let colors = ColorDeclaration::new()
            .color("background", "#fff")
            .family("@default", |d| d.color("accent", "#f00"));

        let processed = process_modes(&colors);
        let keys: Vec<&str> = processed.default.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["background", "accent"]);
    }

    #[test]
    fn test_override_replaces_whole_family() {
        let colors = ColorDeclaration::new()
            .family("ink", |ink| ink.color("DEFAULT", "#111").color("bold", "#000"))
            .family("@default", |d| d.family("ink", |ink| ink.color("DEFAULT", "#222")));

        let processed = process_modes(&colors);
        assert_eq!(processed.default, flat(&[("ink", "#222")]));
    }

    #[test]
    fn test_unknown_mode_key_is_skipped() {
        let colors = ColorDeclaration::new()
            .color("ink", "#111")
            .family("@sepia", |s| s.color("ink", "#704214"));

        let processed = process_modes(&colors);
        assert_eq!(processed.default, flat(&[("ink", "#111")]));
        assert!(processed.dark.is_empty());
        assert!(processed.light.is_empty());
    }

    #[test]
    fn test_mode_bound_to_leaf_is_skipped() {
        let colors = ColorDeclaration::new()
            .color("ink", "#111")
            .color("@dark", "#000");

        let processed = process_modes(&colors);
        assert_eq!(processed.default, flat(&[("ink", "#111")]));
        assert!(processed.dark.is_empty());
    }

    #[test]
    fn test_all_keys_union_in_first_seen_order() {
        let processed = ProcessedColors {
            default: flat(&[("background", "#fff"), ("ink", "#111")]),
            dark: flat(&[("ink", "#eee"), ("glow", "#0f0")]),
            light: flat(&[("paper", "#fafafa"), ("background", "#fefefe")]),
        };

        assert_eq!(
            processed.all_keys(),
            vec!["background", "ink", "glow", "paper"]
        );
    }

    #[test]
    fn test_resolve_overlays_mode_on_default() {
        let processed = ProcessedColors {
            default: flat(&[("background", "#fff"), ("ink", "#111")]),
            dark: flat(&[("ink", "#eee"), ("glow", "#0f0")]),
            light: FlatColorMap::new(),
        };

        assert_eq!(
            processed.resolve(ColorMode::Dark),
            flat(&[("background", "#fff"), ("ink", "#eee"), ("glow", "#0f0")])
        );
        assert_eq!(processed.resolve(ColorMode::Light), processed.default);
        assert_eq!(processed.resolve(ColorMode::Default), processed.default);
    }

    #[test]
    fn test_serializes_three_buckets() {
        let processed = process_modes(&ColorDeclaration::new().color("ink", "#111"));
        let json = serde_json::to_value(&processed).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"default": {"ink": "#111"}, "dark": {}, "light": {}})
        );
    }
}
