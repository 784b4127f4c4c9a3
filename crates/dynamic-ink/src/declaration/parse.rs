//! Validating conversion from untyped YAML/JSON documents.
//!
//! Documents are parsed into a `serde_yaml::Value` (or `serde_json::Value`)
//! first and then walked into a typed [`ColorDeclaration`]. Mappings become
//! branches and strings become leaves. Every other shape is rejected with the
//! dotted path of the offending value, so a typo deep in a palette points at
//! the exact entry.

use serde_yaml::Value as YamlValue;

use super::node::{ColorDeclaration, ColorNode};
use crate::error::{DeclarationError, Result};
use crate::mode::ColorMode;

impl ColorDeclaration {
    /// Parses a declaration from YAML text.
    ///
    /// JSON is a subset of YAML, so this also accepts JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::Parse`] for malformed YAML, and
    /// [`DeclarationError::InvalidValue`], [`DeclarationError::InvalidKey`],
    /// [`DeclarationError::DuplicateKey`] or [`DeclarationError::ModeNotMapping`]
    /// for well-formed documents that are not color trees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynamic_ink::ColorDeclaration;
    ///
    /// let colors = ColorDeclaration::from_yaml_str(r##"
    /// ink:
    ///   DEFAULT: "#242424"
    ///   bold: "#000000"
    /// "@dark":
    ///   ink:
    ///     DEFAULT: "#ddd"
    /// "##).unwrap();
    ///
    /// assert_eq!(colors.len(), 2);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: YamlValue = serde_yaml::from_str(yaml)?;
        // An empty document is an empty declaration.
        if value.is_null() {
            return Ok(ColorDeclaration::new());
        }
        Self::from_yaml_value(&value)
    }

    /// Parses a declaration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Converts a YAML value into a declaration.
    ///
    /// The root must be a mapping.
    pub fn from_yaml_value(value: &YamlValue) -> Result<Self> {
        match value {
            YamlValue::Mapping(mapping) => check_modes(parse_yaml_mapping(mapping, "")?),
            other => Err(DeclarationError::InvalidValue {
                path: "<root>".to_string(),
                found: yaml_kind(other),
            }),
        }
    }

    /// Converts a JSON value into a declaration.
    ///
    /// The root must be an object.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => check_modes(parse_json_object(map, "")?),
            other => Err(DeclarationError::InvalidValue {
                path: "<root>".to_string(),
                found: json_kind(other),
            }),
        }
    }
}

/// Mode keys at the top level must hold a family of colors.
fn check_modes(declaration: ColorDeclaration) -> Result<ColorDeclaration> {
    for (name, node) in &declaration {
        if ColorMode::from_key(name).is_some() && node.as_branch().is_none() {
            return Err(DeclarationError::ModeNotMapping { mode: name.clone() });
        }
    }
    Ok(declaration)
}

fn parse_yaml_mapping(mapping: &serde_yaml::Mapping, parent: &str) -> Result<ColorDeclaration> {
    let mut declaration = ColorDeclaration::new();
    for (key, value) in mapping {
        let name = yaml_key(key).ok_or_else(|| DeclarationError::InvalidKey {
            path: display_path(parent),
        })?;
        let path = join_path(parent, &name);
        // `50` and `"50"` name the same color.
        if declaration.contains(&name) {
            return Err(DeclarationError::DuplicateKey { path });
        }
        let node = match value {
            YamlValue::String(color) => ColorNode::Leaf(color.clone()),
            YamlValue::Mapping(nested) => ColorNode::Branch(parse_yaml_mapping(nested, &path)?),
            other => {
                return Err(DeclarationError::InvalidValue {
                    path,
                    found: yaml_kind(other),
                })
            }
        };
        declaration.insert(name, node);
    }
    Ok(declaration)
}

fn parse_json_object(
    map: &serde_json::Map<String, serde_json::Value>,
    parent: &str,
) -> Result<ColorDeclaration> {
    let mut declaration = ColorDeclaration::new();
    for (name, value) in map {
        let path = join_path(parent, name);
        let node = match value {
            serde_json::Value::String(color) => ColorNode::Leaf(color.clone()),
            serde_json::Value::Object(nested) => {
                ColorNode::Branch(parse_json_object(nested, &path)?)
            }
            other => {
                return Err(DeclarationError::InvalidValue {
                    path,
                    found: json_kind(other),
                })
            }
        };
        declaration.insert(name.clone(), node);
    }
    Ok(declaration)
}

/// Color names are strings. Integer keys (`50:`, `800:`) are common in
/// palettes and YAML reads them as numbers, so they are accepted as their
/// decimal text. Floats are rejected.
fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(name) => Some(name.clone()),
        YamlValue::Number(n) => n
            .as_u64()
            .map(|i| i.to_string())
            .or_else(|| n.as_i64().map(|i| i.to_string())),
        _ => None,
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
