//! The color tree: [`ColorNode`] and [`ColorDeclaration`].

use indexmap::map::{IndexMap, Iter};
use serde::{Deserialize, Deserializer, Serialize};

/// One node of a color tree.
///
/// Leaves hold a color value as written (usually a hex string). Branches
/// hold a nested family of colors, e.g. an `ink` family with `DEFAULT`,
/// `bold` and `light` shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorNode {
    /// A single color value.
    Leaf(String),
    /// A nested color family.
    Branch(ColorDeclaration),
}

impl ColorNode {
    /// Returns the color value if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ColorNode::Leaf(value) => Some(value),
            ColorNode::Branch(_) => None,
        }
    }

    /// Returns the nested declaration if this node is a branch.
    pub fn as_branch(&self) -> Option<&ColorDeclaration> {
        match self {
            ColorNode::Leaf(_) => None,
            ColorNode::Branch(family) => Some(family),
        }
    }
}

impl From<&str> for ColorNode {
    fn from(value: &str) -> Self {
        ColorNode::Leaf(value.to_string())
    }
}

impl From<String> for ColorNode {
    fn from(value: String) -> Self {
        ColorNode::Leaf(value)
    }
}

impl From<ColorDeclaration> for ColorNode {
    fn from(family: ColorDeclaration) -> Self {
        ColorNode::Branch(family)
    }
}

/// A nested mapping from color names to colors or further color families.
///
/// Entries keep the order they were inserted in, which for parsed documents
/// is the order they appear in the source. Flattening and mode processing
/// both walk entries in this order.
///
/// # Example
///
/// ```rust
/// use dynamic_ink::ColorDeclaration;
///
/// let colors = ColorDeclaration::new()
///     .color("background", "#ffffff")
///     .family("ink", |ink| ink.color("DEFAULT", "#242424").color("bold", "#000000"));
///
/// assert_eq!(colors.len(), 2);
/// assert!(colors.get("ink").and_then(|n| n.as_branch()).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorDeclaration {
    entries: IndexMap<String, ColorNode>,
}

impl ColorDeclaration {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds a single color, returning `self` for chaining.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), ColorNode::Leaf(value.into()));
        self
    }

    /// Adds a nested family built by `build`, returning `self` for chaining.
    pub fn family<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(ColorDeclaration) -> ColorDeclaration,
    {
        let family = build(ColorDeclaration::new());
        self.entries.insert(name.into(), ColorNode::Branch(family));
        self
    }

    /// Inserts a node, returning the node previously stored under `name`.
    ///
    /// Replacing an existing entry keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: impl Into<ColorNode>,
    ) -> Option<ColorNode> {
        self.entries.insert(name.into(), node.into())
    }

    /// Returns the node stored under `name`.
    pub fn get(&self, name: &str) -> Option<&ColorNode> {
        self.entries.get(name)
    }

    /// Returns true if `name` is present at this level.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, ColorNode> {
        self.entries.iter()
    }

    /// Number of entries at this level (not counting nested entries).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow-merges `other` into `self`.
    ///
    /// Entries of `other` replace entries of `self` with the same top-level
    /// name; nested families are replaced wholesale, not merged.
    pub fn overlay(mut self, other: &ColorDeclaration) -> Self {
        for (name, node) in other.iter() {
            self.entries.insert(name.clone(), node.clone());
        }
        self
    }
}

impl<'a> IntoIterator for &'a ColorDeclaration {
    type Item = (&'a String, &'a ColorNode);
    type IntoIter = Iter<'a, String, ColorNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ColorDeclaration
where
    K: Into<String>,
    V: Into<ColorNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ColorDeclaration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        ColorDeclaration::from_yaml_value(&value).map_err(serde::de::Error::custom)
    }
}
