use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix marking a top-level key as a mode key.
pub const MODE_PREFIX: char = '@';

/// A named variant of the color tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors that apply unless a presentation mode overrides them.
    Default,
    /// Dark mode (dark background, light text).
    Dark,
    /// Light mode (light background, dark text).
    Light,
}

impl ColorMode {
    /// All modes, in bucket order.
    pub const ALL: [ColorMode; 3] = [ColorMode::Default, ColorMode::Dark, ColorMode::Light];

    /// The reserved declaration key for this mode, e.g. `@dark`.
    pub fn key(self) -> &'static str {
        match self {
            ColorMode::Default => "@default",
            ColorMode::Dark => "@dark",
            ColorMode::Light => "@light",
        }
    }

    /// The bucket name used in processed output, e.g. `dark`.
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Default => "default",
            ColorMode::Dark => "dark",
            ColorMode::Light => "light",
        }
    }

    /// Looks up the mode for a declaration key such as `@light`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Looks up the mode for a bucket name such as `light`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
