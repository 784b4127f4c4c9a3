//! Error types for declaration parsing and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a document into a [`ColorDeclaration`](crate::ColorDeclaration)
/// or while splitting it into modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// A value is neither a color string nor a nested mapping.
    #[error("invalid color value at '{path}': expected a string or a mapping, found {found}")]
    InvalidValue {
        /// Dotted key path to the offending value.
        path: String,
        /// The kind of value that was found.
        found: &'static str,
    },

    /// A mapping key is not a string.
    #[error("invalid key under '{path}': color names must be strings")]
    InvalidKey {
        /// Dotted key path of the mapping holding the key.
        path: String,
    },

    /// Two keys of one mapping name the same color, e.g. `50` and `"50"`.
    #[error("duplicate color name at '{path}'")]
    DuplicateKey {
        /// Dotted key path of the repeated name.
        path: String,
    },

    /// A top-level mode key (`@dark`, ...) is bound to a single color instead of a mapping.
    #[error("mode '{mode}' must be a mapping of colors, found a single value")]
    ModeNotMapping {
        /// The mode key as written, e.g. `@dark`.
        mode: String,
    },

    /// The document itself could not be parsed.
    #[error("failed to parse declaration: {message}")]
    Parse {
        /// Message from the YAML or JSON parser.
        message: String,
    },
}

impl From<serde_yaml::Error> for DeclarationError {
    fn from(err: serde_yaml::Error) -> Self {
        DeclarationError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DeclarationError {
    fn from(err: serde_json::Error) -> Self {
        DeclarationError::Parse {
            message: err.to_string(),
        }
    }
}

/// Errors raised while loading a declaration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of [`DECLARATION_EXTENSIONS`](crate::DECLARATION_EXTENSIONS).
    #[error(
        "unsupported declaration file {}: expected one of {}",
        .path.display(),
        crate::DECLARATION_EXTENSIONS.join(", ")
    )]
    UnsupportedExtension { path: PathBuf },

    /// The file was read but its content is not a valid declaration.
    #[error("invalid declaration in {}: {source}", .path.display())]
    Declaration {
        path: PathBuf,
        #[source]
        source: DeclarationError,
    },
}

/// Result type for declaration operations.
pub type Result<T> = std::result::Result<T, DeclarationError>;
