//! Loading declarations from files.
//!
//! Files are recognized by extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.yaml`   | YAML   |
//! | `.yml`    | YAML   |
//! | `.json`   | JSON   |

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::declaration::ColorDeclaration;
use crate::defaults::default_theme;
use crate::error::LoadError;

/// Recognized declaration file extensions.
pub const DECLARATION_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Option<Format> {
    let extension = format!(".{}", path.extension()?.to_str()?.to_ascii_lowercase());
    let known = DECLARATION_EXTENSIONS.iter().find(|ext| **ext == extension)?;
    match *known {
        ".json" => Some(Format::Json),
        _ => Some(Format::Yaml),
    }
}

/// Reads and parses a declaration file.
///
/// # Errors
///
/// Returns a [`LoadError`] if the extension is not recognized, the file
/// cannot be read, or its content is not a valid declaration.
///
/// # Example
///
/// ```rust,ignore
/// let colors = dynamic_ink::load_declaration("./theme-colors.yaml")?;
/// ```
pub fn load_declaration<P: AsRef<Path>>(path: P) -> Result<ColorDeclaration, LoadError> {
    let path = path.as_ref();
    let format = format_for(path).ok_or_else(|| LoadError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match format {
        Format::Yaml => ColorDeclaration::from_yaml_str(&content),
        Format::Json => ColorDeclaration::from_json_str(&content),
    };

    let declaration = parsed.map_err(|source| LoadError::Declaration {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), entries = declaration.len(), "loaded declaration");
    Ok(declaration)
}

/// Loads the declaration at `path`, or returns the built-in theme if no path is given.
pub fn load_or_default<P: AsRef<Path>>(
    path: Option<P>,
) -> Result<Cow<'static, ColorDeclaration>, LoadError> {
    match path {
        Some(path) => load_declaration(path).map(Cow::Owned),
        None => {
            debug!("no declaration given, using the default theme");
            Ok(Cow::Borrowed(default_theme()))
        }
    }
}
