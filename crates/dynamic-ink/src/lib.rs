//! # Dynamic Ink - Mode-Aware Theme Colors
//!
//! `dynamic-ink` turns a nested theme-color declaration into flat color maps,
//! one per color mode, ready to be written out as custom properties or
//! utility classes by whatever generates the stylesheet.
//!
//! ## Core Concepts
//!
//! - [`ColorDeclaration`]: Nested tree of color names, families and modes
//! - [`flatten`]: Collapse a tree into dash-joined keys (`ink-bold`)
//! - [`process_modes`]: Split `@default` / `@dark` / `@light` into [`ProcessedColors`]
//! - [`ColorMode`]: The default, dark and light variants
//! - [`default_theme`]: The built-in declaration used when none is supplied
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamic_ink::{process_modes, ColorDeclaration};
//!
//! let colors = ColorDeclaration::from_yaml_str(r##"
//! ink:
//!   DEFAULT: "#242424"
//!   bold: "#000000"
//! "@dark":
//!   ink:
//!     DEFAULT: "#ddd"
//!     bold: "#fff"
//! "##).unwrap();
//!
//! let processed = process_modes(&colors);
//!
//! assert_eq!(processed.default["ink"], "#242424");
//! assert_eq!(processed.default["ink-bold"], "#000000");
//! assert_eq!(processed.dark["ink"], "#ddd");
//! assert_eq!(processed.dark["ink-bold"], "#fff");
//! assert!(processed.light.is_empty());
//! ```
//!
//! ## Flattening Rules
//!
//! Nested families join their path with `-`. A `DEFAULT` entry takes the
//! family's own name, so `ink: { DEFAULT: .., bold: .. }` yields `ink` and
//! `ink-bold`.
//!
//! ## Validation
//!
//! Parsed documents may only contain strings and mappings. Numbers, lists,
//! booleans and nulls are rejected with the path of the offending entry:
//!
//! ```rust
//! use dynamic_ink::{ColorDeclaration, DeclarationError};
//!
//! let err = ColorDeclaration::from_yaml_str("ink:\n  bold: 12\n").unwrap_err();
//! assert!(matches!(err, DeclarationError::InvalidValue { .. }));
//! ```
//!
//! ## Presentation Modes
//!
//! [`ProcessedColors::resolve`] overlays one mode on the default colors.
//! Pair it with [`detect_color_mode`] to follow the OS preference.

pub mod declaration;
pub mod defaults;
mod error;
pub mod flatten;
mod loader;
pub mod mode;

pub use declaration::{ColorDeclaration, ColorNode};
pub use defaults::default_theme;
pub use error::{DeclarationError, LoadError, Result};
pub use flatten::{flatten, FlatColorMap, DEFAULT_KEY, KEY_SEPARATOR};
pub use loader::{load_declaration, load_or_default, DECLARATION_EXTENSIONS};
pub use mode::{
    detect_color_mode, process_modes, reset_mode_detector, set_mode_detector, ColorMode,
    ProcessedColors, MODE_PREFIX,
};
