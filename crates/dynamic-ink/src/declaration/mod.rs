//! Color declarations: the nested input tree and its validating parser.
//!
//! A declaration maps color names to either a color value or a nested family
//! of colors. At the top level, keys starting with `@` name a mode
//! (`@default`, `@dark`, `@light`); see [`crate::mode`].
//!
//! ```yaml
//! background: "#ffffff"
//! ink:
//!   DEFAULT: "#242424"
//!   bold: "#000000"
//! "@dark":
//!   background: "#1c1917"
//!   ink:
//!     DEFAULT: "#d6d3d1"
//! ```

mod node;
mod parse;

pub use node::{ColorDeclaration, ColorNode};
