//! Mode-aware color processing.
//!
//! A declaration may carry per-mode variants under reserved top-level keys:
//!
//! ```yaml
//! # Root colors belong to the default mode
//! background: "#ffffff"
//! ink:
//!   DEFAULT: "#292524"
//!   bold: "#000000"
//!
//! # Explicit default entries replace root entries of the same name
//! "@default":
//!   accent: "#dc2626"
//!
//! # Mode variants
//! "@dark":
//!   background: "#1c1917"
//!   ink:
//!     DEFAULT: "#d6d3d1"
//!     bold: "#ffffff"
//! ```
//!
//! [`process_modes`] turns that into three flat maps, one per [`ColorMode`].
//! [`ProcessedColors::resolve`] then picks the effective palette for a
//! presentation mode, which can come from [`detect_color_mode`].

mod adaptive;
mod kind;
mod process;

pub use adaptive::{detect_color_mode, reset_mode_detector, set_mode_detector};
pub use kind::{ColorMode, MODE_PREFIX};
pub use process::{process_modes, ProcessedColors};
