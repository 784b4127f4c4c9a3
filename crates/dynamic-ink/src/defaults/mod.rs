//! The built-in theme used when no declaration is supplied.
//!
//! ```text
//! @default                         @dark
//!   background   white               background   warmGray-900
//!   ink          warmGray-800        ink          warmGray-300
//!   ink-bold     black               ink-bold     white
//!   ink-medium   warmGray-500        ink-medium   warmGray-500
//!   ink-light    warmGray-200        ink-light    warmGray-700
//!   ink-xlight   warmGray-50         ink-xlight   warmGray-800
//!   accent       red-600             accent       red-400
//!   accent-light red-200             accent-light red-700
//! ```

pub mod palette;

use once_cell::sync::Lazy;

use crate::declaration::ColorDeclaration;
use palette::*;

static DEFAULT_THEME: Lazy<ColorDeclaration> = Lazy::new(build_default_theme);

/// Returns the built-in theme declaration.
///
/// The declaration is built on first use and shared read-only afterwards.
pub fn default_theme() -> &'static ColorDeclaration {
    &DEFAULT_THEME
}

fn build_default_theme() -> ColorDeclaration {
    ColorDeclaration::new()
        .family("@default", |base| {
            base.color("background", WHITE)
                .family("ink", |ink| {
                    ink.color("DEFAULT", WARM_GRAY_800)
                        .color("bold", BLACK)
                        .color("medium", WARM_GRAY_500)
                        .color("light", WARM_GRAY_200)
                        .color("xlight", WARM_GRAY_50)
                })
                .family("accent", |accent| {
                    accent.color("DEFAULT", RED_600).color("light", RED_200)
                })
        })
        .family("@dark", |dark| {
            dark.color("background", WARM_GRAY_900)
                .family("ink", |ink| {
                    ink.color("DEFAULT", WARM_GRAY_300)
                        .color("bold", WHITE)
                        .color("medium", WARM_GRAY_500)
                        .color("light", WARM_GRAY_700)
                        .color("xlight", WARM_GRAY_800)
                })
                .family("accent", |accent| {
                    accent.color("DEFAULT", RED_400).color("light", RED_700)
                })
        })
}
