//! The palette entries the default theme is built from.
//!
//! Values are the Tailwind v2 `warmGray` and `red` scales.

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

pub const WARM_GRAY_50: &str = "#fafaf9";
pub const WARM_GRAY_100: &str = "#f5f5f4";
pub const WARM_GRAY_200: &str = "#e7e5e4";
pub const WARM_GRAY_300: &str = "#d6d3d1";
pub const WARM_GRAY_400: &str = "#a8a29e";
pub const WARM_GRAY_500: &str = "#78716c";
pub const WARM_GRAY_600: &str = "#57534e";
pub const WARM_GRAY_700: &str = "#44403c";
pub const WARM_GRAY_800: &str = "#292524";
pub const WARM_GRAY_900: &str = "#1c1917";

pub const RED_50: &str = "#fef2f2";
pub const RED_100: &str = "#fee2e2";
pub const RED_200: &str = "#fecaca";
pub const RED_300: &str = "#fca5a5";
pub const RED_400: &str = "#f87171";
pub const RED_500: &str = "#ef4444";
pub const RED_600: &str = "#dc2626";
pub const RED_700: &str = "#b91c1c";
pub const RED_800: &str = "#991b1b";
pub const RED_900: &str = "#7f1d1d";
