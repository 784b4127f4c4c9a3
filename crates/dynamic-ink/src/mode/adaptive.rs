//! OS color mode detection.
//!
//! Use [`set_mode_detector`] to override detection for testing:
//!
//! ```rust
//! use dynamic_ink::{detect_color_mode, set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! ```

use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use tracing::debug;

use super::kind::ColorMode;

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to decide whether the user prefers light or dark colors.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores detection from the OS preference.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

/// Detects the user's preferred presentation mode.
///
/// Returns [`ColorMode::Dark`] or [`ColorMode::Light`]; never
/// [`ColorMode::Default`]. When the OS does not report a preference, or the
/// query fails, light mode is assumed.
pub fn detect_color_mode() -> ColorMode {
    let detector = *MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ColorMode::Light,
        Err(err) => {
            debug!(error = ?err, "color mode detection failed, assuming light");
            ColorMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detect_uses_override() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);

        reset_mode_detector();
    }

    #[test]
    #[serial]
    fn test_os_detection_never_returns_default() {
        reset_mode_detector();
        assert_ne!(detect_color_mode(), ColorMode::Default);
    }
}
