#![forbid(unsafe_code)]

//! Per-frame configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use selframe_core::geometry::{PERCENT_MAX, Sizes};

/// Default minimum width and height, in percent.
pub const DEFAULT_MIN_SIZE: f64 = 5.0;

/// Default handle grab radius for [`hit_test`](crate::overlay::hit_test), in
/// pixels.
pub const DEFAULT_GRAB_RADIUS_PX: f64 = 8.0;

/// Behaviour switches and limits for one [`SelectionFrame`](crate::SelectionFrame).
///
/// Missing fields deserialize to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Smallest allowed area, in percent of the container.
    pub min_sizes: Sizes,
    /// Resize through the aspect-ratio strategy.
    pub keep_aspect_ratio: bool,
    /// Ignore pointer-down and hide handles and shade.
    pub disabled: bool,
    /// Hide handles (the area can still be moved).
    pub handles_hidden: bool,
    /// Host-controlled gate that ignores pointer-down and pointer-move.
    pub prevent_events: bool,
    /// Distance within which a pointer counts as hitting a handle.
    pub grab_radius_px: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            min_sizes: Sizes::new(DEFAULT_MIN_SIZE, DEFAULT_MIN_SIZE),
            keep_aspect_ratio: false,
            disabled: false,
            handles_hidden: false,
            prevent_events: false,
            grab_radius_px: DEFAULT_GRAB_RADIUS_PX,
        }
    }
}

impl FrameConfig {
    /// Set the minimum sizes.
    #[must_use]
    pub const fn with_min_sizes(mut self, min_sizes: Sizes) -> Self {
        self.min_sizes = min_sizes;
        self
    }

    /// Enable or disable the aspect lock.
    #[must_use]
    pub const fn with_keep_aspect_ratio(mut self, enabled: bool) -> Self {
        self.keep_aspect_ratio = enabled;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_min_sizes(self.min_sizes)?;
        if !(self.grab_radius_px.is_finite() && self.grab_radius_px >= 0.0) {
            return Err(ConfigError::InvalidGrabRadius {
                radius: self.grab_radius_px,
            });
        }
        Ok(())
    }
}

/// Minimum sizes must be finite and in `(0, 100]`.
pub fn validate_min_sizes(min: Sizes) -> Result<(), ConfigError> {
    let ok = |v: f64| v.is_finite() && v > 0.0 && v <= PERCENT_MAX;
    if ok(min.width) && ok(min.height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMinSizes {
            width: min.width,
            height: min.height,
        })
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid min sizes width={width} height={height} (must be finite, > 0 and <= 100)")]
    InvalidMinSizes { width: f64, height: f64 },
    #[error("invalid grab radius {radius} (must be finite and >= 0)")]
    InvalidGrabRadius { radius: f64 },
    #[error("initial area must be finite (top={top} left={left} width={width} height={height})")]
    NonFiniteArea {
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrameConfig::default();
        assert_eq!(config.min_sizes, Sizes::new(5.0, 5.0));
        assert!(!config.keep_aspect_ratio);
        assert!(!config.disabled);
        assert!(!config.handles_hidden);
        assert!(!config.prevent_events);
        assert_eq!(config.grab_radius_px, 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_min_sizes() {
        for (w, h) in [(0.0, 5.0), (5.0, -1.0), (f64::NAN, 5.0), (100.5, 5.0)] {
            let config = FrameConfig::default().with_min_sizes(Sizes::new(w, h));
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidMinSizes { .. })),
                "{w}x{h} accepted"
            );
        }
        assert!(validate_min_sizes(Sizes::new(100.0, 100.0)).is_ok());
    }

    #[test]
    fn rejects_bad_grab_radius() {
        let config = FrameConfig {
            grab_radius_px: -1.0,
            ..FrameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidGrabRadius { radius: -1.0 })
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: FrameConfig =
            serde_json::from_str(r#"{"keep_aspect_ratio":true,"min_sizes":{"width":10,"height":20}}"#)
                .expect("valid config");
        assert!(config.keep_aspect_ratio);
        assert_eq!(config.min_sizes, Sizes::new(10.0, 20.0));
        assert_eq!(config.grab_radius_px, DEFAULT_GRAB_RADIUS_PX);

        let empty: FrameConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(empty, FrameConfig::default());
    }
}
