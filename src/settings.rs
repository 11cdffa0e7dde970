//! Simulation settings
//!
//! Initial environment, integration step, wall positions and loop
//! parameters. Persisted as JSON; every field falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors loading, saving or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Environment ===
    pub mass: f64,
    pub gravity: f64,
    pub friction_coefficient: f64,
    /// Incline angle in degrees
    pub angle: f64,

    // === Integration ===
    pub time_step: f64,
    pub left_wall: f64,
    pub right_wall: f64,

    // === Loop ===
    /// Target ticks per second for the interactive loop and runner thread
    pub tick_rate_hz: u32,
    /// Samples kept for the position/velocity plot
    pub plot_capacity: usize,
    /// Pending snapshots allowed in the runner queue
    pub queue_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            gravity: DEFAULT_GRAVITY,
            friction_coefficient: DEFAULT_FRICTION,
            angle: DEFAULT_ANGLE,

            time_step: SIM_DT,
            left_wall: LEFT_WALL,
            right_wall: RIGHT_WALL,

            tick_rate_hz: TICK_RATE_HZ,
            plot_capacity: PLOT_CAPACITY,
            queue_capacity: 4,
        }
    }
}

impl Settings {
    /// Check loop and integration parameters.
    ///
    /// Environment values are not range-checked; the integrator accepts them verbatim.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(SettingsError::Invalid {
                field: "time_step",
                reason: format!("must be positive and finite, got {}", self.time_step),
            });
        }
        if !(self.left_wall < self.right_wall) {
            return Err(SettingsError::Invalid {
                field: "right_wall",
                reason: format!(
                    "must be greater than left_wall ({} >= {})",
                    self.left_wall, self.right_wall
                ),
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate_hz",
                reason: "must be at least 1".into(),
            });
        }
        if self.plot_capacity == 0 {
            return Err(SettingsError::Invalid {
                field: "plot_capacity",
                reason: "must be at least 1".into(),
            });
        }
        if self.queue_capacity == 0 {
            return Err(SettingsError::Invalid {
                field: "queue_capacity",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("incline-cart-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_rate_hz, 60);
        assert_eq!(settings.plot_capacity, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 1.62, "angle": 20 }"#).unwrap();
        assert_eq!(settings.gravity, 1.62);
        assert_eq!(settings.angle, 20.0);
        assert_eq!(settings.mass, 1.0);
        assert_eq!(settings.right_wall, 80.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "time_step": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "time_step", .. }));

        let err = Settings::from_json(r#"{ "left_wall": 90 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "right_wall", .. }));

        let err = Settings::from_json(r#"{ "queue_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "queue_capacity", .. }));

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_rejects_non_finite_time_step() {
        for time_step in [f64::INFINITY, f64::NAN] {
            let settings = Settings {
                time_step,
                ..Settings::default()
            };
            let err = settings.validate().unwrap_err();
            assert!(matches!(err, SettingsError::Invalid { field: "time_step", .. }));
        }
    }

    #[test]
    fn test_environment_not_range_checked() {
        let settings = Settings::from_json(r#"{ "mass": -1, "angle": 120 }"#).unwrap();
        assert_eq!(settings.mass, -1.0);
        assert_eq!(settings.angle, 120.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let settings = Settings {
            friction_coefficient: 0.35,
            tick_rate_hz: 120,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
