//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HandmoveError, HandmoveResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Movement classifier thresholds.
    pub gesture: GestureConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Thresholds used by the movement classifier.
///
/// The defaults were tuned by hand against live camera input. They have no
/// derivation beyond that, so treat them as a starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum center displacement for a scroll, as a fraction of the
    /// rectangle height.
    pub scroll_distance_factor: f64,

    /// Minimum height change for a zoom, as a fraction of the current height.
    pub zoom_height_factor: f64,

    /// Minimum change of the hand axis angle (degrees) for a slide.
    pub slide_angle_threshold_deg: i32,

    /// Lower bound of the upright pose a slide must start from (degrees).
    pub slide_gate_min_deg: i32,

    /// Upper bound of the upright pose a slide must start from (degrees).
    pub slide_gate_max_deg: i32,

    /// Slide detection runs on every N-th frame.
    pub slide_frame_stride: u64,

    /// X offset of the synthetic horizontal reference point.
    pub reference_offset: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "handmove=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scroll_distance_factor: 0.02,
            zoom_height_factor: 0.03,
            slide_angle_threshold_deg: 12,
            slide_gate_min_deg: 80,
            slide_gate_max_deg: 100,
            slide_frame_stride: 2,
            reference_offset: 0.1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl GestureConfig {
    /// Reject threshold combinations the classifier cannot work with.
    pub fn validate(&self) -> HandmoveResult<()> {
        if !(self.scroll_distance_factor.is_finite() && self.scroll_distance_factor > 0.0) {
            return Err(HandmoveError::config(format!(
                "scroll_distance_factor must be positive, got {}",
                self.scroll_distance_factor
            )));
        }
        if !(self.zoom_height_factor.is_finite() && self.zoom_height_factor > 0.0) {
            return Err(HandmoveError::config(format!(
                "zoom_height_factor must be positive, got {}",
                self.zoom_height_factor
            )));
        }
        if !(0..=360).contains(&self.slide_angle_threshold_deg) {
            return Err(HandmoveError::config(format!(
                "slide_angle_threshold_deg must be within 0..=360, got {}",
                self.slide_angle_threshold_deg
            )));
        }
        for bound in [self.slide_gate_min_deg, self.slide_gate_max_deg] {
            if !(-180..=180).contains(&bound) {
                return Err(HandmoveError::config(format!(
                    "slide gate bounds must be within -180..=180, got {}",
                    bound
                )));
            }
        }
        if self.slide_gate_min_deg > self.slide_gate_max_deg {
            return Err(HandmoveError::config(format!(
                "slide gate is empty: [{}, {}]",
                self.slide_gate_min_deg, self.slide_gate_max_deg
            )));
        }
        if self.slide_frame_stride == 0 {
            return Err(HandmoveError::config("slide_frame_stride must be at least 1"));
        }
        if !(self.reference_offset.is_finite() && self.reference_offset > 0.0) {
            return Err(HandmoveError::config(format!(
                "reference_offset must be positive, got {}",
                self.reference_offset
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> HandmoveResult<Self> {
        if !path.exists() {
            return Err(HandmoveError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.gesture.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> HandmoveResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> HandmoveResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("handmove").join("config.json")
}
