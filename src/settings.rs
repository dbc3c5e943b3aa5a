//! Runtime settings
//!
//! Gameplay geometry is fixed (see `consts`); these only control how the
//! frame loop runs. Loaded from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors loading settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Frame loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// RNG seed for brick/ball colors (None = derive from the clock)
    pub seed: Option<u64>,
    /// Sleep after presenting each frame (milliseconds)
    pub frame_delay_ms: u64,
    /// Largest dt fed to a single tick (seconds)
    pub max_frame_dt: f32,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
    /// Let the headless frontend steer the paddle and launch
    pub autopilot: bool,
    /// Log a status line every N frames (0 = never)
    pub log_every_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_delay_ms: 30,
            max_frame_dt: 0.1,
            max_frames: Some(2000),
            autopilot: true,
            log_every_frames: 100,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(SettingsError::Invalid {
                field: "max_frame_dt",
                reason: format!("must be a positive number, got {}", self.max_frame_dt),
            });
        }
        if self.frame_delay_ms > 1000 {
            return Err(SettingsError::Invalid {
                field: "frame_delay_ms",
                reason: format!("must be at most 1000, got {}", self.frame_delay_ms),
            });
        }
        if self.max_frames == Some(0) {
            return Err(SettingsError::Invalid {
                field: "max_frames",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
