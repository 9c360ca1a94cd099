//! Simulation settings
//!
//! An explicit, immutable configuration value handed to entity constructors
//! and the loop. Loaded from JSON, overridden from the command line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trace logging and on-screen diagnostics
    pub debug: bool,
    /// Single draw colour and simplified debris
    pub monochrome: bool,
    /// Ticks per second; divisor in every speed formula
    pub target_tick_rate: f32,
    /// Ambient Large rocks placed at startup
    pub rock_count: usize,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Dead-zone distance past each edge of the visible field
    pub border: f32,

    /// RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Rocks touching the field centre explode
    pub centre_hazard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            monochrome: false,
            target_tick_rate: DEFAULT_TICK_RATE,
            rock_count: DEFAULT_ROCK_COUNT,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            border: BORDER,

            seed: None,
            centre_hazard: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys take their defaults.
    ///
    /// Runs before the logger exists, so it reports nothing itself.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(settings)
    }

    /// Reject degenerate configurations before anything is built from them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_tick_rate.is_finite() && self.target_tick_rate > 0.0) {
            return Err(ConfigError::NonPositiveTickRate(self.target_tick_rate));
        }
        if self.target_tick_rate < MIN_TICK_RATE {
            return Err(ConfigError::TickRateTooLow {
                rate: self.target_tick_rate,
                min: MIN_TICK_RATE,
            });
        }
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.border >= 0.0) {
            return Err(ConfigError::NegativeBorder(self.border));
        }
        Ok(())
    }

    /// Length of the explosion animation in ticks
    pub fn explosion_ticks(&self) -> u32 {
        ((2.0 * self.target_tick_rate).round() as u32).max(1)
    }

    /// Explosion step at which Large and Medium rocks fracture
    pub fn child_spawn_step(&self) -> u32 {
        ((self.target_tick_rate / 4.0).floor() as u32).max(1)
    }

    /// Converts a per-second rate into a per-tick one
    #[inline]
    pub fn per_tick(&self, per_second: f32) -> f32 {
        per_second / self.target_tick_rate
    }
}
