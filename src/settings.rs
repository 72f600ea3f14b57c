//! Game tuning and display configuration
//!
//! Every tunable the simulation reads lives here. Settings are built once at
//! startup (defaults or a JSON file) and handed to the simulation by value;
//! nothing mutates them afterwards.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load or validate a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Player movement and collision tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Added to vertical velocity each airborne tick (scaled by gravity direction)
    pub gravity_step: f32,
    /// Vertical velocity assigned when velocity was exactly zero
    pub gravity_reentry: f32,
    /// Vertical velocity of a jump (negative is up)
    pub jump_velocity: f32,
    /// Horizontal speed magnitude
    pub move_speed: f32,
    /// Ground probe distance for jumping
    pub jump_probe: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Left edge of the player at spawn
    pub spawn_x: f32,
    /// Gap between the player's bottom edge and the bottom of the screen at spawn
    pub spawn_clearance: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity_step: GRAVITY_STEP,
            gravity_reentry: GRAVITY_REENTRY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            jump_probe: JUMP_PROBE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: PLAYER_SPAWN_X,
            spawn_clearance: PLAYER_SPAWN_CLEARANCE,
        }
    }
}

/// Motion history and rewind trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum recorded positions
    pub capacity: usize,
    /// Samples shown in the rewind trail
    pub trail_length: usize,
    /// Alpha of the newest trail sample
    pub trail_max_alpha: f32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: HISTORY_CAPACITY,
            trail_length: TRAIL_LENGTH,
            trail_max_alpha: TRAIL_MAX_ALPHA,
        }
    }
}

/// Glitch director timings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchTuning {
    /// Inclusive bounds of the idle period between glitches
    pub idle_min_ticks: u32,
    pub idle_max_ticks: u32,
    pub platform_flicker_ticks: u32,
    pub gravity_shift_ticks: u32,
    pub control_scramble_ticks: u32,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for GlitchTuning {
    fn default() -> Self {
        Self {
            idle_min_ticks: GLITCH_IDLE_MIN,
            idle_max_ticks: GLITCH_IDLE_MAX,
            platform_flicker_ticks: PLATFORM_FLICKER_TICKS,
            gravity_shift_ticks: GRAVITY_SHIFT_TICKS,
            control_scramble_ticks: CONTROL_SCRAMBLE_TICKS,
            seed: None,
        }
    }
}

/// Screen geometry, pacing and colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub width: u32,
    pub height: u32,
    /// Ticks (and frames) per second
    pub tick_rate: u32,
    pub player_color: [u8; 3],
    pub platform_color: [u8; 3],
    pub background_color: [u8; 3],
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            player_color: PLAYER_COLOR,
            platform_color: PLATFORM_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsTuning,
    pub history: HistorySettings,
    pub glitch: GlitchTuning,
    pub display: DisplaySettings,
}

impl Settings {
    /// Top-left corner of the player at spawn, measured from the configured screen bottom
    pub fn spawn_point(&self) -> Vec2 {
        let physics = &self.physics;
        let y = self.display.height as f32 - physics.player_height - physics.spawn_clearance;
        Vec2::new(physics.spawn_x, y)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
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

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Reject combinations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let glitch = &self.glitch;
        if glitch.idle_min_ticks > glitch.idle_max_ticks {
            return Err(SettingsError::Invalid(format!(
                "glitch idle range is empty ({} > {})",
                glitch.idle_min_ticks, glitch.idle_max_ticks
            )));
        }
        if glitch.idle_min_ticks == 0 {
            return Err(SettingsError::Invalid("glitch idle_min_ticks must be > 0".into()));
        }
        if glitch.platform_flicker_ticks == 0
            || glitch.gravity_shift_ticks == 0
            || glitch.control_scramble_ticks == 0
        {
            return Err(SettingsError::Invalid("glitch durations must be > 0".into()));
        }
        if self.history.capacity == 0 {
            return Err(SettingsError::Invalid("history capacity must be > 0".into()));
        }
        if self.display.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be > 0".into()));
        }
        let physics = &self.physics;
        if !(physics.player_width > 0.0 && physics.player_height > 0.0) {
            return Err(SettingsError::Invalid("player size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "glitch": { "seed": 7 } }"#).unwrap();
        assert_eq!(settings.glitch.seed, Some(7));
        assert_eq!(settings.glitch.gravity_shift_ticks, 180);
        assert_eq!(settings.physics.jump_velocity, -12.0);
        assert_eq!(settings.display.width, 1280);
    }

    #[test]
    fn test_inverted_idle_range_rejected() {
        let result =
            Settings::from_json(r#"{ "glitch": { "idle_min_ticks": 700, "idle_max_ticks": 600 } }"#);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_spawn_follows_screen_height() {
        assert_eq!(Settings::default().spawn_point(), Vec2::new(100.0, 570.0));
        let tall = Settings::from_json(r#"{ "display": { "height": 900 } }"#).unwrap();
        assert_eq!(tall.spawn_point(), Vec2::new(100.0, 750.0));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Some(Path::new("/nonexistent/settings.json")));
        assert_eq!(settings, Settings::default());
    }
}
