//! Level geometry
//!
//! A level is a list of `(width, height, x, y)` platform tuples. It is loaded
//! once at startup and turned into the platform registry the simulation uses.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::Settings;
use crate::sim::{Platform, PlatformId, PlatformRegistry, Rect};

/// Failure to load level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level has no platforms")]
    Empty,
    #[error("platform {index} has non-positive size {width}x{height}")]
    InvalidPlatform { index: usize, width: f32, height: f32 },
}

/// One platform as stored in level data: `[width, height, x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec(pub f32, pub f32, pub f32, pub f32);

impl PlatformSpec {
    pub fn rect(&self) -> Rect {
        let PlatformSpec(width, height, x, y) = *self;
        Rect::new(x, y, width, height)
    }
}

/// Serializable level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub platforms: Vec<PlatformSpec>,
}

impl LevelData {
    /// The built-in first level, laid out against a screen `screen_height` pixels tall
    pub fn level_01(screen_height: f32) -> Self {
        let h = screen_height;
        Self {
            name: "Level 01".to_string(),
            platforms: vec![
                PlatformSpec(500.0, 50.0, 0.0, h - 50.0),
                PlatformSpec(200.0, 50.0, 600.0, h - 180.0),
                PlatformSpec(250.0, 50.0, 900.0, h - 350.0),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let data: LevelData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        log::info!("Loaded level '{}' from {}", data.name, path.display());
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::Empty);
        }
        for (index, &PlatformSpec(width, height, _, _)) in self.platforms.iter().enumerate() {
            if !(width > 0.0 && height > 0.0) {
                return Err(LevelError::InvalidPlatform {
                    index,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

/// A playable level: owns the platform registry
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub platforms: PlatformRegistry,
}

impl Level {
    /// Build a level from validated data. Platform ids follow data order.
    pub fn from_data(data: &LevelData, settings: &Settings) -> Result<Self, LevelError> {
        data.validate()?;
        let level = Self::build(data, settings);
        log::info!("Level '{}' ready with {} platforms", level.name, level.platforms.len());
        Ok(level)
    }

    /// The built-in first level
    pub fn level_01(settings: &Settings) -> Self {
        Self::build(&LevelData::level_01(settings.display.height as f32), settings)
    }

    fn build(data: &LevelData, settings: &Settings) -> Self {
        let mut platforms = PlatformRegistry::new();
        for (i, spec) in data.platforms.iter().enumerate() {
            platforms.insert(Platform {
                id: PlatformId(i as u32),
                rect: spec.rect(),
                color: settings.display.platform_color,
            });
        }
        Self {
            name: data.name.clone(),
            platforms,
        }
    }

    /// Per-tick level state. Platforms are static, so there is nothing to advance.
    pub fn update(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_01_layout() {
        let level = Level::level_01(&Settings::default());
        assert_eq!(level.platforms.len(), 3);
        let ground = level.platforms.get(PlatformId(0)).unwrap();
        assert_eq!(ground.rect, Rect::new(0.0, 670.0, 500.0, 50.0));
        let top = level.platforms.get(PlatformId(2)).unwrap();
        assert_eq!(top.rect, Rect::new(900.0, 370.0, 250.0, 50.0));
    }

    #[test]
    fn test_from_data_matches_builtin() {
        let settings = Settings::default();
        let built = Level::from_data(&LevelData::level_01(720.0), &settings).unwrap();
        assert_eq!(built, Level::level_01(&settings));
    }

    #[test]
    fn test_json_tuples() {
        let data = LevelData::from_json(
            r#"{ "name": "tiny", "platforms": [[100, 20, 0, 700], [50, 20, 200, 600]] }"#,
        )
        .unwrap();
        assert_eq!(data.platforms[1], PlatformSpec(50.0, 20.0, 200.0, 600.0));
        assert_eq!(data.platforms[1].rect().left(), 200.0);
    }

    #[test]
    fn test_rejects_empty_and_degenerate() {
        assert!(matches!(
            LevelData::from_json(r#"{ "name": "none", "platforms": [] }"#),
            Err(LevelError::Empty)
        ));
        assert!(matches!(
            LevelData::from_json(r#"{ "name": "flat", "platforms": [[100, 0, 0, 0]] }"#),
            Err(LevelError::InvalidPlatform { index: 0, .. })
        ));
        let data = LevelData {
            name: "nan".to_string(),
            platforms: vec![PlatformSpec(f32::NAN, 20.0, 0.0, 0.0)],
        };
        assert!(matches!(
            data.validate(),
            Err(LevelError::InvalidPlatform { index: 0, .. })
        ));
    }
}
