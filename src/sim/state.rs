//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here.

use crate::level::Level;
use crate::settings::{Settings, SettingsError};

use super::glitch::GlitchDirector;
use super::player::Player;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Level geometry (owns the platform registry)
    pub level: Level,
    pub director: GlitchDirector,
}

impl GameState {
    /// Create a new game state. `seed` drives the glitch director.
    pub fn new(settings: &Settings, level: Level, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::build(settings, level, seed))
    }

    /// Default settings on the built-in level
    pub fn with_seed(seed: u64) -> Self {
        let settings = Settings::default();
        let level = Level::level_01(&settings);
        Self::build(&settings, level, seed)
    }

    fn build(settings: &Settings, level: Level, seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            player: Player::new(
                settings.physics,
                settings.spawn_point(),
                settings.history.capacity,
            ),
            level,
            director: GlitchDirector::new(settings.glitch, seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.glitch.idle_min_ticks = 700;
        settings.glitch.idle_max_ticks = 600;
        let level = Level::level_01(&settings);
        assert!(matches!(
            GameState::new(&settings, level, 1),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_spawn_and_ground_follow_screen_height() {
        let mut settings = Settings::default();
        settings.display.height = 900;
        let level = Level::level_01(&settings);
        let mut state = GameState::new(&settings, level, 1).unwrap();
        assert_eq!(state.player.pos().y, 750.0);

        for _ in 0..30 {
            crate::sim::tick(&mut state, &Default::default());
        }
        assert_eq!(state.player.rect.bottom(), 850.0);
    }
}
