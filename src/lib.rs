//! Chrono-Glitch - a 2D platformer prototype with rewind and world glitches
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, rewind, glitch director)
//! - `level`: Level data and the platform registry it owns
//! - `renderer`: CPU-side scene geometry for a rendering backend
//! - `platform`: Input mapping and frame pacing
//! - `settings`: Data-driven tuning and display configuration
//! - `demo`: Scripted autopilot that drives the headless binary

pub mod demo;
pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use level::{Level, LevelData, LevelError};
pub use settings::{Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: u32 = 1280;
    pub const SCREEN_HEIGHT: u32 = 720;

    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Spawn: left edge of the player box, and the gap below it to the screen bottom
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_CLEARANCE: f32 = 100.0;

    /// Added to vertical velocity every airborne tick
    pub const GRAVITY_STEP: f32 = 0.45;
    /// Vertical velocity assigned when falling starts from rest
    pub const GRAVITY_REENTRY: f32 = 1.0;
    /// Vertical velocity set by a successful jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Horizontal speed while a direction key is held
    pub const MOVE_SPEED: f32 = 6.0;
    /// How far below the player the jump check looks for ground
    pub const JUMP_PROBE: f32 = 2.0;

    /// Motion history capacity (5 seconds at 60 Hz)
    pub const HISTORY_CAPACITY: usize = 300;
    /// Samples drawn in the rewind trail
    pub const TRAIL_LENGTH: usize = 50;
    /// Alpha of the newest trail sample
    pub const TRAIL_MAX_ALPHA: f32 = 0.6;

    /// Idle ticks between glitches, drawn uniformly from this inclusive range
    pub const GLITCH_IDLE_MIN: u32 = 300;
    pub const GLITCH_IDLE_MAX: u32 = 600;
    /// Glitch durations in ticks
    pub const PLATFORM_FLICKER_TICKS: u32 = 120;
    pub const GRAVITY_SHIFT_TICKS: u32 = 180;
    pub const CONTROL_SCRAMBLE_TICKS: u32 = 240;

    /// Colors (RGB)
    pub const PLAYER_COLOR: [u8; 3] = [255, 0, 0];
    pub const PLATFORM_COLOR: [u8; 3] = [0, 255, 0];
    pub const BACKGROUND_COLOR: [u8; 3] = [20, 20, 40];
}
