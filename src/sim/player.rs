//! The player: movement intent, physics step and rewind

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::history::MotionHistory;
use super::platform::PlatformRegistry;
use super::rect::Rect;
use crate::settings::PhysicsTuning;

/// What a player update did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStep {
    /// Gravity, input and collision ran
    Moved,
    /// Teleported to the previous recorded position
    Rewound,
    /// Rewind requested with nothing left to replay; rewind switched off
    RewindExhausted,
}

/// Horizontal direction of a key, before control scrambling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player-controlled rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal velocity (pixels/tick)
    pub change_x: f32,
    /// Vertical velocity (pixels/tick, positive is down)
    pub change_y: f32,
    pub is_rewinding: bool,
    /// +1 normal, -1 inverted
    pub gravity_modifier: f32,
    pub controls_scrambled: bool,
    pub history: MotionHistory,
    tuning: PhysicsTuning,
}

impl Player {
    /// Player at rest with its top-left corner at `spawn`
    pub fn new(tuning: PhysicsTuning, spawn: Vec2, history_capacity: usize) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, tuning.player_width, tuning.player_height),
            change_x: 0.0,
            change_y: 0.0,
            is_rewinding: false,
            gravity_modifier: 1.0,
            controls_scrambled: false,
            history: MotionHistory::new(history_capacity),
            tuning,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    /// Horizontal velocity a key in `dir` produces under the current scramble state
    fn effective_sign(&self, dir: Direction) -> f32 {
        if self.controls_scrambled {
            -dir.sign()
        } else {
            dir.sign()
        }
    }

    /// Start moving in `dir` (reversed while controls are scrambled)
    pub fn go(&mut self, dir: Direction) {
        if self.is_rewinding {
            return;
        }
        self.change_x = self.effective_sign(dir) * self.tuning.move_speed;
    }

    pub fn go_left(&mut self) {
        self.go(Direction::Left);
    }

    pub fn go_right(&mut self) {
        self.go(Direction::Right);
    }

    pub fn stop(&mut self) {
        self.change_x = 0.0;
    }

    /// Key released: stop only if that key is what currently drives the motion,
    /// so releasing an earlier key does not cancel a later opposite press.
    pub fn release(&mut self, dir: Direction) {
        if self.change_x * self.effective_sign(dir) > 0.0 {
            self.stop();
        }
    }

    /// Jump if standing on a platform. Refused while rewinding or under
    /// inverted gravity. Returns whether the jump happened.
    pub fn jump(&mut self, platforms: &PlatformRegistry) -> bool {
        if self.is_rewinding || self.gravity_modifier <= 0.0 {
            return false;
        }
        if !self.on_ground(platforms) {
            return false;
        }
        self.change_y = self.tuning.jump_velocity;
        true
    }

    /// A platform lies within the probe distance below the player
    pub fn on_ground(&self, platforms: &PlatformRegistry) -> bool {
        let probe = self.rect.translated(Vec2::new(0.0, self.tuning.jump_probe));
        platforms.any_overlap(&probe)
    }

    pub fn start_rewind(&mut self) {
        self.is_rewinding = true;
    }

    pub fn stop_rewind(&mut self) {
        self.is_rewinding = false;
    }

    /// Gravity restarts at a unit step from rest instead of accumulating
    pub fn apply_gravity(&mut self) {
        if self.change_y == 0.0 {
            self.change_y = self.tuning.gravity_reentry * self.gravity_modifier;
        } else {
            self.change_y += self.tuning.gravity_step * self.gravity_modifier;
        }
    }

    /// Advance one tick: physics when playing, history replay when rewinding
    pub fn update(&mut self, platforms: &PlatformRegistry) -> PlayerStep {
        if self.is_rewinding {
            return self.rewind_step();
        }
        self.physics_step(platforms);
        PlayerStep::Moved
    }

    fn rewind_step(&mut self) -> PlayerStep {
        match self.history.pop_latest() {
            Some(pos) => {
                self.rect.pos = pos;
                PlayerStep::Rewound
            }
            None => {
                self.is_rewinding = false;
                PlayerStep::RewindExhausted
            }
        }
    }

    fn physics_step(&mut self, platforms: &PlatformRegistry) {
        self.apply_gravity();

        // Horizontal axis
        self.rect.pos.x += self.change_x;
        let rect = self.rect;
        for platform in platforms.overlapping(&rect) {
            if self.change_x > 0.0 {
                self.rect.set_right(platform.rect.left());
            } else if self.change_x < 0.0 {
                self.rect.set_left(platform.rect.right());
            }
        }

        // Vertical axis
        self.rect.pos.y += self.change_y;
        let rect = self.rect;
        for platform in platforms.overlapping(&rect) {
            if self.change_y > 0.0 {
                self.rect.set_bottom(platform.rect.top());
            } else if self.change_y < 0.0 {
                self.rect.set_top(platform.rect.bottom());
            }
            self.change_y = 0.0;
        }

        self.history.push(self.rect.pos);
    }
}
