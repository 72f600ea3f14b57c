//! Scene geometry for a rendering backend
//!
//! Reads the simulation state and produces a triangle list in screen pixels.
//! Never mutates simulation state.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, rgba};

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// Build the frame: background, platforms, rewind trail (while rewinding), player
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let display = &settings.display;
    let mut vertices = Vec::new();

    let screen = Rect::new(0.0, 0.0, display.width as f32, display.height as f32);
    vertices.extend_from_slice(&shapes::rect(&screen, rgba(display.background_color, 1.0)));

    for platform in state.level.platforms.iter() {
        vertices.extend_from_slice(&shapes::rect(&platform.rect, rgba(platform.color, 1.0)));
    }

    let player = &state.player;
    if player.is_rewinding {
        let samples: Vec<Vec2> = player.history.recent(settings.history.trail_length).collect();
        vertices.extend(shapes::rewind_trail(
            &samples,
            player.rect.size,
            display.player_color,
            settings.history.trail_max_alpha,
        ));
    }

    vertices.extend_from_slice(&shapes::rect(&player.rect, rgba(display.player_color, 1.0)));
    vertices
}
