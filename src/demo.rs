//! Demo autopilot
//!
//! Plays the game without a keyboard so the headless binary exercises every
//! subsystem: it runs back and forth, jumps at ledges and walls, periodically holds
//! rewind, and rewinds whenever it falls off the bottom of the screen.

use glam::Vec2;

use crate::platform::{HostEvent, Key};
use crate::settings::Settings;
use crate::sim::{Direction, GameState};

/// Ticks between voluntary rewinds
const REWIND_EVERY: u64 = 600;
/// Ticks a voluntary rewind is held
const REWIND_HOLD: u32 = 90;
/// Turn around this close to the screen edges
const EDGE_MARGIN: f32 = 60.0;
/// How far ahead (in ticks of horizontal motion) to look for a ledge
const LOOKAHEAD_TICKS: f32 = 8.0;

fn key(dir: Direction) -> Key {
    match dir {
        Direction::Left => Key::ArrowLeft,
        Direction::Right => Key::ArrowRight,
    }
}

/// Scripted keyboard
#[derive(Debug, Clone)]
pub struct DemoPilot {
    heading: Option<Direction>,
    last_x: f32,
    /// Ticks left on the current rewind hold
    rewind_left: u32,
    ticks: u64,
    screen_width: f32,
    screen_height: f32,
    rescue_hold: u32,
}

impl DemoPilot {
    pub fn new(settings: &Settings) -> Self {
        Self {
            heading: None,
            last_x: settings.physics.spawn_x,
            rewind_left: 0,
            ticks: 0,
            screen_width: settings.display.width as f32,
            screen_height: settings.display.height as f32,
            rescue_hold: settings.history.capacity as u32,
        }
    }

    /// Key presses and releases for this tick, decided from the current state
    pub fn next_events(&mut self, state: &GameState) -> Vec<HostEvent> {
        self.ticks += 1;
        let mut events = Vec::new();
        let player = &state.player;

        if self.rewind_left > 0 {
            self.rewind_left -= 1;
            if self.rewind_left == 0 || !player.is_rewinding {
                self.rewind_left = 0;
                events.push(HostEvent::KeyUp(Key::R));
            }
            return events;
        }

        let fell_off = player.rect.top() > self.screen_height || player.rect.bottom() < 0.0;
        if fell_off || self.ticks % REWIND_EVERY == 0 {
            self.rewind_left = if fell_off { self.rescue_hold } else { REWIND_HOLD };
            log::debug!("Demo pilot rewinding (fell off: {fell_off})");
            events.push(HostEvent::KeyDown(Key::R));
            return events;
        }

        let x = player.pos().x;
        let desired = if x > self.screen_width - EDGE_MARGIN - player.rect.size.x {
            Direction::Left
        } else if x < EDGE_MARGIN {
            Direction::Right
        } else {
            self.heading.unwrap_or(Direction::Right)
        };
        // Re-press after a rewind may have left the player standing still
        if self.heading != Some(desired) || player.change_x == 0.0 {
            if let Some(old) = self.heading.filter(|old| *old != desired) {
                events.push(HostEvent::KeyUp(key(old)));
            }
            events.push(HostEvent::KeyDown(key(desired)));
            self.heading = Some(desired);
        }

        let platforms = &state.level.platforms;
        let blocked = (x - self.last_x).abs() < 0.5;
        let ahead = player
            .rect
            .translated(Vec2::new(player.change_x * LOOKAHEAD_TICKS, player.tuning().jump_probe));
        let edge_ahead = !platforms.any_overlap(&ahead);
        if player.on_ground(platforms) && (blocked || edge_ahead) {
            events.push(HostEvent::KeyDown(Key::Space));
        }
        self.last_x = x;

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputQueue;
    use crate::sim::{GameEvent, tick};

    #[test]
    fn test_pilot_moves_and_rewinds() {
        let settings = Settings::default();
        let mut state = GameState::with_seed(2024);
        let mut pilot = DemoPilot::new(&settings);
        let mut queue = InputQueue::new();

        let mut rewinds = 0;
        let mut jumps = 0;
        for _ in 0..1200 {
            for event in pilot.next_events(&state) {
                queue.push(event);
            }
            let input = queue.drain();
            for event in tick(&mut state, &input) {
                match event {
                    GameEvent::RewindStarted => rewinds += 1,
                    GameEvent::Jumped => jumps += 1,
                    _ => {}
                }
            }
        }
        assert!(rewinds >= 2);
        assert!(jumps > 0);
    }
}
