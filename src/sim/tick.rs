//! Fixed timestep simulation tick
//!
//! Per-tick order: input events, glitch director (skipped while rewinding),
//! player, level.

use serde::{Deserialize, Serialize};

use super::glitch::{GlitchEvent, GlitchKind};
use super::player::{Direction, PlayerStep};
use super::state::GameState;

/// Gameplay actions an input device can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Jump,
    Rewind,
}

/// Edge-triggered input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Press/release events since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Start this glitch now if none is running (debug/testing)
    pub force_glitch: Option<GlitchKind>,
}

impl TickInput {
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            force_glitch: None,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    RewindStarted,
    /// Rewind input released
    RewindStopped,
    /// History ran out while rewinding
    RewindExhausted,
    Glitch(GlitchEvent),
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    for event in &input.events {
        apply_input(state, *event, &mut events);
    }

    // Rewinding freezes glitch progression entirely
    if !state.player.is_rewinding {
        let mut glitch_event = None;
        if let Some(kind) = input.force_glitch {
            glitch_event =
                state
                    .director
                    .trigger(kind, &mut state.player, &mut state.level.platforms);
        }
        if glitch_event.is_none() {
            glitch_event = state
                .director
                .step(&mut state.player, &mut state.level.platforms);
        }
        if let Some(event) = glitch_event {
            events.push(GameEvent::Glitch(event));
        }
    }

    if state.player.update(&state.level.platforms) == PlayerStep::RewindExhausted {
        log::info!("Rewind exhausted at tick {}", state.time_ticks);
        events.push(GameEvent::RewindExhausted);
    }

    state.level.update();

    events
}

fn apply_input(state: &mut GameState, event: InputEvent, events: &mut Vec<GameEvent>) {
    let player = &mut state.player;
    match event {
        InputEvent::Pressed(Action::Left) => player.go(Direction::Left),
        InputEvent::Pressed(Action::Right) => player.go(Direction::Right),
        InputEvent::Released(Action::Left) => player.release(Direction::Left),
        InputEvent::Released(Action::Right) => player.release(Direction::Right),
        InputEvent::Pressed(Action::Jump) => {
            if player.jump(&state.level.platforms) {
                events.push(GameEvent::Jumped);
            }
        }
        InputEvent::Released(Action::Jump) => {}
        InputEvent::Pressed(Action::Rewind) => {
            if !player.is_rewinding {
                log::info!("Rewind started ({} samples)", player.history.len());
                player.start_rewind();
                events.push(GameEvent::RewindStarted);
            }
        }
        InputEvent::Released(Action::Rewind) => {
            if player.is_rewinding {
                player.stop_rewind();
                events.push(GameEvent::RewindStopped);
            }
        }
    }
}
