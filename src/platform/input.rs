//! Keyboard mapping and per-tick event queueing
//!
//! The host delivers raw key presses and releases. They are translated to
//! gameplay [`InputEvent`]s and drained once per tick, before the step runs.

use serde::{Deserialize, Serialize};

use crate::sim::{Action, InputEvent, TickInput};

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    A,
    D,
    W,
    R,
    Space,
    Shift,
    Escape,
}

/// Gameplay action bound to a key. Escape is not an action (see [`HostEvent::Quit`]).
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::ArrowLeft | Key::A => Some(Action::Left),
        Key::ArrowRight | Key::D => Some(Action::Right),
        Key::ArrowUp | Key::W | Key::Space => Some(Action::Jump),
        Key::R | Key::Shift => Some(Action::Rewind),
        Key::Escape => None,
    }
}

/// Raw events from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Collects host events between ticks
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
    quit: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        match event {
            HostEvent::KeyDown(Key::Escape) | HostEvent::Quit => self.quit = true,
            HostEvent::KeyDown(key) => {
                if let Some(action) = action_for_key(key) {
                    self.events.push(InputEvent::Pressed(action));
                }
            }
            HostEvent::KeyUp(key) => {
                if let Some(action) = action_for_key(key) {
                    self.events.push(InputEvent::Released(action));
                }
            }
        }
    }

    /// A quit was requested
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Take everything queued since the last tick
    pub fn drain(&mut self) -> TickInput {
        TickInput::from_events(self.events.drain(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(action_for_key(Key::A), Some(Action::Left));
        assert_eq!(action_for_key(Key::ArrowRight), Some(Action::Right));
        assert_eq!(action_for_key(Key::Space), Some(Action::Jump));
        assert_eq!(action_for_key(Key::R), Some(Action::Rewind));
        assert_eq!(action_for_key(Key::Escape), None);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = InputQueue::new();
        queue.push(HostEvent::KeyDown(Key::D));
        queue.push(HostEvent::KeyUp(Key::D));
        queue.push(HostEvent::KeyDown(Key::W));

        let input = queue.drain();
        assert_eq!(
            input.events,
            vec![
                InputEvent::Pressed(Action::Right),
                InputEvent::Released(Action::Right),
                InputEvent::Pressed(Action::Jump),
            ]
        );
        assert!(queue.drain().events.is_empty());
        assert!(!queue.should_quit());

        queue.push(HostEvent::KeyDown(Key::Escape));
        assert!(queue.should_quit());
    }
}
