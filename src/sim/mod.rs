//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms sorted by id)
//! - No rendering or platform dependencies

pub mod glitch;
pub mod history;
pub mod platform;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use glitch::{DirectorState, Glitch, GlitchDirector, GlitchEvent, GlitchKind};
pub use history::MotionHistory;
pub use platform::{Platform, PlatformId, PlatformRegistry};
pub use player::{Direction, Player, PlayerStep};
pub use rect::Rect;
pub use state::GameState;
pub use tick::{Action, GameEvent, InputEvent, TickInput, tick};
