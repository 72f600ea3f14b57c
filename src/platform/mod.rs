//! Platform abstraction layer
//!
//! Handles the pieces that touch the host rather than the simulation:
//! - Input: key names to gameplay actions
//! - Time: frame pacing

pub mod input;
pub mod time;

pub use input::{HostEvent, InputQueue, Key, action_for_key};
pub use time::FrameLimiter;
