//! Frame pacing
//!
//! One simulation tick runs per frame. The limiter sleeps out whatever is left
//! of the frame budget; a slow frame simply runs late, it is not made up.

use std::time::{Duration, Instant};

pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frame: frame_budget(frames_per_second),
            last: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame
    }

    /// Sleep until the current frame's budget is used up, then start the next frame
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.frame.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Duration of one frame at `frames_per_second` (zero treated as one)
pub fn frame_budget(frames_per_second: u32) -> Duration {
    Duration::from_secs(1) / frames_per_second.max(1)
}
