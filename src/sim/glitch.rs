//! Glitch director
//!
//! A two-state timer. While `Idle` it counts ticks toward a randomly rolled
//! threshold; on reaching it one glitch starts and the director goes `Active`
//! until that glitch's duration runs out and its effect is reverted. Only one
//! glitch can be active at a time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platform::{Platform, PlatformRegistry};
use super::player::Player;
use crate::settings::GlitchTuning;

/// The kinds of world perturbation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlitchKind {
    /// One platform vanishes
    PlatformFlicker,
    /// Gravity points up
    GravityShift,
    /// Left and right swap
    ControlScramble,
}

impl GlitchKind {
    pub const ALL: [GlitchKind; 3] = [
        GlitchKind::PlatformFlicker,
        GlitchKind::GravityShift,
        GlitchKind::ControlScramble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlitchKind::PlatformFlicker => "platform flicker",
            GlitchKind::GravityShift => "gravity shift",
            GlitchKind::ControlScramble => "control scramble",
        }
    }

    /// Active duration in ticks
    pub fn duration(&self, tuning: &GlitchTuning) -> u32 {
        match self {
            GlitchKind::PlatformFlicker => tuning.platform_flicker_ticks,
            GlitchKind::GravityShift => tuning.gravity_shift_ticks,
            GlitchKind::ControlScramble => tuning.control_scramble_ticks,
        }
    }
}

/// A running glitch and whatever it needs to undo itself
#[derive(Debug, Clone, PartialEq)]
pub enum Glitch {
    /// `removed` is `None` when the registry was empty at trigger time;
    /// the glitch still runs its full duration.
    PlatformFlicker { removed: Option<Platform> },
    GravityShift,
    ControlScramble,
}

impl Glitch {
    pub fn kind(&self) -> GlitchKind {
        match self {
            Glitch::PlatformFlicker { .. } => GlitchKind::PlatformFlicker,
            Glitch::GravityShift => GlitchKind::GravityShift,
            Glitch::ControlScramble => GlitchKind::ControlScramble,
        }
    }
}

/// Director phase
#[derive(Debug, Clone, PartialEq)]
pub enum DirectorState {
    /// Counting toward the next glitch
    Idle { elapsed: u32 },
    /// One glitch running
    Active { glitch: Glitch, remaining: u32 },
}

/// Glitch lifecycle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlitchEvent {
    Started { kind: GlitchKind, duration: u32 },
    Ended { kind: GlitchKind },
}

/// Timer-driven state machine that applies and reverts glitches
#[derive(Debug, Clone)]
pub struct GlitchDirector {
    state: DirectorState,
    /// Idle ticks required before the next glitch
    threshold: u32,
    tuning: GlitchTuning,
    rng: Pcg32,
}

impl GlitchDirector {
    pub fn new(tuning: GlitchTuning, seed: u64) -> Self {
        let mut director = Self {
            state: DirectorState::Idle { elapsed: 0 },
            threshold: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        director.roll_threshold();
        director
    }

    pub fn state(&self) -> &DirectorState {
        &self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DirectorState::Idle { .. })
    }

    /// The running glitch, if any
    pub fn active(&self) -> Option<&Glitch> {
        match &self.state {
            DirectorState::Active { glitch, .. } => Some(glitch),
            DirectorState::Idle { .. } => None,
        }
    }

    /// Ticks left on the running glitch
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            DirectorState::Active { remaining, .. } => Some(remaining),
            DirectorState::Idle { .. } => None,
        }
    }

    fn roll_threshold(&mut self) {
        self.threshold = self
            .rng
            .random_range(self.tuning.idle_min_ticks..=self.tuning.idle_max_ticks);
        log::debug!("Next glitch in {} ticks", self.threshold);
    }

    fn roll_kind(&mut self) -> GlitchKind {
        GlitchKind::ALL[self.rng.random_range(0..GlitchKind::ALL.len())]
    }

    /// Advance one tick. Must not be called while the player is rewinding.
    pub fn step(
        &mut self,
        player: &mut Player,
        platforms: &mut PlatformRegistry,
    ) -> Option<GlitchEvent> {
        match &mut self.state {
            DirectorState::Idle { elapsed } => {
                *elapsed += 1;
                if *elapsed < self.threshold {
                    return None;
                }
                let kind = self.roll_kind();
                Some(self.start(kind, player, platforms))
            }
            DirectorState::Active { remaining, .. } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining > 0 {
                    return None;
                }
                self.finish(player, platforms)
            }
        }
    }

    /// Start `kind` immediately. Ignored while another glitch is active.
    pub fn trigger(
        &mut self,
        kind: GlitchKind,
        player: &mut Player,
        platforms: &mut PlatformRegistry,
    ) -> Option<GlitchEvent> {
        if !self.is_idle() {
            return None;
        }
        Some(self.start(kind, player, platforms))
    }

    fn start(
        &mut self,
        kind: GlitchKind,
        player: &mut Player,
        platforms: &mut PlatformRegistry,
    ) -> GlitchEvent {
        let glitch = match kind {
            GlitchKind::PlatformFlicker => {
                let removed = if platforms.is_empty() {
                    log::debug!("Platform flicker with no platforms to remove");
                    None
                } else {
                    let index = self.rng.random_range(0..platforms.len());
                    platforms.remove_at(index)
                };
                if let Some(platform) = &removed {
                    log::debug!("Removed platform {:?}", platform.id);
                }
                Glitch::PlatformFlicker { removed }
            }
            GlitchKind::GravityShift => {
                player.gravity_modifier = -1.0;
                Glitch::GravityShift
            }
            GlitchKind::ControlScramble => {
                player.controls_scrambled = true;
                Glitch::ControlScramble
            }
        };

        let duration = kind.duration(&self.tuning);
        log::info!("Glitch started: {} ({} ticks)", kind.as_str(), duration);
        self.state = DirectorState::Active {
            glitch,
            remaining: duration,
        };
        self.roll_threshold();
        GlitchEvent::Started { kind, duration }
    }

    fn finish(
        &mut self,
        player: &mut Player,
        platforms: &mut PlatformRegistry,
    ) -> Option<GlitchEvent> {
        let DirectorState::Active { glitch, .. } =
            std::mem::replace(&mut self.state, DirectorState::Idle { elapsed: 0 })
        else {
            return None;
        };

        match &glitch {
            Glitch::PlatformFlicker { removed } => {
                if let Some(platform) = removed {
                    log::debug!("Restored platform {:?}", platform.id);
                    platforms.insert(*platform);
                }
            }
            Glitch::GravityShift => player.gravity_modifier = 1.0,
            Glitch::ControlScramble => player.controls_scrambled = false,
        }

        let kind = glitch.kind();
        log::info!("Glitch ended: {}", kind.as_str());
        self.roll_threshold();
        Some(GlitchEvent::Ended { kind })
    }
}
