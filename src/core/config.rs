//! Engine timing configuration.
//!
//! A game variant configures the engine at startup by providing:
//! - The initial countdown length in seconds
//! - The delay between the second selection and its resolution
//! - The delay before mismatched tiles flip back down (deferred variants)
//!
//! All delays are measured in [`Ticks`] on the engine's virtual clock —
//! the engine never reads a wall clock.

use serde::{Deserialize, Serialize};

/// A duration on the virtual clock. One tick corresponds to one second
/// of the countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Create a duration of `n` ticks.
    #[must_use]
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// Get the raw tick count.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Ticks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

/// Complete engine timing configuration.
///
/// Variants provide this at startup. Defaults match the shipped games:
/// a 3-minute countdown and one-tick resolution and flip-back delays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Countdown length at game start, in seconds.
    pub initial_seconds: u32,

    /// Delay between the second selection and the match resolution.
    pub resolve_delay: Ticks,

    /// Delay before a mismatched pair flips back face-down, for variants
    /// that defer the flip-back instead of applying it at resolution.
    pub flip_back_delay: Ticks,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(180)
    }
}

impl GameConfig {
    /// Create a configuration with the given countdown length and
    /// one-tick resolution and flip-back delays.
    #[must_use]
    pub fn new(initial_seconds: u32) -> Self {
        assert!(initial_seconds > 0, "Countdown must be at least 1 second");

        Self {
            initial_seconds,
            resolve_delay: Ticks::new(1),
            flip_back_delay: Ticks::new(1),
        }
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Ticks) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Ticks) -> Self {
        self.flip_back_delay = delay;
        self
    }
}
