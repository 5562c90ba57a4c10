//! Game rules trait for variant implementations.
//!
//! Variants implement `GameRules` to define:
//! - The deck shape (which tiles go on the board)
//! - How matches score and how mismatches are punished
//! - Whether mismatched tiles flip back at resolution or after a delay
//!
//! The engine calls into `GameRules` but never interprets
//! variant-specific concepts directly.

use crate::cards::{FaceValue, Tile};
use crate::core::{GameConfig, GameRng};

/// When mismatched tiles return to face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipBack {
    /// At resolution, together with the penalty.
    Immediate,
    /// One flip-back delay after resolution; the tiles stay face-up and
    /// unselectable in the interim.
    Deferred,
}

/// Rules trait.
///
/// Variants implement this trait to parameterize the engine. All methods
/// must be deterministic given their inputs so that a seeded game replays
/// identically.
pub trait GameRules {
    /// Get the timing configuration.
    fn config(&self) -> &GameConfig;

    /// Build the starting deck. Called once, at engine construction.
    fn build_deck(&self, rng: &mut GameRng) -> Vec<Tile>;

    /// Points awarded for matching `first` and `second`.
    ///
    /// `prior_combo` is the streak *before* this match is counted; the
    /// engine increments the combo after scoring. Variants that reward
    /// the new streak length use `prior_combo + 1`.
    fn match_points(&self, first: &FaceValue, second: &FaceValue, prior_combo: u32) -> i64;

    /// New score after a mismatch. Variants without a penalty return the
    /// score unchanged; penalized variants must floor at zero here.
    fn mismatch_score(&self, score: i64) -> i64;

    /// When mismatched tiles flip back down.
    fn flip_back(&self) -> FlipBack;

    /// Does this variant track a running high score?
    fn tracks_high_score(&self) -> bool {
        false
    }
}
