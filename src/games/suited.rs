//! The suited variant: a full 52-card deck pairing by rank.

use crate::cards::{FaceValue, Tile};
use crate::core::{GameConfig, GameRng};
use crate::deck::standard_deck;
use crate::rules::{FlipBack, GameRules};

/// Points for a match before bonuses.
const MATCH_BASE: i64 = 100;
/// Extra points when both cards share a suit.
const SUIT_BONUS: i64 = 50;

/// Rules for the playing-card game.
///
/// All 52 cards are dealt; any two cards of the same rank pair, with a
/// 50-point bonus when the suits also agree. Rewards scale with the new
/// streak length — ×1, ×1.2, ×1.5, then ×2 from the fourth consecutive
/// match — and the result is floored to an integer. Mismatches carry no
/// penalty (the streak just resets), the flip-back is deferred by one
/// tick, and a running high score is tracked.
#[derive(Clone, Debug, Default)]
pub struct SuitedRules {
    config: GameConfig,
}

impl SuitedRules {
    /// Rules with the standard 3-minute countdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules over a custom timing configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Reward multiplier for a streak of `streak` consecutive matches.
    #[must_use]
    fn combo_multiplier(streak: u32) -> f64 {
        match streak {
            0 | 1 => 1.0,
            2 => 1.2,
            3 => 1.5,
            _ => 2.0,
        }
    }
}

impl GameRules for SuitedRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn build_deck(&self, rng: &mut GameRng) -> Vec<Tile> {
        standard_deck(rng)
    }

    fn match_points(&self, first: &FaceValue, second: &FaceValue, prior_combo: u32) -> i64 {
        let base = MATCH_BASE + if first.same_suit(second) { SUIT_BONUS } else { 0 };
        let multiplier = Self::combo_multiplier(prior_combo + 1);
        (base as f64 * multiplier).floor() as i64
    }

    fn mismatch_score(&self, score: i64) -> i64 {
        score
    }

    fn flip_back(&self) -> FlipBack {
        FlipBack::Deferred
    }

    fn tracks_high_score(&self) -> bool {
        true
    }
}
