//! The emoji variant: 8 fruit faces, 16 tiles, flat penalty scoring.

use crate::cards::{FaceValue, Tile};
use crate::core::{GameConfig, GameRng};
use crate::deck::paired_deck;
use crate::rules::{FlipBack, GameRules};

/// Points for a match before the combo bonus.
const MATCH_BASE: i64 = 100;
/// Extra points per combo step held going into the match.
const COMBO_BONUS: i64 = 50;
/// Points lost on a mismatch, floored at a zero score.
const MISMATCH_PENALTY: i64 = 10;

/// Rules for the emoji-pair game.
///
/// Eight distinct emoji, each appearing twice. A match pays
/// `100 + combo × 50` using the streak held *before* the match; a
/// mismatch costs 10 points (never dropping below zero), resets the
/// streak, and flips the tiles back at resolution.
#[derive(Clone, Debug, Default)]
pub struct EmojiRules {
    config: GameConfig,
}

impl EmojiRules {
    /// The eight board faces.
    pub const FACES: [&'static str; 8] = ["🍎", "🍌", "🍇", "🍊", "🍓", "🍑", "🍍", "🥝"];

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
}

impl GameRules for EmojiRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn build_deck(&self, rng: &mut GameRng) -> Vec<Tile> {
        let faces: Vec<FaceValue> = Self::FACES.iter().map(|&f| FaceValue::plain(f)).collect();
        paired_deck(&faces, rng)
    }

    fn match_points(&self, _first: &FaceValue, _second: &FaceValue, prior_combo: u32) -> i64 {
        MATCH_BASE + i64::from(prior_combo) * COMBO_BONUS
    }

    fn mismatch_score(&self, score: i64) -> i64 {
        (score - MISMATCH_PENALTY).max(0)
    }

    fn flip_back(&self) -> FlipBack {
        FlipBack::Immediate
    }
}
