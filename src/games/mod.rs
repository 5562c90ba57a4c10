//! Shipped game variants.
//!
//! Both games run on the same [`MatchEngine`](crate::engine::MatchEngine);
//! they differ only in deck shape and scoring policy:
//!
//! - [`EmojiRules`]: 8 emoji pairs, flat combo bonus, 10-point mismatch
//!   penalty floored at zero
//! - [`SuitedRules`]: 52 playing cards pairing by rank, same-suit bonus,
//!   streak multipliers, deferred flip-back, tracked high score

pub mod emoji;
pub mod suited;

pub use emoji::EmojiRules;
pub use suited::SuitedRules;

use crate::engine::MatchEngine;

/// The emoji-pair game.
pub type EmojiGame = MatchEngine<EmojiRules>;

/// The playing-card game.
pub type SuitedGame = MatchEngine<SuitedRules>;
