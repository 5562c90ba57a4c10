//! # pairmatch
//!
//! A deterministic memory-matching game engine with pluggable decks and
//! scoring policies.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: No hardcoded deck shapes, rewards, or
//!    penalties. Game variants configure these via the `GameRules` trait.
//!
//! 2. **Virtual Time**: The countdown and the post-selection resolution
//!    delay run on a tick-driven clock the embedding advances. No wall
//!    clock, no real waits in tests.
//!
//! 3. **Permissive Input**: Selecting a locked, face-up, or unknown tile
//!    — or acting while paused or ended — is a silent no-op, never an
//!    error. The UI stays simple; the engine stays consistent.
//!
//! ## Architecture
//!
//! - **Single Mutation Point**: One `MatchEngine` value owns the deck,
//!   selection buffer, session counters, and timer queue. All transitions
//!   are serialized through its three operations: `select_tile`, `tick`,
//!   and `toggle_pause`.
//!
//! - **Seeded Shuffles**: Deck order is a pure function of the seed, so
//!   any game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, session state, transition events
//! - `cards`: Face values, suits, ranks, tiles
//! - `deck`: Deck generators (paired and standard 52-card)
//! - `clock`: Virtual clock with a cancelable pending-task queue
//! - `rules`: `GameRules` trait for variant implementations
//! - `engine`: The matching state machine
//! - `games`: The shipped emoji and suited variants
//!
//! ## Example
//!
//! ```
//! use pairmatch::games::{EmojiGame, EmojiRules};
//!
//! let mut game = EmojiGame::new(EmojiRules::new(), 42);
//!
//! // Flip the first two tiles and let the scheduled resolution fire on
//! // the next second.
//! let (a, b) = (game.tiles()[0].id, game.tiles()[1].id);
//! game.select_tile(a);
//! game.select_tile(b);
//! game.tick();
//!
//! assert_eq!(game.clock(), "2:59");
//! ```

pub mod cards;
pub mod clock;
pub mod core;
pub mod deck;
pub mod engine;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    format_clock, EndReason, EventRecord, GameConfig, GameEvent, GameRng, GameStatus,
    SessionState, Ticks,
};

pub use crate::cards::{FaceValue, Rank, Suit, Symbol, Tile, TileId};

pub use crate::clock::{TimerId, TimerQueue};

pub use crate::deck::{face_counts, paired_deck, standard_deck};

pub use crate::rules::{FlipBack, GameRules};

pub use crate::engine::MatchEngine;

pub use crate::games::{EmojiGame, EmojiRules, SuitedGame, SuitedRules};
