//! Transition events recorded by the engine.
//!
//! Every observable state change appends an [`EventRecord`] to the
//! engine's history. Presentation layers consume the log to drive
//! animations; tests assert on it to verify transition order.

use serde::{Deserialize, Serialize};

use super::session::EndReason;
use crate::cards::TileId;

/// One observable engine transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile was selected and turned face-up.
    TileFlipped { tile: TileId },
    /// Two selected tiles matched and locked in, scoring `points`.
    PairMatched { tiles: [TileId; 2], points: i64 },
    /// Two selected tiles did not match.
    PairMissed { tiles: [TileId; 2] },
    /// A mismatched pair returned to face-down.
    FlippedBack { tiles: [TileId; 2] },
    /// The session was paused.
    Paused,
    /// The session resumed.
    Resumed,
    /// The session ended.
    Ended { reason: EndReason },
}

/// An event with its position in the session's transition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 0-based sequence number within the session.
    pub sequence: u32,
    /// The transition.
    pub event: GameEvent,
}
