//! Tiles: one board position each, with identity and flip/match state.

use serde::{Deserialize, Serialize};

use super::face::FaceValue;

/// Unique identifier for a tile within one deck.
///
/// Deck generators assign ids densely in `[0, deck_len)`, so a `TileId`
/// doubles as an index into the engine's tile vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID as a vector index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// One tile on the board.
///
/// Tiles are created in bulk by a deck generator and mutated only by the
/// engine. A matched tile stays matched for the rest of the session and
/// is displayed face-up regardless of `face_up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Identity within the deck.
    pub id: TileId,
    /// The face value revealed when the tile is flipped.
    pub face: FaceValue,
    /// Is the tile currently showing its face?
    pub face_up: bool,
    /// Has the tile been permanently matched?
    pub matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile.
    #[must_use]
    pub fn new(id: TileId, face: FaceValue) -> Self {
        Self {
            id,
            face,
            face_up: false,
            matched: false,
        }
    }

    /// Can this tile be selected? Face-up and matched tiles cannot.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Is the tile's face visible (flipped up or locked in as matched)?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face_up || self.matched
    }
}
