//! Card system: face values and board tiles.
//!
//! ## Key Types
//!
//! - `Symbol`: the comparable face symbol — matching compares these
//! - `Suit` / `Rank`: playing-card metadata for suited decks
//! - `FaceValue`: "(symbol, optional suit)" as shown on a flipped tile
//! - `TileId`: tile identity, dense in `[0, deck_len)`
//! - `Tile`: one board position with flip/match state

pub mod face;
pub mod tile;

pub use face::{FaceValue, Rank, Suit, Symbol};
pub use tile::{Tile, TileId};
