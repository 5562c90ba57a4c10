//! Deck generation.
//!
//! Two generators cover the shipped variants:
//!
//! - [`paired_deck`]: N distinct face values duplicated into 2N tiles —
//!   the emoji game's board
//! - [`standard_deck`]: all 52 rank×suit playing cards, pairing by rank —
//!   the suited game's board
//!
//! Both shuffle with the unbiased Fisher–Yates in [`GameRng`], so every
//! ordering is equally likely and a seed reproduces its deck exactly.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::{FaceValue, Rank, Suit, Symbol, Tile, TileId};
use crate::core::GameRng;

/// Build a shuffled deck containing each of the given face values
/// exactly twice.
///
/// Produces `2N` face-down tiles with ids dense in `[0, 2N)`. Pure in
/// the inputs: the same faces and RNG state always yield the same deck.
///
/// Panics if the face values are not distinct.
#[must_use]
pub fn paired_deck(faces: &[FaceValue], rng: &mut GameRng) -> Vec<Tile> {
    let distinct: FxHashSet<&Symbol> = faces.iter().map(|f| &f.symbol).collect();
    assert!(
        distinct.len() == faces.len(),
        "Paired decks require distinct face values"
    );

    let mut values: Vec<FaceValue> = faces
        .iter()
        .flat_map(|face| [face.clone(), face.clone()])
        .collect();
    rng.shuffle(&mut values);

    assign_ids(values)
}

/// Build a shuffled 52-card deck, one tile per rank×suit combination.
///
/// Tiles pair by rank: with four of each rank on the board, the deck
/// holds 26 findable pairs.
#[must_use]
pub fn standard_deck(rng: &mut GameRng) -> Vec<Tile> {
    let mut values: Vec<FaceValue> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| FaceValue::suited(rank, suit)))
        .collect();
    rng.shuffle(&mut values);

    assign_ids(values)
}

/// Tally how many tiles carry each symbol.
#[must_use]
pub fn face_counts(tiles: &[Tile]) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for tile in tiles {
        *counts.entry(tile.face.symbol.clone()).or_insert(0) += 1;
    }
    counts
}

fn assign_ids(values: Vec<FaceValue>) -> Vec<Tile> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, face)| Tile::new(TileId::new(index as u32), face))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faces(n: usize) -> Vec<FaceValue> {
        (0..n).map(|i| FaceValue::plain(format!("face-{i}"))).collect()
    }

    #[test]
    fn test_paired_deck_shape() {
        let faces = sample_faces(8);
        let deck = paired_deck(&faces, &mut GameRng::new(42));

        assert_eq!(deck.len(), 16);
        for (count, tile) in deck.iter().enumerate() {
            assert_eq!(tile.id, TileId::new(count as u32));
            assert!(!tile.face_up);
            assert!(!tile.matched);
        }
    }

    #[test]
    fn test_paired_deck_each_value_twice() {
        let faces = sample_faces(8);
        let deck = paired_deck(&faces, &mut GameRng::new(42));
        let counts = face_counts(&deck);

        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&count| count == 2));
    }

    #[test]
    fn test_paired_deck_seed_reproducible() {
        let faces = sample_faces(8);
        let a = paired_deck(&faces, &mut GameRng::new(7));
        let b = paired_deck(&faces, &mut GameRng::new(7));
        assert_eq!(a, b);

        let c = paired_deck(&faces, &mut GameRng::new(8));
        assert_ne!(a, c);
    }

    #[test]
    #[should_panic(expected = "distinct face values")]
    fn test_paired_deck_rejects_duplicates() {
        let faces = vec![FaceValue::plain("🍎"), FaceValue::plain("🍎")];
        paired_deck(&faces, &mut GameRng::new(0));
    }

    #[test]
    fn test_standard_deck_shape() {
        let deck = standard_deck(&mut GameRng::new(42));
        assert_eq!(deck.len(), 52);

        let ids: FxHashSet<TileId> = deck.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_standard_deck_four_of_each_rank() {
        let deck = standard_deck(&mut GameRng::new(42));
        let counts = face_counts(&deck);

        assert_eq!(counts.len(), 13);
        assert!(counts.values().all(|&count| count == 4));
    }

    #[test]
    fn test_standard_deck_unique_faces() {
        let deck = standard_deck(&mut GameRng::new(42));
        let faces: FxHashSet<(String, Suit)> = deck
            .iter()
            .map(|t| (t.face.symbol.as_str().to_owned(), t.face.suit.unwrap()))
            .collect();
        assert_eq!(faces.len(), 52);
    }
}
