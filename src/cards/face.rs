//! Face values: the comparable symbol on a tile, with an optional suit.
//!
//! Two tiles match when their symbols are equal. The suit never affects
//! whether tiles match — it only feeds the suited variant's same-suit
//! bonus and the red/black presentation hint.

use serde::{Deserialize, Serialize};

/// The comparable symbol on a tile face: an emoji glyph for the emoji
/// game, a rank symbol (`"A"`, `"7"`, `"K"`) for the suited game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Playing-card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// The suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    /// Hearts and diamonds render red, spades and clubs black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Playing-card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The rank symbol as printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A tile's face: a symbol plus an optional suit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceValue {
    /// The comparable symbol.
    pub symbol: Symbol,
    /// The suit, present only in suited decks.
    pub suit: Option<Suit>,
}

impl FaceValue {
    /// A suitless face (emoji decks).
    pub fn plain(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            suit: None,
        }
    }

    /// A playing-card face.
    #[must_use]
    pub fn suited(rank: Rank, suit: Suit) -> Self {
        Self {
            symbol: Symbol::new(rank.symbol()),
            suit: Some(suit),
        }
    }

    /// Do two faces form a pair? Symbols decide; suits never do.
    #[must_use]
    pub fn matches(&self, other: &FaceValue) -> bool {
        self.symbol == other.symbol
    }

    /// Are both faces suited and of the same suit?
    #[must_use]
    pub fn same_suit(&self, other: &FaceValue) -> bool {
        match (self.suit, other.suit) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.symbol, suit),
            None => write!(f, "{}", self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_equality() {
        assert_eq!(Symbol::new("A"), Symbol::new("A"));
        assert_ne!(Symbol::new("A"), Symbol::new("K"));
        assert_eq!(Symbol::new("🍎").as_str(), "🍎");
    }

    #[test]
    fn test_suit_glyphs() {
        assert_eq!(Suit::Hearts.glyph(), '♥');
        assert_eq!(Suit::Diamonds.glyph(), '♦');
        assert_eq!(Suit::Spades.glyph(), '♠');
        assert_eq!(Suit::Clubs.glyph(), '♣');
    }

    #[test]
    fn test_suit_color() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_rank_symbols() {
        assert_eq!(Rank::Ace.symbol(), "A");
        assert_eq!(Rank::Ten.symbol(), "10");
        assert_eq!(Rank::King.symbol(), "K");
        assert_eq!(Rank::ALL.len(), 13);
    }

    #[test]
    fn test_matches_ignores_suit() {
        let a = FaceValue::suited(Rank::Queen, Suit::Hearts);
        let b = FaceValue::suited(Rank::Queen, Suit::Spades);
        let c = FaceValue::suited(Rank::King, Suit::Hearts);

        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_same_suit() {
        let a = FaceValue::suited(Rank::Two, Suit::Clubs);
        let b = FaceValue::suited(Rank::Nine, Suit::Clubs);
        let c = FaceValue::suited(Rank::Nine, Suit::Hearts);
        let plain = FaceValue::plain("🍇");

        assert!(a.same_suit(&b));
        assert!(!a.same_suit(&c));
        assert!(!a.same_suit(&plain));
        assert!(!plain.same_suit(&plain));
    }

    #[test]
    fn test_plain_faces_match_by_glyph() {
        let a = FaceValue::plain("🍎");
        let b = FaceValue::plain("🍎");
        let c = FaceValue::plain("🍌");

        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FaceValue::suited(Rank::Ace, Suit::Hearts)), "A♥");
        assert_eq!(format!("{}", FaceValue::plain("🍓")), "🍓");
    }

    #[test]
    fn test_face_serde() {
        let face = FaceValue::suited(Rank::Ten, Suit::Diamonds);
        let json = serde_json::to_string(&face).unwrap();
        let back: FaceValue = serde_json::from_str(&json).unwrap();
        assert_eq!(face, back);
    }
}
