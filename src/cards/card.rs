//! Cards: rank, suit, derived color and the pairwise placement predicates.
//!
//! ## Notation
//!
//! A card token is two characters, rank code then suit code:
//! - ranks `A 2 3 4 5 6 7 8 9 T J Q K` (Ten is `T`)
//! - suits `D C H S`
//!
//! ```
//! use freecell_engine::cards::{Card, Rank, Suit};
//!
//! let card: Card = "TH".parse().unwrap();
//! assert_eq!(card.rank(), Rank::Ten);
//! assert_eq!(card.suit(), Suit::Hearts);
//! assert_eq!(card.to_string(), "TH");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCardError;

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
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

const RANK_CODES: &str = "A23456789TJQK";

impl Rank {
    /// All ranks, Ace to King.
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

    /// Numeric value, 1 (Ace) to 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given numeric value, if in `1..=13`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The next rank up, `None` above King.
    #[must_use]
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// The next rank down, `None` below Ace.
    #[must_use]
    pub fn prev(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    /// Single-character notation code.
    #[must_use]
    pub fn code(self) -> char {
        RANK_CODES.as_bytes()[usize::from(self.value() - 1)] as char
    }

    /// Rank for a notation code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Rank> {
        RANK_CODES.find(code).map(|i| Rank::ALL[i])
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card suit. Odd discriminants are red, even are black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 1,
    Clubs = 2,
    Hearts = 3,
    Spades = 4,
}

const SUIT_CODES: &str = "DCHS";

impl Suit {
    /// All suits in deck generation order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Numeric value, 1 to 4.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Suit with the given numeric value, if in `1..=4`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Suit> {
        Suit::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    #[must_use]
    pub const fn color(self) -> Color {
        if self.value() % 2 == 1 {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// Single-character notation code.
    #[must_use]
    pub fn code(self) -> char {
        SUIT_CODES.as_bytes()[usize::from(self.value() - 1)] as char
    }

    /// Suit for a notation code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Suit> {
        SUIT_CODES.find(code).map(|i| Suit::ALL[i])
    }
}

/// A playing card.
///
/// Identity is `(rank, suit)`: two cards compare equal regardless of which
/// way up they are. Ordering is by suit, then rank; use [`Card::cmp_rank`]
/// to order by rank alone.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Parse a two-character token such as `"AD"` or `"TH"`.
    pub fn parse(token: &str) -> Result<Self, ParseCardError> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(token.to_string()));
        };

        let rank = Rank::from_code(rank).ok_or(ParseCardError::Rank(rank))?;
        let suit = Suit::from_code(suit).ok_or(ParseCardError::Suit(suit))?;
        Ok(Self::new(rank, suit))
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Turn the card face up if it is not already.
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Can this card go on a foundation whose top card is `top`?
    ///
    /// Same suit, exactly one rank higher.
    #[must_use]
    pub fn can_place_foundation(&self, top: &Card) -> bool {
        self.suit == top.suit && self.rank.value() == top.rank.value() + 1
    }

    /// Can this card go on a cascade whose top card is `top`?
    ///
    /// Opposite color, exactly one rank lower.
    #[must_use]
    pub fn can_place_cascade(&self, top: &Card) -> bool {
        self.color() != top.color() && self.rank.value() + 1 == top.rank.value()
    }

    /// Compare by rank only, ignoring suit.
    #[must_use]
    pub fn cmp_rank(a: &Card, b: &Card) -> Ordering {
        a.rank.cmp(&b.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit.cmp(&other.suit).then(self.rank.cmp(&other.rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}
