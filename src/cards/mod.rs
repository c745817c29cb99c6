//! Cards, textual notation and the deck.
//!
//! A pile's textual form is its cards bottom to top as space-separated
//! tokens, e.g. `"AD 2D JS"`.

mod card;
mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;

use crate::error::ParseCardError;

/// Parse space-separated card tokens, bottom to top.
///
/// ```
/// use freecell_engine::cards::parse_cards;
///
/// let cards = parse_cards("AD 2D  JS").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(parse_cards("").unwrap().is_empty());
/// ```
pub fn parse_cards(notation: &str) -> Result<Vec<Card>, ParseCardError> {
    notation.split_whitespace().map(Card::parse).collect()
}

/// Format cards as space-separated tokens.
#[must_use]
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
