//! The 52-card deck used to deal a new game.

use std::fmt;

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, DECK_SIZE};

/// A standard 52-card deck.
///
/// Cards are generated face down, suit by suit (Diamonds, Clubs, Hearts,
/// Spades) and Ace to King within each suit. [`Deck::deal`] takes cards from
/// the end of that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build all 52 cards in generation order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    ///
    /// Panics if the deck is empty: the dealing protocol deals exactly as
    /// many cards as the deck holds.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().expect("dealt from an empty deck")
    }

    /// Number of cards not yet dealt.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index` in the current order (0 is dealt last).
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Keep only the cards `keep` accepts, in order.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Card) -> bool) {
        self.cards.retain(keep);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format_cards(&self.cards))
    }
}
