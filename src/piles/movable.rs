//! What a pickup yields: a lone card, or a run detached from a cascade.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{format_cards, Card};

/// Cards detached from a pile as one unit.
///
/// A `Run` is transient: the destination either merges it or its cards go
/// back to the source in their original order. It is never a pile itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movable {
    /// A single card.
    Card(Card),
    /// Two or more cards, bottom first. A run never exceeds 13 cards.
    Run(SmallVec<[Card; 13]>),
}

#[allow(clippy::len_without_is_empty)]
impl Movable {
    /// Wrap cards as a movable item: one card becomes `Card`, more become `Run`.
    ///
    /// Panics if `cards` is empty.
    #[must_use]
    pub fn from_cards(cards: SmallVec<[Card; 13]>) -> Self {
        match cards.len() {
            0 => panic!("cannot move zero cards"),
            1 => Movable::Card(cards[0]),
            _ => Movable::Run(cards),
        }
    }

    /// Number of cards moved.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Movable::Card(_) => 1,
            Movable::Run(cards) => cards.len(),
        }
    }

    /// The card that lands on the destination's top card.
    #[must_use]
    pub fn base(&self) -> &Card {
        match self {
            Movable::Card(card) => card,
            Movable::Run(cards) => &cards[0],
        }
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Movable::Card(card) => std::slice::from_ref(card),
            Movable::Run(cards) => cards,
        }
    }

    #[must_use]
    pub fn is_run(&self) -> bool {
        matches!(self, Movable::Run(_))
    }
}

impl fmt::Display for Movable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cards(self.cards()))
    }
}
