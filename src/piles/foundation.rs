//! Foundation: a single suit built up from Ace to King.

use super::{Movable, PileId, PileRules};
use crate::cards::{Card, Rank, Suit};

/// A foundation pile. Its suit is the suit of its first card.
///
/// Foundations never yield cards during play; [`PileRules::pick_up`] returns
/// the top card unconditionally so that moves onto a foundation can be undone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundation {
    id: PileId,
    pub(super) cards: Vec<Card>,
}

impl Foundation {
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::with_capacity(13),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// Suit established by the first card, `None` while empty.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(Card::suit)
    }

    /// Would `card` be accepted here?
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self.cards.last() {
            None => card.rank() == Rank::Ace,
            Some(top) => card.can_place_foundation(top),
        }
    }
}

impl PileRules for Foundation {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn can_place(&self, item: &Movable) -> bool {
        match item {
            Movable::Card(card) => self.accepts(card),
            Movable::Run(_) => false,
        }
    }

    fn place(&mut self, item: Movable) {
        debug_assert!(self.can_place(&item), "{item} cannot be placed on {}", self.id);
        self.cards.extend_from_slice(item.cards());
    }

    fn can_pick_up(&self, _index: usize) -> bool {
        false
    }

    fn pick_up(&mut self, _index: usize) -> Movable {
        let card = self
            .cards
            .pop()
            .unwrap_or_else(|| panic!("picked up from empty {}", self.id));
        Movable::Card(card)
    }
}
