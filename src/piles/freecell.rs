//! Freecell: a one-card holding cell.

use super::{Movable, PileId, PileRules};
use crate::cards::Card;

/// A single-card holding cell. Accepts any lone card while empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Freecell {
    id: PileId,
    pub(super) cards: Vec<Card>,
}

impl Freecell {
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::with_capacity(1),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// The held card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.cards.first()
    }
}

impl PileRules for Freecell {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn can_place(&self, item: &Movable) -> bool {
        self.cards.is_empty() && matches!(item, Movable::Card(_))
    }

    fn place(&mut self, item: Movable) {
        debug_assert!(self.can_place(&item), "{item} cannot be placed on {}", self.id);
        self.cards.extend_from_slice(item.cards());
    }

    fn can_pick_up(&self, index: usize) -> bool {
        index < self.cards.len()
    }

    fn pick_up(&mut self, _index: usize) -> Movable {
        let card = self
            .cards
            .pop()
            .unwrap_or_else(|| panic!("picked up from empty {}", self.id));
        Movable::Card(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(token: &str) -> Movable {
        Movable::Card(token.parse().unwrap())
    }

    #[test]
    fn test_holds_one_card() {
        let mut cell = Freecell::new(PileId::freecell(0));
        assert!(cell.can_place(&single("KS")));
        assert!(!cell.can_pick_up(0));

        cell.place(single("KS"));
        assert_eq!(cell.card().map(ToString::to_string), Some("KS".to_string()));
        assert!(!cell.can_place(&single("AD")));
        assert!(cell.can_pick_up(0));
    }

    #[test]
    fn test_rejects_runs() {
        let cell = Freecell::new(PileId::freecell(1));
        let run = Movable::from_cards(
            crate::cards::parse_cards("9S 8H").unwrap().into_iter().collect(),
        );
        assert!(!cell.can_place(&run));
    }

    #[test]
    fn test_pick_up_empties_cell() {
        let mut cell = Freecell::new(PileId::freecell(2));
        cell.place(single("4C"));
        assert_eq!(cell.pick_up(0), single("4C"));
        assert!(cell.is_empty());
    }

    #[test]
    #[should_panic(expected = "picked up from empty freecell 4")]
    fn test_pick_up_from_empty_panics() {
        Freecell::new(PileId::freecell(3)).pick_up(0);
    }
}
