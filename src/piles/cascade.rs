//! Cascade: a tableau column built down in alternating colors.

use smallvec::SmallVec;

use super::{Movable, PileId, PileRules};
use crate::cards::Card;

/// A tableau column.
///
/// Accepts any card or run when empty. Otherwise the incoming base card
/// must be one rank lower than, and the opposite color of, the top card.
/// Any card can be picked up together with the cards above it as long as
/// they form a descending, alternating run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cascade {
    id: PileId,
    pub(super) cards: Vec<Card>,
}

impl Cascade {
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// Length of the movable run at the top of this cascade.
    ///
    /// Zero for an empty cascade, otherwise at least one.
    #[must_use]
    pub fn movable_run_len(&self) -> usize {
        if self.cards.is_empty() {
            return 0;
        }
        1 + self
            .cards
            .windows(2)
            .rev()
            .take_while(|pair| pair[1].can_place_cascade(&pair[0]))
            .count()
    }
}

impl PileRules for Cascade {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn can_place(&self, item: &Movable) -> bool {
        match self.cards.last() {
            None => true,
            Some(top) => item.base().can_place_cascade(top),
        }
    }

    fn place(&mut self, item: Movable) {
        debug_assert!(self.can_place(&item), "{item} cannot be placed on {}", self.id);
        self.cards.extend_from_slice(item.cards());
    }

    fn can_pick_up(&self, index: usize) -> bool {
        index < self.cards.len() && self.cards.len() - index <= self.movable_run_len()
    }

    fn pick_up(&mut self, index: usize) -> Movable {
        assert!(!self.cards.is_empty(), "picked up from empty {}", self.id);
        assert!(
            self.can_pick_up(index),
            "cards from depth {index} of {} do not form a movable run",
            self.id
        );

        if index == self.cards.len() - 1 {
            return Movable::Card(self.cards.pop().expect("checked non-empty"));
        }
        let run: SmallVec<[Card; 13]> = self.cards.drain(index..).collect();
        Movable::Run(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cascade(notation: &str) -> Cascade {
        let mut cascade = Cascade::new(PileId::cascade(0));
        cascade.cards = parse_cards(notation).unwrap();
        cascade
    }

    fn single(token: &str) -> Movable {
        Movable::Card(token.parse().unwrap())
    }

    fn run(notation: &str) -> Movable {
        Movable::from_cards(parse_cards(notation).unwrap().into_iter().collect())
    }

    #[test]
    fn test_empty_accepts_anything() {
        let empty = cascade("");
        assert!(empty.can_place(&single("KS")));
        assert!(empty.can_place(&single("AD")));
        assert!(empty.can_place(&run("9S 8H 7C")));
    }

    #[test]
    fn test_accepts_one_lower_opposite_color() {
        let pile = cascade("2C 9S");
        assert!(pile.can_place(&single("8H")));
        assert!(pile.can_place(&single("8D")));
        assert!(!pile.can_place(&single("8C")));
        assert!(!pile.can_place(&single("7H")));
        assert!(!pile.can_place(&single("TH")));
    }

    #[test]
    fn test_run_placement_checks_base_card() {
        let pile = cascade("TD");
        assert!(pile.can_place(&run("9S 8H 7C")));
        assert!(!pile.can_place(&run("8H 7C")));
    }

    #[test]
    fn test_place_appends_in_order() {
        let mut pile = cascade("TD");
        pile.place(run("9S 8H"));
        pile.place(single("7C"));
        assert_eq!(crate::cards::format_cards(pile.cards()), "TD 9S 8H 7C");
    }

    #[test]
    fn test_movable_run_len() {
        assert_eq!(cascade("").movable_run_len(), 0);
        assert_eq!(cascade("5D").movable_run_len(), 1);
        assert_eq!(cascade("KS 9S 8H 7C").movable_run_len(), 3);
        assert_eq!(cascade("9S 8H 7H").movable_run_len(), 1);
        assert_eq!(cascade("TD 9S 8H 7C 6D").movable_run_len(), 5);
    }

    #[test]
    fn test_can_pick_up() {
        let pile = cascade("KS 2D 9S 8H 7C");
        assert!(pile.can_pick_up(4));
        assert!(pile.can_pick_up(3));
        assert!(pile.can_pick_up(2));
        assert!(!pile.can_pick_up(1));
        assert!(!pile.can_pick_up(0));
        assert!(!pile.can_pick_up(5));

        assert!(!cascade("").can_pick_up(0));
    }

    #[test]
    fn test_pick_up_top_card() {
        let mut pile = cascade("KS 9S 8H");
        assert_eq!(pile.pick_up(2), single("8H"));
        assert_eq!(crate::cards::format_cards(pile.cards()), "KS 9S");
    }

    #[test]
    fn test_pick_up_run_preserves_order() {
        let mut pile = cascade("KS 9S 8H 7C");
        let taken = pile.pick_up(1);
        assert!(taken.is_run());
        assert_eq!(taken.to_string(), "9S 8H 7C");
        assert_eq!(crate::cards::format_cards(pile.cards()), "KS");
    }

    #[test]
    #[should_panic(expected = "picked up from empty cascade 1")]
    fn test_pick_up_from_empty_panics() {
        cascade("").pick_up(0);
    }

    #[test]
    #[should_panic(expected = "do not form a movable run")]
    fn test_pick_up_broken_run_panics() {
        cascade("KS 9S 8H").pick_up(0);
    }
}
