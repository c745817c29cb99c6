//! Super-move capacity.
//!
//! A run of cards moves between cascades as if one card at a time, using
//! empty freecells and empty cascades as scratch space. Each empty freecell
//! holds one card; each empty cascade doubles what can be shuffled through.
//! The largest run that can move is `(1 + F) * 2^C`, where `F` counts empty
//! freecells and `C` counts empty cascades other than the move's own source
//! and destination.

use crate::error::MoveError;
use crate::piles::{Pile, PileId, PileRules};

/// Largest run movable with `free_cells` empty freecells and
/// `empty_cascades` spare empty cascades.
///
/// ```
/// use freecell_engine::rules::max_movable;
///
/// assert_eq!(max_movable(0, 0), 1);
/// assert_eq!(max_movable(1, 0), 2);
/// assert_eq!(max_movable(4, 2), 20);
/// ```
#[must_use]
pub const fn max_movable(free_cells: usize, empty_cascades: usize) -> usize {
    (1 + free_cells) << empty_cascades
}

/// Scratch space available to one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    /// Empty freecells.
    pub free_cells: usize,
    /// Empty cascades, excluding the move's source and destination.
    pub empty_cascades: usize,
    /// Largest run that can move.
    pub max: usize,
}

impl Capacity {
    #[must_use]
    pub const fn new(free_cells: usize, empty_cascades: usize) -> Self {
        Self {
            free_cells,
            empty_cascades,
            max: max_movable(free_cells, empty_cascades),
        }
    }

    /// Measure the scratch space for a move from `source` to `destination`.
    #[must_use]
    pub fn measure(cascades: &[Pile], freecells: &[Pile], source: PileId, destination: PileId) -> Self {
        let free_cells = freecells.iter().filter(|cell| cell.is_empty()).count();
        let empty_cascades = cascades
            .iter()
            .filter(|cascade| cascade.is_empty() && cascade.id() != source && cascade.id() != destination)
            .count();
        Self::new(free_cells, empty_cascades)
    }

    /// Accept a move of `requested` cards, or explain why not.
    pub fn check(&self, requested: usize) -> Result<(), MoveError> {
        if requested <= self.max {
            Ok(())
        } else {
            Err(MoveError::InsufficientCapacity {
                free_cells: self.free_cells,
                empty_cascades: self.empty_cascades,
                max: self.max,
                requested,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::core::{CASCADE_COUNT, FREECELL_COUNT};
    use crate::piles::Movable;

    fn piles(ids: impl Iterator<Item = PileId>, filled: &[usize]) -> Vec<Pile> {
        ids.enumerate()
            .map(|(slot, id)| {
                let mut pile = Pile::new(id);
                if filled.contains(&slot) {
                    pile.restore(Movable::Card(parse_cards("KS").unwrap()[0]));
                }
                pile
            })
            .collect()
    }

    #[test]
    fn test_formula() {
        for f in 0..=4 {
            for c in 0..=8 {
                assert_eq!(max_movable(f, c), (1 + f) * 2usize.pow(c as u32));
            }
        }
    }

    #[test]
    fn test_check_boundaries() {
        let capacity = Capacity::new(1, 1);
        assert_eq!(capacity.max, 4);
        assert!(capacity.check(4).is_ok());
        assert_eq!(
            capacity.check(5),
            Err(MoveError::InsufficientCapacity {
                free_cells: 1,
                empty_cascades: 1,
                max: 4,
                requested: 5,
            })
        );

        let none = Capacity::new(0, 0);
        assert!(none.check(1).is_ok());
        assert!(none.check(2).is_err());
    }

    #[test]
    fn test_measure_excludes_source_and_destination() {
        // Cascades 0, 1 and 2 are empty; the rest hold a card
        let cascades = piles((0..CASCADE_COUNT).map(PileId::cascade), &[3, 4, 5, 6, 7]);
        // Freecells 0 and 2 are empty
        let freecells = piles((0..FREECELL_COUNT).map(PileId::freecell), &[1, 3]);

        let capacity = Capacity::measure(&cascades, &freecells, PileId::cascade(3), PileId::cascade(4));
        assert_eq!(capacity, Capacity::new(2, 3));
        assert_eq!(capacity.max, 24);

        let capacity = Capacity::measure(&cascades, &freecells, PileId::cascade(3), PileId::cascade(0));
        assert_eq!(capacity, Capacity::new(2, 2));

        let capacity = Capacity::measure(&cascades, &freecells, PileId::cascade(1), PileId::cascade(0));
        assert_eq!(capacity, Capacity::new(2, 1));
    }
}
