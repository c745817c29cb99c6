//! The transfer protocol and undo.
//!
//! 1. Ask the source pile whether the card at the requested index can be
//!    picked up; if not, reject.
//! 2. Pick it up, yielding a lone card or a detached run.
//! 3. Resolve a destination that accepts the item.
//! 4. For runs, check super-move capacity.
//! 5. Commit: place, record, sweep autoplay, check for a win.
//!
//! A rejection at step 3 or 4 restores the item to its source, so the table
//! is untouched whenever an error comes back and no record is written.

use log::debug;

use super::{CardRef, Game};
use crate::error::{MoveError, UndoError};
use crate::history::{MoveCause, MoveRecord};
use crate::piles::{Movable, PileId, PileRules};

/// Outcome of a committed transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReport {
    /// The move the player asked for.
    pub moved: MoveRecord,

    /// Promotions the autoplay sweep made afterward, in order.
    pub autoplayed: Vec<MoveRecord>,

    /// Whether the game is won after this transfer.
    pub won: bool,
}

impl Game {
    /// Move the card at `from` (with everything above it) onto `to`.
    pub fn attempt_transfer(&mut self, from: CardRef, to: PileId) -> Result<TransferReport, MoveError> {
        if to == from.pile {
            return Err(MoveError::SamePile(to));
        }
        self.transfer(from, |game, item| {
            if game.pile(to).can_place(item) {
                Ok(to)
            } else {
                Err(MoveError::IllegalPlacement {
                    item: item.clone(),
                    to,
                })
            }
        })
    }

    /// Move the card at `from` onto the first of `candidates` that accepts it.
    ///
    /// Candidates are tried in the given order, typically the order a pointer
    /// layer found them under the dropped card. The source pile is skipped.
    pub fn attempt_drop(&mut self, from: CardRef, candidates: &[PileId]) -> Result<TransferReport, MoveError> {
        self.transfer(from, |game, item| {
            candidates
                .iter()
                .copied()
                .filter(|&id| id != from.pile)
                .find(|&id| game.pile(id).can_place(item))
                .ok_or_else(|| MoveError::NoDestination { item: item.clone() })
        })
    }

    fn transfer<F>(&mut self, from: CardRef, resolve: F) -> Result<TransferReport, MoveError>
    where
        F: FnOnce(&Game, &Movable) -> Result<PileId, MoveError>,
    {
        let source = from.pile;
        if !self.pile(source).can_pick_up(from.index) {
            let err = MoveError::NotPickable {
                from: source,
                index: from.index,
            };
            debug!("rejected transfer: {err}");
            return Err(err);
        }

        let item = self.pile_mut(source).pick_up(from.index);
        let destination = match resolve(&*self, &item).and_then(|to| self.check_capacity(&item, source, to)) {
            Ok(to) => to,
            Err(err) => {
                self.pile_mut(source).restore(item);
                debug!("rejected transfer: {err}");
                return Err(err);
            }
        };

        self.pile_mut(destination).place(item.clone());
        let moved = self.history.record(item, source, destination, MoveCause::Player);
        debug!("{moved}");

        let autoplayed = self.run_autoplay();
        self.update_won();

        Ok(TransferReport {
            moved,
            autoplayed,
            won: self.won,
        })
    }

    /// Pass `to` through if `item` fits the scratch space. Lone cards always fit.
    fn check_capacity(&self, item: &Movable, source: PileId, to: PileId) -> Result<PileId, MoveError> {
        if item.is_run() {
            self.capacity_for(source, to).check(item.len())?;
        }
        Ok(to)
    }

    /// Reverse the most recent move, player or autoplay.
    ///
    /// Does not run autoplay afterward, so undoing a promotion sticks.
    pub fn undo(&mut self) -> Result<MoveRecord, UndoError> {
        let record = self.history.undo()?;
        let item = self.pile_mut(record.destination).withdraw(record.item.len());
        debug_assert_eq!(item, record.item, "undo withdrew the wrong cards");
        self.pile_mut(record.source).restore(item);
        debug!("undid {record}");

        self.update_won();
        Ok(record)
    }
}
