//! Move history for undo.
//!
//! Every committed transfer, including autoplay promotions, appends one
//! [`MoveRecord`]. Undo pops the latest record; reversing the pile transfer
//! is the game's job, not the history's.
//!
//! Uses `im::Vector` so a game can be cloned cheaply with its history
//! (e.g. to try a move on a scratch copy).

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::error::UndoError;
use crate::piles::{Movable, PileId};

/// Why a move happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCause {
    /// Requested through the transfer protocol.
    Player,
    /// Safe autoplay promotion to a foundation.
    Autoplay,
}

/// A committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The card or run that moved.
    pub item: Movable,

    /// Pile it came from.
    pub source: PileId,

    /// Pile it went to.
    pub destination: PileId,

    pub cause: MoveCause,
}

impl MoveRecord {
    #[must_use]
    pub fn new(item: Movable, source: PileId, destination: PileId, cause: MoveCause) -> Self {
        Self {
            item,
            source,
            destination,
            cause,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moved {} to {} from {}", self.item, self.destination, self.source)
    }
}

/// LIFO log of committed moves.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    records: Vector<MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move. Returns a copy of the stored record.
    pub fn record(
        &mut self,
        item: Movable,
        source: PileId,
        destination: PileId,
        cause: MoveCause,
    ) -> MoveRecord {
        let record = MoveRecord::new(item, source, destination, cause);
        self.records.push_back(record.clone());
        record
    }

    /// Remove and return the most recent move.
    pub fn undo(&mut self) -> Result<MoveRecord, UndoError> {
        self.records.pop_back().ok_or(UndoError::EmptyHistory)
    }

    /// Most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
