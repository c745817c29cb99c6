//! Error types.
//!
//! Rejected transfers and empty undos are ordinary outcomes of play and come
//! back as values. Broken caller preconditions (picking up from an empty pile,
//! dealing from an empty deck) panic instead.

use thiserror::Error;

use crate::cards::Card;
use crate::piles::{Movable, PileId, PileKind};

/// A card token or pile notation could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("card token must be exactly two characters, got {0:?}")]
    Length(String),
    #[error("unknown rank code {0:?}")]
    Rank(char),
    #[error("unknown suit code {0:?}")]
    Suit(char),
}

/// A transfer was rejected. The table is unchanged when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("nothing can be picked up from {from} at depth {index}")]
    NotPickable { from: PileId, index: usize },

    #[error("{item} cannot be placed on {to}")]
    IllegalPlacement { item: Movable, to: PileId },

    #[error("no candidate pile accepts {item}")]
    NoDestination { item: Movable },

    #[error(
        "You have {free_cells} empty freecells and {empty_cascades} empty cascades, \
         so you can only move {max} cards. You are trying to move {requested} cards."
    )]
    InsufficientCapacity {
        free_cells: usize,
        empty_cascades: usize,
        max: usize,
        requested: usize,
    },

    #[error("cannot move cards from {0} onto itself")]
    SamePile(PileId),
}

impl MoveError {
    /// Whether this rejection carries a message meant for the player.
    ///
    /// Only capacity rejections explain themselves; the rest are silent no-ops.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, MoveError::InsufficientCapacity { .. })
    }
}

/// Undo was requested with nothing to undo.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    #[error("there is no move to undo")]
    EmptyHistory,
}

/// A fixture layout is not a valid table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error(transparent)]
    Parse(#[from] ParseCardError),

    #[error("{kind} slot {slot} does not exist")]
    SlotOutOfRange { kind: PileKind, slot: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("freecell {slot} holds {count} cards")]
    FreecellOverflow { slot: usize, count: usize },

    #[error("foundation {slot} is not an ace-up run of one suit")]
    InvalidFoundation { slot: usize },
}

/// Configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
