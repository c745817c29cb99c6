//! # freecell-engine
//!
//! The rule engine of a FreeCell solitaire game: cards, piles, legal moves,
//! multi-card super-moves, undo and safe autoplay.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No coordinates, drawing or input handling. A UI
//!    calls the commands in response to gestures and redraws afterward.
//!
//! 2. **Rejections Are Values**: An illegal move returns a [`MoveError`] and
//!    leaves the table untouched. Broken caller preconditions panic.
//!
//! 3. **Reproducible Deals**: Every deal has a `u64` seed; the same seed
//!    always produces the same table.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, table constants
//! - `cards`: Ranks, suits, cards, notation, the deck
//! - `piles`: Cascades, freecells, foundations and their shared rules
//! - `history`: Move records for undo
//! - `rules`: Super-move capacity and the safe-autoplay test
//! - `game`: The game itself and notation fixtures
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use freecell_engine::{EngineConfig, Game};
//!
//! let mut game = Game::new(EngineConfig::default().with_seed(2024));
//! let seed = game.new_game();
//!
//! assert_eq!(game.deal_seed(), Some(seed));
//! assert_eq!(game.cards_left_in_deck(), 0);
//! game.check_integrity();
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod history;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, CASCADE_COUNT, DECK_SIZE, FOUNDATION_COUNT, FREECELL_COUNT};

pub use crate::cards::{format_cards, parse_cards, Card, Color, Deck, Rank, Suit};

pub use crate::piles::{Cascade, Foundation, Freecell, Movable, Pile, PileId, PileKind, PileRules};

pub use crate::history::{MoveCause, MoveHistory, MoveRecord};

pub use crate::rules::{max_movable, Capacity, Promotion};

pub use crate::game::{CardRef, Game, Layout, TransferReport};

pub use crate::error::{ConfigError, LayoutError, MoveError, ParseCardError, UndoError};
