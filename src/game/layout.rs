//! Tables built from notation.
//!
//! ```
//! use freecell_engine::core::EngineConfig;
//! use freecell_engine::game::{Game, Layout};
//! use freecell_engine::piles::PileId;
//!
//! let layout = Layout::new()
//!     .cascade(0, "KS QH JC")
//!     .freecell(1, "9D")
//!     .foundation(0, "AS 2S");
//! let game = Game::from_layout(EngineConfig::default(), &layout).unwrap();
//!
//! assert_eq!(game.pile(PileId::cascade(0)).to_string(), "KS QH JC");
//! assert_eq!(game.foundation_card_count(), 2);
//! assert_eq!(game.cards_left_in_deck(), 52 - 6);
//! ```

use log::debug;
use rustc_hash::FxHashSet;

use super::Game;
use crate::cards::{parse_cards, Card, Rank};
use crate::core::{EngineConfig, DECK_SIZE};
use crate::error::LayoutError;
use crate::piles::{Movable, PileId, PileKind};

/// Pile contents in notation, validated by [`Game::from_layout`].
///
/// Setting the same pile twice keeps the later notation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    piles: Vec<(PileKind, usize, String)>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cascade(self, slot: usize, notation: &str) -> Self {
        self.with_pile(PileKind::Cascade, slot, notation)
    }

    #[must_use]
    pub fn freecell(self, slot: usize, notation: &str) -> Self {
        self.with_pile(PileKind::Freecell, slot, notation)
    }

    #[must_use]
    pub fn foundation(self, slot: usize, notation: &str) -> Self {
        self.with_pile(PileKind::Foundation, slot, notation)
    }

    #[must_use]
    pub fn with_pile(mut self, kind: PileKind, slot: usize, notation: &str) -> Self {
        self.piles.push((kind, slot, notation.to_string()));
        self
    }

    /// Parse and check every pile. Returns the piles' cards in table order.
    fn resolve(&self) -> Result<Vec<Vec<Card>>, LayoutError> {
        let mut table: Vec<Vec<Card>> = PileId::all().map(|_| Vec::new()).collect();

        for (kind, slot, notation) in &self.piles {
            let id = PileId::checked(*kind, *slot).ok_or(LayoutError::SlotOutOfRange {
                kind: *kind,
                slot: *slot,
            })?;
            let cards = parse_cards(notation)?;

            match kind {
                PileKind::Freecell if cards.len() > 1 => {
                    return Err(LayoutError::FreecellOverflow {
                        slot: *slot,
                        count: cards.len(),
                    });
                }
                PileKind::Foundation if !is_foundation_run(&cards) => {
                    return Err(LayoutError::InvalidFoundation { slot: *slot });
                }
                _ => {}
            }
            table[id.table_index()] = cards;
        }

        let mut seen = FxHashSet::default();
        for card in table.iter().flatten() {
            if !seen.insert(*card) {
                return Err(LayoutError::DuplicateCard(*card));
            }
        }
        Ok(table)
    }
}

/// Ace first, then each card the next rank of the same suit.
fn is_foundation_run(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return true;
    };
    first.rank() == Rank::Ace && cards.windows(2).all(|pair| pair[1].can_place_foundation(&pair[0]))
}

impl Game {
    /// Build a game from a fixture layout.
    ///
    /// Cards the layout does not place stay in the deck, so the game still
    /// owns all 52. Autoplay is not run; the table is exactly as given.
    pub fn from_layout(config: EngineConfig, layout: &Layout) -> Result<Self, LayoutError> {
        let table = layout.resolve()?;
        let mut game = Game::new(config);

        let placed: FxHashSet<Card> = table.iter().flatten().copied().collect();
        game.deck.retain(|card| !placed.contains(card));

        for (id, cards) in PileId::all().zip(table) {
            for mut card in cards {
                card.reveal();
                game.pile_mut(id).restore(Movable::Card(card));
            }
        }
        debug!("built table from layout, {} of {DECK_SIZE} cards placed", placed.len());

        game.update_won();
        Ok(game)
    }
}
