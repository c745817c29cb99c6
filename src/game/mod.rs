//! The game: 8 cascades, 4 freecells, 4 foundations and their history.
//!
//! ## Lifecycle
//!
//! [`Game::new`] builds an empty table with the whole deck undealt.
//! [`Game::new_game`] clears every pile, shuffles a fresh deck and deals it,
//! then sweeps safe cards to the foundations. It can be called any number of
//! times. [`Game::from_layout`] builds a table from notation instead, for
//! fixtures and puzzles.
//!
//! ## Commands
//!
//! - [`Game::attempt_transfer`] / [`Game::attempt_drop`]: the transfer protocol
//! - [`Game::undo`]: reverse the latest record
//! - [`Game::run_autoplay`], [`Game::set_autoplay`], [`Game::toggle_autoplay`]
//!
//! Everything else is a read-only query. All commands run to completion
//! before returning; a presentation layer redraws afterward.
//!
//! ## Conservation
//!
//! Every card is always in exactly one pile or still in the deck.
//! [`Game::check_integrity`] asserts it.

mod autoplay;
mod layout;
mod transfer;

pub use layout::Layout;
pub use transfer::TransferReport;

use std::fmt;

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{EngineConfig, GameRng, CASCADE_COUNT, DECK_SIZE, FREECELL_COUNT};
use crate::history::MoveHistory;
use crate::piles::{Movable, Pile, PileId, PileRules};
use crate::rules::{self, Capacity, Promotion};

const FREECELL_START: usize = CASCADE_COUNT;
const FOUNDATION_START: usize = CASCADE_COUNT + FREECELL_COUNT;

/// A card on the table: its pile and its index within that pile.
///
/// Index 0 is the bottom card. Pickups address the card at `index` together
/// with everything above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub pile: PileId,
    pub index: usize,
}

impl CardRef {
    #[must_use]
    pub const fn new(pile: PileId, index: usize) -> Self {
        Self { pile, index }
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} card {}", self.pile, self.index + 1)
    }
}

/// A FreeCell game.
#[derive(Clone, Debug)]
pub struct Game {
    config: EngineConfig,

    /// Master RNG; forks one seed per deal.
    rng: GameRng,

    /// Seed of the current deal, `None` before the first deal or for a layout.
    deal_seed: Option<u64>,

    /// Cards not on the table.
    deck: Deck,

    /// All 16 piles in table order: cascades, freecells, foundations.
    piles: Vec<Pile>,

    history: MoveHistory,
    autoplay: bool,
    won: bool,
}

impl Game {
    /// Create a game with an empty table. Call [`Game::new_game`] to deal.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            autoplay: config.autoplay,
            config,
            rng,
            deal_seed: None,
            deck: Deck::new(),
            piles: PileId::all().map(Pile::new).collect(),
            history: MoveHistory::new(),
            won: false,
        }
    }

    /// Deal a new game with the next seed from the master RNG.
    ///
    /// Returns the deal seed; pass it to [`Game::new_game_with_seed`] to
    /// replay this deal.
    pub fn new_game(&mut self) -> u64 {
        let seed = self.rng.fork().seed();
        self.deal(seed);
        seed
    }

    /// Deal the game identified by `seed`.
    pub fn new_game_with_seed(&mut self, seed: u64) {
        self.deal(seed);
    }

    fn deal(&mut self, seed: u64) {
        for pile in &mut self.piles {
            pile.clear();
        }
        self.history.clear();
        self.won = false;

        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));

        for index in 0..DECK_SIZE {
            let mut card = deck.deal();
            card.reveal();
            self.piles[index % CASCADE_COUNT].restore(Movable::Card(card));
        }
        self.deck = deck;
        self.deal_seed = Some(seed);
        info!("dealt new game with seed {seed}");

        self.run_autoplay();
        self.update_won();
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.table_index()]
    }

    /// Recompute the win flag. Logs once when the game becomes won.
    pub(crate) fn update_won(&mut self) {
        let won = self.foundation_card_count() == DECK_SIZE;
        if won && !self.won {
            info!("game won after {} moves", self.history.len());
        }
        self.won = won;
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.table_index()]
    }

    #[must_use]
    pub fn cascades(&self) -> &[Pile] {
        &self.piles[..FREECELL_START]
    }

    #[must_use]
    pub fn freecells(&self) -> &[Pile] {
        &self.piles[FREECELL_START..FOUNDATION_START]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.piles[FOUNDATION_START..]
    }

    /// Every pile in table order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Total cards across all four foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations().iter().map(PileRules::len).sum()
    }

    /// Cards still in the deck. Zero once a game is dealt.
    #[must_use]
    pub fn cards_left_in_deck(&self) -> usize {
        self.deck.cards_left()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    /// Scratch space for moving a run from `source` to `destination` right now.
    #[must_use]
    pub fn capacity_for(&self, source: PileId, destination: PileId) -> Capacity {
        Capacity::measure(self.cascades(), self.freecells(), source, destination)
    }

    /// Could the card at `from` (with everything above it) be picked up?
    #[must_use]
    pub fn can_pick_up(&self, from: CardRef) -> bool {
        self.pile(from.pile).can_pick_up(from.index)
    }

    /// Next card the autoplay loop would promote, ignoring the autoplay switch.
    #[must_use]
    pub fn find_safe_promotion(&self) -> Option<Promotion> {
        rules::find_safe_promotion(self.cascades(), self.freecells(), self.foundations())
    }

    /// The top card of `pile`, if any.
    #[must_use]
    pub fn top_of(&self, pile: PileId) -> Option<CardRef> {
        let len = self.pile(pile).len();
        (len > 0).then(|| CardRef::new(pile, len - 1))
    }

    /// Where `card` sits on the table, if it is on the table.
    #[must_use]
    pub fn locate(&self, card: &Card) -> Option<CardRef> {
        self.piles.iter().find_map(|pile| {
            let index = pile.cards().iter().position(|c| c == card)?;
            Some(CardRef::new(pile.id(), index))
        })
    }

    /// Count of every card the game owns, on the table or in the deck.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<Card, usize> {
        let mut census = FxHashMap::default();
        let in_deck = (0..self.deck.cards_left()).filter_map(|i| self.deck.card(i));
        for card in self.piles.iter().flat_map(|p| p.cards().iter().copied()).chain(in_deck) {
            *census.entry(card).or_insert(0) += 1;
        }
        census
    }

    /// Assert that the game owns each of the 52 cards exactly once.
    ///
    /// Panics naming the first problem found.
    pub fn check_integrity(&self) {
        let census = self.card_census();
        for (card, count) in &census {
            assert_eq!(*count, 1, "card {card} is owned {count} times");
        }
        assert_eq!(census.len(), DECK_SIZE, "game owns {} distinct cards", census.len());
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pile in &self.piles {
            writeln!(f, "{}: {}", pile.id(), pile)?;
        }
        Ok(())
    }
}
