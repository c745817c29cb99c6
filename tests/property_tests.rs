//! Property tests: random transfer sequences against dealt games.

use freecell_engine::{
    max_movable, Capacity, CardRef, EngineConfig, Game, PileId, PileRules, DECK_SIZE,
};
use proptest::prelude::*;

/// One attempted transfer: source pile, depth below its top, destination pile.
#[derive(Clone, Debug)]
struct Attempt {
    from: usize,
    depth: usize,
    to: usize,
}

fn attempt() -> impl Strategy<Value = Attempt> {
    (0usize..16, 0usize..6, 0usize..16).prop_map(|(from, depth, to)| Attempt { from, depth, to })
}

fn pile_id(table_index: usize) -> PileId {
    PileId::all().nth(table_index).unwrap()
}

/// Apply an attempt; ignores attempts that point past the bottom of a pile.
fn apply(game: &mut Game, a: &Attempt) -> bool {
    let from = pile_id(a.from);
    let len = game.pile(from).len();
    if a.depth >= len {
        return false;
    }
    let at = CardRef::new(from, len - 1 - a.depth);
    game.attempt_transfer(at, pile_id(a.to)).is_ok()
}

fn dealt(seed: u64, autoplay: bool) -> Game {
    let mut game = Game::new(EngineConfig::default().with_autoplay(autoplay));
    game.new_game_with_seed(seed);
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test that no sequence of attempts creates or loses a card.
    #[test]
    fn prop_transfers_conserve_cards(seed in any::<u64>(), attempts in prop::collection::vec(attempt(), 0..60)) {
        let mut game = dealt(seed, true);
        for a in &attempts {
            apply(&mut game, a);
            game.check_integrity();
            prop_assert_eq!(game.is_won(), game.foundation_card_count() == DECK_SIZE);
        }
    }

    /// Test that a rejected attempt leaves the table and history untouched.
    #[test]
    fn prop_rejections_change_nothing(seed in any::<u64>(), attempts in prop::collection::vec(attempt(), 1..40)) {
        let mut game = dealt(seed, true);
        for a in &attempts {
            let before = game.to_string();
            let history = game.history().len();
            if !apply(&mut game, a) {
                prop_assert_eq!(game.to_string(), before);
                prop_assert_eq!(game.history().len(), history);
            }
        }
    }

    /// Test that undoing every record returns to the raw deal.
    #[test]
    fn prop_undo_all_restores_deal(seed in any::<u64>(), attempts in prop::collection::vec(attempt(), 0..60)) {
        let raw = dealt(seed, false);
        let mut game = dealt(seed, true);
        for a in &attempts {
            apply(&mut game, a);
        }

        let records = game.history().len();
        for _ in 0..records {
            prop_assert!(game.undo().is_ok());
        }
        prop_assert!(game.undo().is_err());
        prop_assert_eq!(game.to_string(), raw.to_string());
        prop_assert!(!game.is_won());
    }

    /// Test that a single move followed by undo is an exact round trip.
    #[test]
    fn prop_move_then_undo(seed in any::<u64>(), attempts in prop::collection::vec(attempt(), 1..40)) {
        let mut game = dealt(seed, false);
        for a in &attempts {
            let before = game.to_string();
            let history = game.history().len();
            if apply(&mut game, a) {
                game.undo().unwrap();
                prop_assert_eq!(game.to_string(), before);
                prop_assert_eq!(game.history().len(), history);
                // Keep the move so later attempts see a changing table
                apply(&mut game, a);
            }
        }
    }

    /// Test that capacity allows exactly (1 + F) * 2^C cards.
    #[test]
    fn prop_capacity_boundary(free_cells in 0usize..=4, empty_cascades in 0usize..=6) {
        let capacity = Capacity::new(free_cells, empty_cascades);
        prop_assert_eq!(capacity.max, (1 + free_cells) * (1 << empty_cascades));
        prop_assert_eq!(capacity.max, max_movable(free_cells, empty_cascades));
        prop_assert!(capacity.check(capacity.max).is_ok());
        prop_assert!(capacity.check(capacity.max + 1).is_err());
    }
}
