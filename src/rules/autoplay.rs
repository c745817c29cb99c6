//! Safe autoplay: which exposed cards can go to a foundation without ever
//! blocking a later move.
//!
//! A card `c` is safe to promote when either
//! - it is an Ace and a foundation is empty, or
//! - its foundation holds `c.rank - 1` of its suit, and both cards of rank
//!   `c.rank - 1` in the opposite color are already on foundations.
//!
//! In the second case no card left in play could ever need `c` as a cascade
//! placement target, since the only cards that stack on `c` are those two.

use crate::cards::{Card, Rank};
use crate::piles::{Movable, Pile, PileId, PileRules};

/// A card that can be promoted safely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Promotion {
    pub card: Card,
    pub from: PileId,
    pub to: PileId,
}

/// Foundation `card` can safely be promoted to, if any.
#[must_use]
pub fn safe_foundation(card: &Card, foundations: &[Pile]) -> Option<PileId> {
    let item = Movable::Card(*card);
    let target = foundations.iter().find(|f| f.can_place(&item))?;

    if card.rank() == Rank::Ace {
        return Some(target.id());
    }

    let below = card.rank().value() - 1;
    let covered = foundations
        .iter()
        .flat_map(|f| f.cards())
        .filter(|c| c.rank().value() == below && c.color() != card.color())
        .count();

    (covered == 2).then(|| target.id())
}

/// First exposed card that can be promoted safely.
///
/// Scans cascade tops, then freecells, in slot order.
#[must_use]
pub fn find_safe_promotion(cascades: &[Pile], freecells: &[Pile], foundations: &[Pile]) -> Option<Promotion> {
    cascades.iter().chain(freecells).find_map(|pile| {
        let card = pile.top_card()?;
        let to = safe_foundation(card, foundations)?;
        Some(Promotion {
            card: *card,
            from: pile.id(),
            to,
        })
    })
}
