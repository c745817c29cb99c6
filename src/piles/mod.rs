//! Piles: cascades, freecells and foundations.
//!
//! Every pile is an ordered run of cards, bottom at index 0 and top at the
//! end. The three variants share one capability set, [`PileRules`]:
//!
//! | variant      | accepts                                     | yields                    |
//! |--------------|---------------------------------------------|---------------------------|
//! | `Cascade`    | anything when empty, else one lower, other color | the top card, or the movable run above a card |
//! | `Freecell`   | a single card while empty                   | its card                  |
//! | `Foundation` | an Ace when empty, else next rank same suit | nothing during play       |
//!
//! The variant set is closed, so [`Pile`] is a sum type rather than a trait
//! object.
//!
//! ## Locations
//!
//! Pickups are addressed by the index of a card within its pile (0 is the
//! bottom card). For a cascade that index selects the run from that card to
//! the top.

mod cascade;
mod foundation;
mod freecell;
mod movable;

pub use cascade::Cascade;
pub use foundation::Foundation;
pub use freecell::Freecell;
pub use movable::Movable;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{format_cards, Card};
use crate::core::{CASCADE_COUNT, FOUNDATION_COUNT, FREECELL_COUNT};

/// Which kind of pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Cascade,
    Freecell,
    Foundation,
}

impl PileKind {
    /// Number of piles of this kind on the table.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PileKind::Cascade => CASCADE_COUNT,
            PileKind::Freecell => FREECELL_COUNT,
            PileKind::Foundation => FOUNDATION_COUNT,
        }
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PileKind::Cascade => "cascade",
            PileKind::Freecell => "freecell",
            PileKind::Foundation => "foundation",
        })
    }
}

/// Identity of a pile: its kind and 0-based slot.
///
/// Displays 1-based, e.g. `PileId::cascade(0)` is "cascade 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId {
    kind: PileKind,
    slot: u8,
}

impl PileId {
    /// Create a pile ID. Panics if `slot` is out of range for `kind`.
    #[must_use]
    pub fn new(kind: PileKind, slot: usize) -> Self {
        assert!(slot < kind.count(), "{kind} slot {slot} out of range");
        Self { kind, slot: slot as u8 }
    }

    /// Create a pile ID if `slot` is in range for `kind`.
    #[must_use]
    pub fn checked(kind: PileKind, slot: usize) -> Option<Self> {
        (slot < kind.count()).then(|| Self::new(kind, slot))
    }

    #[must_use]
    pub fn cascade(slot: usize) -> Self {
        Self::new(PileKind::Cascade, slot)
    }

    #[must_use]
    pub fn freecell(slot: usize) -> Self {
        Self::new(PileKind::Freecell, slot)
    }

    #[must_use]
    pub fn foundation(slot: usize) -> Self {
        Self::new(PileKind::Foundation, slot)
    }

    #[must_use]
    pub const fn kind(self) -> PileKind {
        self.kind
    }

    #[must_use]
    pub const fn slot(self) -> usize {
        self.slot as usize
    }

    /// All pile IDs in table order: cascades, freecells, foundations.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileKind::Cascade, PileKind::Freecell, PileKind::Foundation]
            .into_iter()
            .flat_map(|kind| (0..kind.count()).map(move |slot| PileId::new(kind, slot)))
    }

    /// Position in table order.
    pub(crate) const fn table_index(self) -> usize {
        let offset = match self.kind {
            PileKind::Cascade => 0,
            PileKind::Freecell => CASCADE_COUNT,
            PileKind::Foundation => CASCADE_COUNT + FREECELL_COUNT,
        };
        offset + self.slot as usize
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.slot + 1)
    }
}

/// Capability set shared by every pile variant.
pub trait PileRules {
    /// Cards bottom to top.
    fn cards(&self) -> &[Card];

    /// Would this pile accept `item` on top? No side effects.
    fn can_place(&self, item: &Movable) -> bool;

    /// Put `item` on top.
    ///
    /// The caller must have checked [`can_place`](PileRules::can_place);
    /// debug builds assert it.
    fn place(&mut self, item: Movable);

    /// Can the card at `index` (with everything above it) be picked up?
    fn can_pick_up(&self, index: usize) -> bool;

    /// Detach the card at `index` (with everything above it).
    ///
    /// Panics if the pile is empty or the pickup is not allowed: call
    /// [`can_pick_up`](PileRules::can_pick_up) first.
    fn pick_up(&mut self, index: usize) -> Movable;

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    fn top_card(&self) -> Option<&Card> {
        self.cards().last()
    }
}

/// A pile on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pile {
    Cascade(Cascade),
    Freecell(Freecell),
    Foundation(Foundation),
}

impl Pile {
    /// An empty pile with the given identity.
    #[must_use]
    pub fn new(id: PileId) -> Self {
        match id.kind() {
            PileKind::Cascade => Pile::Cascade(Cascade::new(id)),
            PileKind::Freecell => Pile::Freecell(Freecell::new(id)),
            PileKind::Foundation => Pile::Foundation(Foundation::new(id)),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        match self {
            Pile::Cascade(p) => p.id(),
            Pile::Freecell(p) => p.id(),
            Pile::Foundation(p) => p.id(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.id().kind()
    }

    fn stack_mut(&mut self) -> &mut Vec<Card> {
        match self {
            Pile::Cascade(p) => &mut p.cards,
            Pile::Freecell(p) => &mut p.cards,
            Pile::Foundation(p) => &mut p.cards,
        }
    }

    /// Put cards back on top without checking placement rules.
    ///
    /// Used to return a rejected pickup to its source and to reverse a move.
    pub(crate) fn restore(&mut self, item: Movable) {
        self.stack_mut().extend_from_slice(item.cards());
    }

    /// Remove the top `count` cards without checking pickup rules.
    ///
    /// Panics if the pile holds fewer than `count` cards.
    pub(crate) fn withdraw(&mut self, count: usize) -> Movable {
        let stack = self.stack_mut();
        assert!(
            count > 0 && count <= stack.len(),
            "cannot withdraw {count} cards from a pile of {}",
            stack.len()
        );
        let at = stack.len() - count;
        Movable::from_cards(stack.drain(at..).collect())
    }

    pub(crate) fn clear(&mut self) {
        self.stack_mut().clear();
    }
}

impl PileRules for Pile {
    fn cards(&self) -> &[Card] {
        match self {
            Pile::Cascade(p) => p.cards(),
            Pile::Freecell(p) => p.cards(),
            Pile::Foundation(p) => p.cards(),
        }
    }

    fn can_place(&self, item: &Movable) -> bool {
        match self {
            Pile::Cascade(p) => p.can_place(item),
            Pile::Freecell(p) => p.can_place(item),
            Pile::Foundation(p) => p.can_place(item),
        }
    }

    fn place(&mut self, item: Movable) {
        match self {
            Pile::Cascade(p) => p.place(item),
            Pile::Freecell(p) => p.place(item),
            Pile::Foundation(p) => p.place(item),
        }
    }

    fn can_pick_up(&self, index: usize) -> bool {
        match self {
            Pile::Cascade(p) => p.can_pick_up(index),
            Pile::Freecell(p) => p.can_pick_up(index),
            Pile::Foundation(p) => p.can_pick_up(index),
        }
    }

    fn pick_up(&mut self, index: usize) -> Movable {
        match self {
            Pile::Cascade(p) => p.pick_up(index),
            Pile::Freecell(p) => p.pick_up(index),
            Pile::Foundation(p) => p.pick_up(index),
        }
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cards(self.cards()))
    }
}
