//! The autoplay loop and its switch.

use log::{debug, trace};

use super::Game;
use crate::history::{MoveCause, MoveRecord};
use crate::piles::PileRules;

impl Game {
    /// Promote safe cards until none remain.
    ///
    /// Each promotion is recorded in history and followed by a win check.
    /// Does nothing while autoplay is disabled. Returns the promotions made.
    pub fn run_autoplay(&mut self) -> Vec<MoveRecord> {
        let mut promoted = Vec::new();
        if !self.autoplay {
            return promoted;
        }

        while let Some(promotion) = self.find_safe_promotion() {
            let item = self.pile_mut(promotion.from).withdraw(1);
            self.pile_mut(promotion.to).place(item.clone());
            let record = self
                .history
                .record(item, promotion.from, promotion.to, MoveCause::Autoplay);
            trace!("autoplay {record}");
            promoted.push(record);
            self.update_won();
        }
        promoted
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// Turn autoplay on or off. Enabling does not sweep; call
    /// [`Game::run_autoplay`] for that.
    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.autoplay != enabled {
            debug!("autoplay {}", if enabled { "enabled" } else { "disabled" });
        }
        self.autoplay = enabled;
    }

    /// Flip the autoplay switch. Returns the new setting.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.set_autoplay(!self.autoplay);
        self.autoplay
    }
}
