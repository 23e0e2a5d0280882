use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Owner;

use super::{Game, GameState};

impl Game {
    /// Dealer draws until the full total exceeds the draw limit.
    ///
    /// Soft totals count as they stand; the dealer never looks ahead to
    /// avoid a bust. Returns the cards drawn.
    pub(super) fn dealer_play_out(&self, state: &mut GameState) -> Result<Vec<Card>, RoundError> {
        let mut drawn = Vec::new();
        while self.options.dealer_must_draw(state.dealer.total()) {
            drawn.push(state.draw_card(Owner::Dealer)?);
        }
        Ok(drawn)
    }

    /// Dealer draws at most one card, and only while at or under the draw limit.
    pub(super) fn dealer_draw_once(&self, state: &mut GameState) -> Result<Option<Card>, RoundError> {
        if self.options.dealer_must_draw(state.dealer.total()) {
            state.draw_card(Owner::Dealer).map(Some)
        } else {
            Ok(None)
        }
    }
}
