use tracing::{debug, info};

use crate::error::RoundError;
use crate::hand::Owner;
use crate::history::Action;
use crate::result::{GameResult, Verdict};

use super::{Game, GameState};

impl Game {
    fn ensure_in_progress(state: &GameState) -> Result<(), RoundError> {
        if state.is_finished {
            return Err(RoundError::RoundFinished);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// The player draws one card. If the dealer is at or under the draw
    /// limit it draws exactly one card as well; the hole card stays face
    /// down. The round ends only if either side has busted, in which case
    /// the hole card is revealed and the result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundFinished`] if the round is already settled,
    /// or [`RoundError::DeckExhausted`] if a draw finds the deck empty. After
    /// a draw error the state is partially applied and should be discarded.
    pub fn hit(
        &self,
        state: &mut GameState,
        actor_id: &str,
    ) -> Result<Option<GameResult>, RoundError> {
        Self::ensure_in_progress(state)?;
        state.record_action(Action::Hit, actor_id);

        state.draw_card(Owner::Player)?;
        self.dealer_draw_once(state)?;

        let (player_value, dealer_value) = state.totals();
        let Some(verdict) = Verdict::bust(player_value, dealer_value) else {
            debug!(
                actor = actor_id,
                player = player_value,
                "round continues"
            );
            return Ok(None);
        };

        state.record(verdict.step())?;
        state.reveal_hole_card()?;
        let result = state.finish(verdict)?;

        info!(
            actor = actor_id,
            winner = ?result.winner,
            player = result.player_value,
            dealer = result.dealer_value,
            "round finished on hit"
        );
        Ok(Some(result))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer draws until its total exceeds the draw limit, reveals the
    /// hole card, and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundFinished`] if the round is already settled,
    /// or [`RoundError::DeckExhausted`] if the dealer must draw from an empty
    /// deck. After a draw error the state is partially applied and should be
    /// discarded.
    pub fn stand(&self, state: &mut GameState, actor_id: &str) -> Result<GameResult, RoundError> {
        Self::ensure_in_progress(state)?;
        state.record_action(Action::Stand, actor_id);

        let drawn = self.dealer_play_out(state)?;
        state.reveal_hole_card()?;

        let (player_value, dealer_value) = state.totals();
        let verdict = Verdict::resolve(player_value, dealer_value);
        state.record(verdict.step())?;
        let result = state.finish(verdict)?;

        info!(
            actor = actor_id,
            dealer_draws = drawn.len(),
            winner = ?result.winner,
            player = result.player_value,
            dealer = result.dealer_value,
            "round finished on stand"
        );
        Ok(result)
    }
}
