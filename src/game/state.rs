//! Round state types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{HistoryError, RoundError};
use crate::hand::{Hand, Owner};
use crate::history::{Action, History, Step};
use crate::result::{GameResult, Verdict, Winner};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been dealt.
    NotStarted,
    /// Cards are dealt and the player may act.
    InProgress,
    /// The round is settled. Only a new game may follow.
    Finished,
}

impl Phase {
    /// Returns the phase of an optional persisted round.
    #[must_use]
    pub const fn of(state: Option<&GameState>) -> Self {
        match state {
            None => Self::NotStarted,
            Some(state) => state.phase(),
        }
    }
}

/// The complete state of one round.
///
/// A round is created by [`GameState::deal`] (usually through
/// [`Game::new_round`](super::Game::new_round)), mutated in place by each
/// action, and replaced wholesale by the next deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand; the first card is the hole card.
    pub dealer: Hand,
    /// Whether the round is settled.
    pub is_finished: bool,
    /// The winner, set exactly when the round finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    /// Actions taken this round.
    pub history: History,
}

impl GameState {
    /// Deals a new round from `deck`.
    ///
    /// The player receives the first two cards from the tail face up, the
    /// dealer the next two with the first one (the hole card) face down.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck holds fewer than four cards.
    pub fn deal(mut deck: Deck, actor_id: &str) -> Result<Self, RoundError> {
        let mut draw = || deck.draw().ok_or(RoundError::DeckExhausted);
        let player: Hand = [draw()?.face_up(), draw()?.face_up()].into_iter().collect();
        let dealer: Hand = [draw()?.face_down(), draw()?.face_up()]
            .into_iter()
            .collect();

        let mut history = History::new();
        history.append_action(Action::NewGame, actor_id, &dealer, &player);

        Ok(Self {
            deck,
            player,
            dealer,
            is_finished: false,
            winner: None,
            history,
        })
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_finished {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Returns the hand held by `owner`.
    #[must_use]
    pub const fn hand(&self, owner: Owner) -> &Hand {
        match owner {
            Owner::Player => &self.player,
            Owner::Dealer => &self.dealer,
        }
    }

    /// Returns the full totals of the player and the dealer.
    #[must_use]
    pub fn totals(&self) -> (u16, u16) {
        (self.player.total(), self.dealer.total())
    }

    /// Draws a card from the deck face up into `owner`'s hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck is empty, or
    /// [`RoundError::InvariantViolation`] if no action has been recorded.
    /// Neither hand changes on error.
    pub fn draw_card(&mut self, owner: Owner) -> Result<Card, RoundError> {
        if self.history.is_empty() {
            return Err(HistoryError::Empty.into());
        }
        let card = self.deck.draw().ok_or(RoundError::DeckExhausted)?;

        match owner {
            Owner::Player => self.player.add_card(card),
            Owner::Dealer => self.dealer.add_card(card),
        }
        debug!(?owner, %card, remaining = self.deck.len(), "card drawn");

        self.record(Step::draw(owner))?;
        Ok(card)
    }

    /// Turns the dealer's hole card face up.
    ///
    /// Does nothing if it is already face up. Returns whether the card was
    /// revealed by this call.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvariantViolation`] if no action has been recorded.
    pub fn reveal_hole_card(&mut self) -> Result<bool, RoundError> {
        if !self.dealer.is_first_hidden() {
            return Ok(false);
        }
        if self.history.is_empty() {
            return Err(HistoryError::Empty.into());
        }

        self.dealer.reveal_first();
        debug!(dealer = self.dealer.total(), "hole card revealed");
        self.record(Step::RevealHoleCard)?;
        Ok(true)
    }

    pub(super) fn record_action(&mut self, action: Action, actor_id: &str) {
        self.history
            .append_action(action, actor_id, &self.dealer, &self.player);
    }

    pub(super) fn record(&mut self, step: Step) -> Result<(), RoundError> {
        self.history
            .append_event(step, &self.dealer, &self.player)?;
        Ok(())
    }

    /// Marks the round settled by `verdict` and records the closing step.
    pub(super) fn finish(&mut self, verdict: Verdict) -> Result<GameResult, RoundError> {
        let (player_value, dealer_value) = self.totals();
        let winner = verdict.winner();

        self.is_finished = true;
        self.winner = Some(winner);
        self.record(Step::GameFinished)?;

        Ok(GameResult {
            player_value,
            dealer_value,
            winner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn deal_needs_four_cards() {
        let deck = Deck::from_cards(alloc::vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Hearts, Rank::Three),
            Card::new(Suit::Hearts, Rank::Four),
        ]);
        assert_eq!(
            GameState::deal(deck, "alice").unwrap_err(),
            RoundError::DeckExhausted
        );
    }

    #[test]
    fn draw_before_any_action_is_an_invariant_violation() {
        let mut state = GameState::deal(Deck::new(), "alice").unwrap();
        state.history = History::new();
        let before = state.clone();

        assert!(matches!(
            state.draw_card(Owner::Player),
            Err(RoundError::InvariantViolation(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn phase_follows_finished_flag() {
        let mut state = GameState::deal(Deck::new(), "alice").unwrap();
        assert_eq!(Phase::of(None), Phase::NotStarted);
        assert_eq!(Phase::of(Some(&state)), Phase::InProgress);

        state.is_finished = true;
        assert_eq!(state.phase(), Phase::Finished);
    }
}
