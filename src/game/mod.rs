//! Round engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod persist;
pub mod state;

pub use persist::EMPTY_RECORD;
pub use state::{GameState, Phase};

/// A blackjack round engine.
///
/// The engine owns the rules and the shuffling RNG but never a round: each
/// action borrows the caller's [`GameState`] mutably for the duration of the
/// call. Callers load a round, apply one action, and persist the result.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let state = game.new_round("octocat").unwrap();
    /// assert_eq!(state.deck.len(), 48);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles a fresh deck and deals a new round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck cannot cover the
    /// initial deal, which a full deck always does.
    pub fn new_round(&mut self, actor_id: &str) -> Result<GameState, RoundError> {
        let deck = Deck::shuffled(&mut self.rng);
        let state = GameState::deal(deck, actor_id)?;

        info!(
            actor = actor_id,
            player = state.player.total(),
            dealer_visible = state.dealer.visible_value(),
            "new round dealt"
        );
        Ok(state)
    }
}
