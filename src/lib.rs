//! A deterministic, turn-based blackjack round engine with optional `no_std` support.
//!
//! A round is a plain [`GameState`] value: deal it with [`Game::new_round`],
//! then apply [`Game::hit`] or [`Game::stand`] to it until it is finished.
//! Every action and each of its sub-steps is recorded in the round's
//! [`History`], and the whole state serializes losslessly to JSON for
//! persistence between actions.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut state = game.new_round("octocat").unwrap();
//!
//! if game.hit(&mut state, "octocat").unwrap().is_none() {
//!     let result = game.stand(&mut state, "octocat").unwrap();
//!     assert_eq!(state.winner, Some(result.winner));
//! }
//! assert!(state.is_finished);
//!
//! let record = state.to_json().unwrap();
//! assert_eq!(GameState::from_json(&record).unwrap(), Some(state));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HandCard, Rank, Suit};
pub use deck::{Deck, create_deck, shuffle};
pub use error::{HistoryError, ParseActionError, RoundError, StateError};
pub use game::{EMPTY_RECORD, Game, GameState, Phase};
pub use hand::{BLACKJACK, Hand, Owner, card_value};
pub use history::{Action, CardsInPlay, Event, History, HistoryEntry, OwnedHand, Step};
pub use options::GameOptions;
pub use result::{GameResult, Outcome, Verdict, Winner, early_settle, settle};
