//! Error types for round operations.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by the action history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// An event was recorded before any action.
    #[error("no action recorded to attach the event to")]
    Empty,
}

/// Errors that can occur while applying an action to a round.
///
/// A state that returned an error mid-action may be partially mutated and
/// should be discarded rather than persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// The round state broke one of its own invariants.
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] HistoryError),
    /// The round is already finished; a new round must be started.
    #[error("the round is already finished")]
    RoundFinished,
}

/// Errors raised when decoding a persisted round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The record is not a valid round state.
    #[error("malformed persisted state: {0}")]
    Malformed(String),
}

/// Errors raised when parsing an action label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The label is not one of the requestable actions.
    #[error("unknown action")]
    Unknown,
}
