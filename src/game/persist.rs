//! JSON encoding of persisted rounds.
//!
//! The record format matches what the state store already holds: an empty
//! object (or an empty file) means that no round is active.

use alloc::string::{String, ToString};

use crate::error::StateError;

use super::GameState;

/// The record written when no round is active.
pub const EMPTY_RECORD: &str = "{}";

impl GameState {
    /// Encodes the round as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Malformed`] if the state cannot be encoded.
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(|err| StateError::Malformed(err.to_string()))
    }

    /// Encodes the round as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Malformed`] if the state cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, StateError> {
        serde_json::to_string_pretty(self).map_err(|err| StateError::Malformed(err.to_string()))
    }

    /// Decodes a persisted record.
    ///
    /// Returns `Ok(None)` for a blank record or [`EMPTY_RECORD`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Malformed`] if the record is not a valid round.
    pub fn from_json(record: &str) -> Result<Option<Self>, StateError> {
        let record = record.trim();
        if record.is_empty() || record == EMPTY_RECORD {
            return Ok(None);
        }
        serde_json::from_str(record)
            .map(Some)
            .map_err(|err| StateError::Malformed(err.to_string()))
    }

    /// Returns the record that marks the round as discarded.
    #[must_use]
    pub const fn reset_record() -> &'static str {
        EMPTY_RECORD
    }
}
