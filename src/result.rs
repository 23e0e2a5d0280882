//! Round settlement.

use serde::{Deserialize, Serialize};

use crate::hand::{BLACKJACK, Owner};
use crate::history::Step;

/// The terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Neither side won.
    Tie,
}

/// A round result seen from one side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// This side won.
    Win,
    /// This side lost.
    Loss,
    /// Tie.
    Tie,
}

impl Winner {
    /// Returns the outcome for `owner`.
    #[must_use]
    pub const fn outcome_for(self, owner: Owner) -> Outcome {
        match (self, owner) {
            (Self::Tie, _) => Outcome::Tie,
            (Self::Player, Owner::Player) | (Self::Dealer, Owner::Dealer) => Outcome::Win,
            (Self::Player, Owner::Dealer) | (Self::Dealer, Owner::Player) => Outcome::Loss,
        }
    }
}

/// Why a round was decided the way it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Both hands are over 21.
    BothBusted,
    /// The player is over 21.
    PlayerBusted,
    /// The dealer is over 21.
    DealerBusted,
    /// The player is closer to 21.
    PlayerCloser,
    /// The dealer is closer to 21.
    DealerCloser,
    /// Both hands have the same total.
    EquallyClose,
}

impl Verdict {
    /// Decides a round from the full totals of both hands.
    ///
    /// Busts are checked first, then the totals are compared.
    #[must_use]
    pub fn resolve(player_value: u16, dealer_value: u16) -> Self {
        Self::bust(player_value, dealer_value).unwrap_or_else(|| {
            match player_value.cmp(&dealer_value) {
                core::cmp::Ordering::Greater => Self::PlayerCloser,
                core::cmp::Ordering::Less => Self::DealerCloser,
                core::cmp::Ordering::Equal => Self::EquallyClose,
            }
        })
    }

    /// Decides a round before the player stands.
    ///
    /// Only a bust ends a round early; returns `None` while both hands are
    /// 21 or under.
    #[must_use]
    pub const fn bust(player_value: u16, dealer_value: u16) -> Option<Self> {
        match (player_value > BLACKJACK, dealer_value > BLACKJACK) {
            (true, true) => Some(Self::BothBusted),
            (true, false) => Some(Self::PlayerBusted),
            (false, true) => Some(Self::DealerBusted),
            (false, false) => None,
        }
    }

    /// Returns the winner implied by this verdict.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::BothBusted | Self::EquallyClose => Winner::Tie,
            Self::PlayerBusted | Self::DealerCloser => Winner::Dealer,
            Self::DealerBusted | Self::PlayerCloser => Winner::Player,
        }
    }

    /// Returns the history step recorded for this verdict.
    #[must_use]
    pub const fn step(self) -> Step {
        match self {
            Self::BothBusted => Step::BothBusted,
            Self::PlayerBusted => Step::PlayerBusted,
            Self::DealerBusted => Step::DealerBusted,
            Self::PlayerCloser => Step::PlayerCloser,
            Self::DealerCloser => Step::DealerCloser,
            Self::EquallyClose => Step::EquallyClose,
        }
    }
}

/// Settles a finished round.
#[must_use]
pub fn settle(player_value: u16, dealer_value: u16) -> Winner {
    Verdict::resolve(player_value, dealer_value).winner()
}

/// Settles a round early if either side has busted.
#[must_use]
pub const fn early_settle(player_value: u16, dealer_value: u16) -> Option<Winner> {
    match Verdict::bust(player_value, dealer_value) {
        Some(verdict) => Some(verdict.winner()),
        None => None,
    }
}

/// Totals and winner of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The player's full hand value.
    pub player_value: u16,
    /// The dealer's full hand value.
    pub dealer_value: u16,
    /// The winner.
    pub winner: Winner,
}
