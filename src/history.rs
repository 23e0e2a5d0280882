//! Append-only record of the actions taken in a round.
//!
//! Every action pushes a [`HistoryEntry`] holding a snapshot of both hands.
//! The sub-steps that resolve the action (cards drawn, the hole card being
//! revealed, the verdict) are appended to that entry as [`Event`]s, each with
//! its own snapshot.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, ParseActionError};
use crate::game::Phase;
use crate::hand::{Hand, Owner};

/// An action recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Player stands; the dealer plays out and the round is settled.
    Stand,
    /// Player draws a card.
    Hit,
    /// A fresh round is dealt.
    #[serde(rename = "New Game")]
    NewGame,
    /// The round is already over. Derived, never requested.
    Finished,
}

impl Action {
    /// Actions a caller may request directly.
    pub const REQUESTABLE: [Self; 3] = [Self::Stand, Self::Hit, Self::NewGame];

    /// Returns the label of the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stand => "Stand",
            Self::Hit => "Hit",
            Self::NewGame => "New Game",
            Self::Finished => "Finished",
        }
    }

    /// Returns the action to run for a request against a round in `phase`.
    ///
    /// Anything other than a new game on a finished round becomes
    /// [`Action::Finished`].
    #[must_use]
    pub const fn effective(requested: Self, phase: Phase) -> Self {
        match (requested, phase) {
            (Self::NewGame, _) => Self::NewGame,
            (_, Phase::Finished) => Self::Finished,
            (action, _) => action,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::REQUESTABLE
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or(ParseActionError::Unknown)
    }
}

/// A sub-step in the resolution of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// The player drew a card.
    #[serde(rename = "Player: Draw Card")]
    PlayerDraw,
    /// The dealer drew a card.
    #[serde(rename = "Dealer: Draw Card")]
    DealerDraw,
    /// The dealer turned the hole card face up.
    #[serde(rename = "Dealer: Reveal Hole Card")]
    RevealHoleCard,
    /// Tie, both hands busted.
    #[serde(rename = "Tie: Both parties busted")]
    BothBusted,
    /// Dealer won, the player busted.
    #[serde(rename = "Dealer won: Player busted")]
    PlayerBusted,
    /// Player won, the dealer busted.
    #[serde(rename = "Player won: Dealer busted")]
    DealerBusted,
    /// Player won on total.
    #[serde(rename = "Player won: Is closer to 21")]
    PlayerCloser,
    /// Dealer won on total.
    #[serde(rename = "Dealer won: Is closer to 21")]
    DealerCloser,
    /// Tie on total.
    #[serde(rename = "Tie: Both parties are equally close to 21")]
    EquallyClose,
    /// The round is over.
    #[serde(rename = "Game Finished: Thank you for playing!")]
    GameFinished,
}

impl Step {
    /// Returns the display label of the step.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerDraw => "Player: Draw Card",
            Self::DealerDraw => "Dealer: Draw Card",
            Self::RevealHoleCard => "Dealer: Reveal Hole Card",
            Self::BothBusted => "Tie: Both parties busted",
            Self::PlayerBusted => "Dealer won: Player busted",
            Self::DealerBusted => "Player won: Dealer busted",
            Self::PlayerCloser => "Player won: Is closer to 21",
            Self::DealerCloser => "Dealer won: Is closer to 21",
            Self::EquallyClose => "Tie: Both parties are equally close to 21",
            Self::GameFinished => "Game Finished: Thank you for playing!",
        }
    }

    /// Returns the step recorded when `owner` draws a card.
    #[must_use]
    pub const fn draw(owner: Owner) -> Self {
        match owner {
            Owner::Player => Self::PlayerDraw,
            Owner::Dealer => Self::DealerDraw,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The cards one side held at the time of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedHand {
    /// Side holding the cards.
    pub owner: Owner,
    /// The cards.
    pub cards: Hand,
}

/// Snapshot of both hands, dealer first.
pub type CardsInPlay = Vec<OwnedHand>;

fn snapshot(dealer: &Hand, player: &Hand) -> CardsInPlay {
    alloc::vec![
        OwnedHand {
            owner: Owner::Dealer,
            cards: dealer.clone(),
        },
        OwnedHand {
            owner: Owner::Player,
            cards: player.clone(),
        },
    ]
}

/// A recorded sub-step of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// What happened.
    pub step: Step,
    /// Both hands right after the step.
    pub cards_in_play: CardsInPlay,
}

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The action taken.
    pub action: Action,
    /// Sub-steps of the action, if any were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    /// Identity of whoever requested the action.
    pub actor: String,
    /// Both hands when the action was recorded.
    pub cards_in_play: CardsInPlay,
}

impl HistoryEntry {
    /// Returns the recorded events, or an empty slice.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or_default()
    }
}

/// The action log of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records an action with a snapshot of both hands.
    pub fn append_action(&mut self, action: Action, actor: &str, dealer: &Hand, player: &Hand) {
        self.entries.push(HistoryEntry {
            action,
            events: None,
            actor: String::from(actor),
            cards_in_play: snapshot(dealer, player),
        });
    }

    /// Records a sub-step on the most recent action.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if no action has been recorded yet.
    pub fn append_event(
        &mut self,
        step: Step,
        dealer: &Hand,
        player: &Hand,
    ) -> Result<(), HistoryError> {
        let entry = self.entries.last_mut().ok_or(HistoryError::Empty)?;
        entry.events.get_or_insert_with(Vec::new).push(Event {
            step,
            cards_in_play: snapshot(dealer, player),
        });
        Ok(())
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no action has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
