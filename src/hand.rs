//! Hands and blackjack hand arithmetic.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, HandCard, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Value an Ace loses when it is counted as 1 instead of 11.
const ACE_DEMOTION: u16 = 10;

/// Returns the baseline value of a rank. Aces count high (11).
#[must_use]
pub const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

/// Best total for a raw sum (aces high) containing `aces` Aces.
///
/// Each demoted Ace is worth exactly 10 less, so the number of demotions is
/// the smallest `k <= aces` that brings the total to 21 or below.
#[must_use]
pub const fn soft_total(raw_sum: u16, aces: u16) -> u16 {
    let excess = raw_sum.saturating_sub(BLACKJACK);
    let needed = excess.div_ceil(ACE_DEMOTION);
    let demoted = if needed < aces { needed } else { aces };
    raw_sum - ACE_DEMOTION * demoted
}

fn evaluate<'a>(cards: impl Iterator<Item = &'a HandCard>) -> u16 {
    let (raw_sum, aces) = cards.fold((0u16, 0u16), |(sum, aces), card| {
        (
            sum + u16::from(card_value(card.rank())),
            aces + u16::from(card.is_ace()),
        )
    });
    soft_total(raw_sum, aces)
}

/// Side of the table holding a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// An ordered, append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<HandCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: HandCard) {
        self.cards.push(card);
    }

    /// Adds a face-up card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.push(card.face_up());
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 unless that would bust the hand, in which case
    /// as many as needed are counted as 1. With `only_visible`, face-down
    /// cards are ignored.
    #[must_use]
    pub fn value(&self, only_visible: bool) -> u16 {
        evaluate(
            self.cards
                .iter()
                .filter(|card| !(only_visible && card.hidden)),
        )
    }

    /// Calculates the value of every card, face-down ones included.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.value(false)
    }

    /// Calculates the value of the face-up cards.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        self.value(true)
    }

    /// Returns whether the full total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns the value to display for the `ace_ordinal`-th visible Ace.
    ///
    /// Unlike [`Hand::value`], the demotion is all-or-nothing: if the visible
    /// cards total more than 21 with every Ace high, every Ace shows 1,
    /// otherwise every Ace shows 11. An ordinal past the last visible Ace
    /// shows 11.
    #[must_use]
    pub fn ace_display_value(&self, ace_ordinal: usize) -> u8 {
        let visible = || self.cards.iter().filter(|card| !card.hidden);
        let high_total: u16 = visible()
            .map(|card| u16::from(card_value(card.rank())))
            .sum();

        let ace = visible().filter(|card| card.is_ace()).nth(ace_ordinal);
        match ace {
            Some(_) if high_total > BLACKJACK => 1,
            _ => card_value(Rank::Ace),
        }
    }

    /// Turns the first card face up.
    ///
    /// Returns `true` if it was face down.
    pub fn reveal_first(&mut self) -> bool {
        match self.cards.first_mut() {
            Some(card) if card.hidden => {
                card.hidden = false;
                true
            }
            _ => false,
        }
    }

    /// Returns whether the first card is face down.
    #[must_use]
    pub fn is_first_hidden(&self) -> bool {
        self.cards.first().is_some_and(|card| card.hidden)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<HandCard> for Hand {
    fn from_iter<I: IntoIterator<Item = HandCard>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
