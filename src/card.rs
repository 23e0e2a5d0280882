//! Card types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts.
    #[serde(rename = "h")]
    Hearts,
    /// Diamonds.
    #[serde(rename = "d")]
    Diamonds,
    /// Clubs.
    #[serde(rename = "c")]
    Clubs,
    /// Spades.
    #[serde(rename = "s")]
    Spades,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol used when rendering a card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

/// Card rank, from Two through Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "T", alias = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "J")]
    Jack,
    /// Queen.
    #[serde(rename = "Q")]
    Queen,
    /// King.
    #[serde(rename = "K")]
    King,
    /// Ace.
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// All thirteen ranks in deck construction order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the short label of the rank (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Places the card face up in a hand.
    #[must_use]
    pub const fn face_up(self) -> HandCard {
        HandCard {
            card: self,
            hidden: false,
        }
    }

    /// Places the card face down in a hand.
    #[must_use]
    pub const fn face_down(self) -> HandCard {
        HandCard {
            card: self,
            hidden: true,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// A card held in a hand.
///
/// `hidden` only controls whether the card counts towards visible totals and
/// rendering; the card is owned by the hand either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandCard {
    /// The underlying card.
    #[serde(flatten)]
    pub card: Card,
    /// Whether the card is face down.
    pub hidden: bool,
}

impl HandCard {
    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.card.rank
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.card.rank.is_ace()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_rank_label_and_suit_symbol() {
        let card = Card::new(Suit::Spades, Rank::Ace);
        assert_eq!(alloc::format!("{card}"), "A♠");
        let ten = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(alloc::format!("{ten}"), "10♥");
    }

    #[test]
    fn hand_card_serializes_flat() {
        let json = serde_json::to_string(&Card::new(Suit::Diamonds, Rank::Ten).face_down()).unwrap();
        assert_eq!(json, r#"{"suit":"d","rank":"T","hidden":true}"#);

        let parsed: HandCard =
            serde_json::from_str(r#"{"suit":"c","rank":"10","hidden":false}"#).unwrap();
        assert_eq!(parsed, Card::new(Suit::Clubs, Rank::Ten).face_up());
    }
}
