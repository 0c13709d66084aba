//! Card types.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits only tell cards apart; they never take part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "♠" | "s" | "S" => Some(Self::Spades),
            "♥" | "h" | "H" => Some(Self::Hearts),
            "♦" | "d" | "D" => Some(Self::Diamonds),
            "♣" | "c" | "C" => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank, ordered from lowest (two) to highest (ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// 10.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace, the highest rank.
    Ace = 14,
}

impl Rank {
    /// All ranks in canonical deck order (ace first).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Returns the comparison value (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the short label printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        let rank = match token {
            "A" | "a" => Self::Ace,
            "K" | "k" => Self::King,
            "Q" | "q" => Self::Queen,
            "J" | "j" => Self::Jack,
            "10" | "T" | "t" => Self::Ten,
            "9" => Self::Nine,
            "8" => Self::Eight,
            "7" => Self::Seven,
            "6" => Self::Six,
            "5" => Self::Five,
            "4" => Self::Four,
            "3" => Self::Three,
            "2" => Self::Two,
            _ => return None,
        };
        Some(rank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Returns the comparison value. Suit never contributes.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns the identifier of this card, e.g. `"A♠"` or `"10♥"`.
    ///
    /// Identifiers are unique within a deck.
    #[must_use]
    pub fn id(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank label followed by a suit symbol or letter.
    ///
    /// ```
    /// use highcard::{Card, Rank, Suit};
    ///
    /// let card: Card = "10♥".parse().unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
    /// assert_eq!("qs".parse::<Card>().unwrap(), Card::new(Suit::Spades, Rank::Queen));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };
        let (rank, suit) = s.split_at(split);

        let rank = Rank::from_token(rank).ok_or(ParseCardError::InvalidRank)?;
        let suit = Suit::from_token(suit).ok_or(ParseCardError::InvalidSuit)?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
