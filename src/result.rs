//! Round resolution.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundResult {
    /// Player's card is higher.
    Win,
    /// Opponent's card is higher.
    Lose,
    /// Both cards have the same value. Suits never break ties.
    Draw,
}

impl RoundResult {
    /// Returns the same result seen from the opponent's side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Returns the lowercase name of the result.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two cards of a round and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Card dealt to the player.
    pub player: Card,
    /// Card dealt to the opponent.
    pub opponent: Card,
    /// The round result.
    pub result: RoundResult,
}

/// Compares two cards by value.
///
/// ```
/// use highcard::{Card, Rank, RoundResult, Suit, compare};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let two = Card::new(Suit::Hearts, Rank::Two);
/// assert_eq!(compare(ace, two).result, RoundResult::Win);
/// ```
#[must_use]
pub fn compare(player: Card, opponent: Card) -> Outcome {
    let result = match player.value().cmp(&opponent.value()) {
        Ordering::Greater => RoundResult::Win,
        Ordering::Less => RoundResult::Lose,
        Ordering::Equal => RoundResult::Draw,
    };

    Outcome {
        player,
        opponent,
        result,
    }
}
