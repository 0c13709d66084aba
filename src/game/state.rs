//! Game state types.

use crate::result::{Outcome, RoundResult};
use crate::score::Score;

/// Display phase of the table.
///
/// Phases drive presentation only; the score is already final by the time
/// a round leaves [`Phase::Waiting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready for the next deal.
    #[default]
    Waiting,
    /// Cards are on the table, face down.
    Dealing,
    /// Cards are face up and the result is shown.
    Revealing,
    /// The player won and the win is being celebrated.
    Celebrating,
}

impl Phase {
    /// Returns the phase name used by front-ends.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Dealing => "dealing",
            Self::Revealing => "revealing",
            Self::Celebrating => "celebrating",
        }
    }
}

/// Identifies an in-flight round.
///
/// Tickets issued before a reset never match again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    /// Session the round belongs to. Bumped on every reset.
    pub epoch: u32,
    /// Round number within the session, starting at 1.
    pub round: u32,
}

/// Result of an accepted deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealt {
    /// Ticket for staging and settling this round.
    pub ticket: Ticket,
    /// The cards and the result.
    pub outcome: Outcome,
    /// Whether the deck was replaced before dealing.
    pub reshuffled: bool,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current display phase.
    pub phase: Phase,
    /// Last dealt hand, if any since the last reset.
    pub hand: Option<Outcome>,
    /// Session score.
    pub score: Score,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Whether auto-deal is switched on.
    pub auto_deal: bool,
}

impl Snapshot {
    /// Returns whether a deal would be accepted.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.phase == Phase::Waiting
    }

    /// Player win rate as a whole percentage.
    #[must_use]
    pub fn win_rate(&self) -> u8 {
        self.score.win_rate()
    }

    /// Result of the last hand.
    #[must_use]
    pub fn last_result(&self) -> Option<RoundResult> {
        self.hand.map(|hand| hand.result)
    }
}
