//! Score and streak bookkeeping.

use crate::result::RoundResult;

#[cfg(feature = "std")]
fn round_percent(percent: f64) -> u8 {
    percent.round() as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_percent(percent: f64) -> u8 {
    libm::round(percent) as u8
}

/// Cumulative score for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the opponent.
    pub opponent_wins: u32,
    /// Rounds played, draws included.
    pub rounds_played: u32,
    /// Current run of consecutive wins.
    pub streak: u32,
    /// Longest run of consecutive wins this session.
    pub best_streak: u32,
}

impl Score {
    /// Applies the result of one round.
    pub const fn record(&mut self, result: RoundResult) {
        self.rounds_played += 1;

        match result {
            RoundResult::Win => {
                self.player_wins += 1;
                self.streak += 1;
            }
            RoundResult::Lose => {
                self.opponent_wins += 1;
                self.streak = 0;
            }
            RoundResult::Draw => self.streak = 0,
        }

        if self.streak > self.best_streak {
            self.best_streak = self.streak;
        }
    }

    /// Rounds that ended in a draw.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.rounds_played - self.player_wins - self.opponent_wins
    }

    /// Player win rate as a whole percentage, rounded half up.
    ///
    /// Returns 0 before any round has been played.
    ///
    /// ```
    /// use highcard::{RoundResult, Score};
    ///
    /// let mut score = Score::default();
    /// score.record(RoundResult::Win);
    /// score.record(RoundResult::Lose);
    /// score.record(RoundResult::Lose);
    /// assert_eq!(score.win_rate(), 33);
    /// ```
    #[must_use]
    pub fn win_rate(&self) -> u8 {
        if self.rounds_played == 0 {
            return 0;
        }

        let ratio = f64::from(self.player_wins) / f64::from(self.rounds_played);
        round_percent(ratio * 100.0)
    }
}
