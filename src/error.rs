//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A previous round has not been settled yet.
    #[error("a round is already in progress")]
    InProgress,
}

/// Errors that can occur when advancing or settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The ticket does not belong to the round in flight.
    #[error("ticket does not match the round in flight")]
    Stale,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card string")]
    Empty,
    /// Rank label was not recognized.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit symbol or letter was not recognized.
    #[error("invalid suit")]
    InvalidSuit,
}
