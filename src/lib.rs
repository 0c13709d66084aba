//! A high-card comparison game engine with optional `no_std` support.
//!
//! A shuffled deck deals one card to the player and one to the opponent;
//! the higher card wins the round. The crate provides the deck model, an
//! injectable Fisher-Yates shuffle, the round resolver and a [`Game`] type
//! that keeps score, reshuffles on depletion and never lets two deals
//! overlap.
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default().with_staged_reveal(false), 42);
//! let outcome = game.deal().unwrap().outcome;
//! assert_eq!(game.score().rounds_played, 1);
//! let _ = outcome.result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{create_deck, shuffle, shuffle_with, shuffle_with_unit, shuffled_deck};
pub use error::{DealError, ParseCardError, SettleError};
pub use game::{Dealt, Game, Phase, Snapshot, Ticket};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, compare};
pub use score::Score;
