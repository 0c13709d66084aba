//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Creates an unshuffled deck in canonical order.
///
/// Cards are laid out suit by suit (♠, ♥, ♦, ♣), ace down to two within
/// each suit. Every call returns the same order.
///
/// ```
/// use highcard::{DECK_SIZE, create_deck};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].to_string(), "A♠");
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `items`, leaving `items` untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    shuffle_with(items, |upper| rng.random_range(0..=upper))
}

/// Fisher-Yates shuffle with an injected index source.
///
/// For each `i` from `len - 1` down to `1`, `pick(i)` must return an index
/// in `0..=i`; larger values are clamped to `i`. Feeding a fixed sequence
/// makes the resulting permutation fully predictable.
///
/// ```
/// use highcard::shuffle_with;
///
/// // Always picking 0 rotates the first element to the back.
/// let shuffled = shuffle_with(&[1, 2, 3, 4], |_| 0);
/// assert_eq!(shuffled, vec![2, 3, 4, 1]);
/// ```
pub fn shuffle_with<T: Clone, F: FnMut(usize) -> usize>(items: &[T], mut pick: F) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = pick(i).min(i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Fisher-Yates shuffle driven by unit floats in `[0, 1)`.
///
/// The index for step `i` is `floor(x * (i + 1))`.
pub fn shuffle_with_unit<T: Clone, F: FnMut() -> f64>(items: &[T], mut next: F) -> Vec<T> {
    shuffle_with(items, |upper| unit_index(next(), upper))
}

/// Maps a unit float onto `0..=upper`.
#[expect(
    clippy::cast_precision_loss,
    reason = "deck-sized indices are exact in f64"
)]
fn unit_index(x: f64, upper: usize) -> usize {
    (x * (upper + 1) as f64) as usize
}

/// Creates a full deck and shuffles it.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(&create_deck(), rng)
}
