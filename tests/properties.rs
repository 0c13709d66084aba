//! Property tests for shuffling, resolution and score bookkeeping.

use std::collections::HashSet;

use highcard::{
    Card, DECK_SIZE, Game, GameOptions, RoundResult, compare, create_deck, shuffle, shuffle_with,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE).prop_map(|index| create_deck()[index])
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}

proptest! {
    /// Property: shuffling keeps the same multiset and never touches the input.
    #[test]
    fn prop_shuffle_is_permutation(items in prop::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
        let before = items.clone();
        let shuffled = shuffle(&items, &mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(&items, &before);
        prop_assert_eq!(sorted(&shuffled), sorted(&items));
    }

    /// Property: any in-range pick sequence still yields a permutation.
    #[test]
    fn prop_shuffle_with_any_picks_is_permutation(
        items in prop::collection::vec(any::<u16>(), 0..32),
        picks in prop::collection::vec(any::<usize>(), 32),
    ) {
        let mut picks = picks.into_iter();
        let shuffled = shuffle_with(&items, |upper| picks.next().unwrap_or(0) % (upper + 1));
        prop_assert_eq!(sorted(&shuffled), sorted(&items));
    }

    /// Property: a shuffled deck is still the full deck.
    #[test]
    fn prop_shuffled_deck_is_complete(seed in any::<u64>()) {
        let deck = shuffle(&create_deck(), &mut ChaCha8Rng::seed_from_u64(seed));
        let unique: HashSet<Card> = deck.iter().copied().collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    /// Property: results follow the card values and mirror when the seats swap.
    #[test]
    fn prop_compare_is_antisymmetric(a in any_card(), b in any_card()) {
        let forward = compare(a, b).result;
        let backward = compare(b, a).result;

        prop_assert_eq!(forward == RoundResult::Win, a.value() > b.value());
        prop_assert_eq!(forward == RoundResult::Lose, a.value() < b.value());
        prop_assert_eq!(forward == RoundResult::Win, backward == RoundResult::Lose);
        prop_assert_eq!(backward, forward.reversed());
    }

    /// Property: a card always draws against itself.
    #[test]
    fn prop_compare_self_is_draw(a in any_card()) {
        prop_assert_eq!(compare(a, a).result, RoundResult::Draw);
    }

    /// Property: score counters stay consistent over any run of rounds.
    #[test]
    fn prop_score_is_consistent(seed in any::<u64>(), rounds in 1usize..80) {
        let game = Game::new(GameOptions::default(), seed);
        let mut longest = 0;
        let mut run = 0;

        for _ in 0..rounds {
            let outcome = game.play_round().unwrap();
            if outcome.result == RoundResult::Win {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }

        let score = game.score();
        prop_assert_eq!(score.rounds_played as usize, rounds);
        prop_assert_eq!(score.player_wins + score.opponent_wins + score.draws(), score.rounds_played);
        prop_assert_eq!(score.streak, run);
        prop_assert_eq!(score.best_streak, longest);
        prop_assert!(score.win_rate() <= 100);

        let expected_remaining = DECK_SIZE - 2 * ((rounds - 1) % (DECK_SIZE / 2) + 1);
        prop_assert_eq!(game.cards_remaining(), expected_remaining);
    }
}
