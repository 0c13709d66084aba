//! Game engine and session state management.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::shuffled_deck;
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::score::Score;

mod round;
pub mod state;

pub use state::{Dealt, Phase, Snapshot, Ticket};

/// Mutable state of one session. Replaced wholesale on reset.
#[derive(Debug, Default)]
struct Session {
    hand: Option<Outcome>,
    score: Score,
    phase: Phase,
    pending: Option<Ticket>,
}

/// A high-card game engine that owns the deck, the score and the round flow.
///
/// Every operation takes `&self`; the game can be shared between an input
/// handler and timers. At most one round is in flight at a time: a deal is
/// accepted only once the previous round has been settled.
pub struct Game {
    /// Cards left in the deck. The first card is the top of the deck.
    pub deck: Mutex<Vec<Card>>,
    /// Game options.
    pub options: GameOptions,
    /// Hand, score, phase and in-flight ticket.
    session: Mutex<Session>,
    /// Set while a round is in flight.
    busy: AtomicBool,
    /// Session counter, bumped on reset so older tickets go stale.
    epoch: AtomicU32,
    /// Front-end auto-deal toggle. Survives resets.
    auto_deal: AtomicBool,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{DECK_SIZE, Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// assert_eq!(game.phase(), Phase::Waiting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = shuffled_deck(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            session: Mutex::new(Session::default()),
            busy: AtomicBool::new(false),
            epoch: AtomicU32::new(0),
            auto_deal: AtomicBool::new(false),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a freshly shuffled full deck.
    fn fresh_deck(&self) -> Vec<Card> {
        shuffled_deck(&mut *self.rng.lock())
    }

    /// Starts a new session.
    ///
    /// Installs a freshly shuffled deck, zeroes the score, clears the hand
    /// and drops any round in flight. Timers still holding a ticket from
    /// before the reset become inert.
    #[instrument(level = "info", skip_all)]
    pub fn reset(&self) {
        let mut session = self.session.lock();
        let deck = self.fresh_deck();
        *self.deck.lock() = deck;
        *session = Session::default();

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.busy.store(false, Ordering::SeqCst);
        drop(session);

        debug!(epoch, "session reset");
    }

    /// Switches the auto-deal toggle.
    ///
    /// Auto-deal ticks should call [`Game::deal`] every
    /// [`GameOptions::auto_deal_interval_ms`]; the in-flight guard applies
    /// to them like any other deal.
    pub fn set_auto_deal(&self, enabled: bool) {
        self.auto_deal.store(enabled, Ordering::SeqCst);
    }

    /// Returns whether auto-deal is switched on.
    pub fn auto_deal(&self) -> bool {
        self.auto_deal.load(Ordering::SeqCst)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current display phase.
    pub fn phase(&self) -> Phase {
        self.session.lock().phase
    }

    /// Returns the last dealt hand.
    pub fn hand(&self) -> Option<Outcome> {
        self.session.lock().hand
    }

    /// Returns the session score.
    pub fn score(&self) -> Score {
        self.session.lock().score
    }

    /// Returns the ticket of the round in flight, if any.
    pub fn pending(&self) -> Option<Ticket> {
        self.session.lock().pending
    }

    /// Returns whether a round is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Returns a consistent view of the game for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let session = self.session.lock();
        let cards_remaining = self.cards_remaining();

        Snapshot {
            phase: session.phase,
            hand: session.hand,
            score: session.score,
            cards_remaining,
            auto_deal: self.auto_deal(),
        }
    }
}
