use core::sync::atomic::Ordering;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::{DealError, SettleError};
use crate::result::{Outcome, RoundResult, compare};

use super::{Dealt, Game, Phase, Session, Ticket};

impl Game {
    /// Takes the top two cards, replacing the deck first if it runs short.
    ///
    /// Returns the player's card, the opponent's card and whether the deck
    /// was replaced.
    fn draw_pair(&self) -> (Card, Card, bool) {
        let mut deck = self.deck.lock();

        let reshuffled = deck.len() < 2;
        if reshuffled {
            debug!(remaining = deck.len(), "deck exhausted, reshuffling");
            *deck = self.fresh_deck();
        }

        let player = deck.remove(0);
        let opponent = deck.remove(0);
        (player, opponent, reshuffled)
    }

    /// Deals one round.
    ///
    /// The player gets the top card and the opponent the next one. The
    /// score and streak are updated here, exactly once per accepted deal.
    /// With [`GameOptions::staged_reveal`](crate::GameOptions::staged_reveal)
    /// on, the round then stays in flight until it is advanced to
    /// [`Phase::Waiting`] or settled with the returned ticket.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InProgress`] without touching any state if a
    /// previous round is still in flight.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{DealError, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let dealt = game.deal().unwrap();
    /// assert_eq!(game.deal().unwrap_err(), DealError::InProgress);
    ///
    /// game.settle(dealt.ticket).unwrap();
    /// assert!(game.deal().is_ok());
    /// ```
    pub fn deal(&self) -> Result<Dealt, DealError> {
        // The flag is claimed and released only under the session lock.
        let mut session = self.session.lock();
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            drop(session);
            trace!("deal ignored, round in flight");
            return Err(DealError::InProgress);
        }

        let (player, opponent, reshuffled) = self.draw_pair();
        let outcome = compare(player, opponent);

        session.score.record(outcome.result);
        session.hand = Some(outcome);

        let ticket = Ticket {
            epoch: self.epoch.load(Ordering::SeqCst),
            round: session.score.rounds_played,
        };

        debug!(
            round = ticket.round,
            %player,
            %opponent,
            result = %outcome.result,
            "round dealt"
        );

        if self.options.staged_reveal {
            session.phase = Phase::Dealing;
            session.pending = Some(ticket);
        } else {
            self.finish(&mut session);
        }
        drop(session);

        Ok(Dealt {
            ticket,
            outcome,
            reshuffled,
        })
    }

    /// Moves the round in flight to its next display phase.
    ///
    /// `Dealing` goes to `Revealing`; `Revealing` goes to `Celebrating`
    /// after a win when celebrations are on, otherwise to `Waiting`;
    /// `Celebrating` goes to `Waiting`. Reaching `Waiting` settles the
    /// round. The score is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Stale`] if `ticket` is not the round in flight.
    pub fn advance(&self, ticket: Ticket) -> Result<Phase, SettleError> {
        let mut session = self.session.lock();
        Self::check_ticket(&session, ticket)?;

        let won = session.hand.is_some_and(|hand| hand.result == RoundResult::Win);
        let next = match session.phase {
            Phase::Dealing => Phase::Revealing,
            Phase::Revealing if won && self.options.celebrate_wins => Phase::Celebrating,
            Phase::Revealing | Phase::Celebrating | Phase::Waiting => Phase::Waiting,
        };

        if next == Phase::Waiting {
            self.finish(&mut session);
        } else {
            session.phase = next;
        }
        drop(session);

        Ok(next)
    }

    /// Settles the round in flight, skipping any remaining display phases.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Stale`] if `ticket` is not the round in flight.
    pub fn settle(&self, ticket: Ticket) -> Result<(), SettleError> {
        let mut session = self.session.lock();
        Self::check_ticket(&session, ticket)?;
        self.finish(&mut session);
        drop(session);
        Ok(())
    }

    /// Deals a round and settles it right away.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InProgress`] if a round is already in flight.
    pub fn play_round(&self) -> Result<Outcome, DealError> {
        let dealt = self.deal()?;
        if self.options.staged_reveal {
            // Only a reset can have retired the ticket in between.
            let _ = self.settle(dealt.ticket);
        }
        Ok(dealt.outcome)
    }

    fn check_ticket(session: &Session, ticket: Ticket) -> Result<(), SettleError> {
        if session.pending == Some(ticket) {
            Ok(())
        } else {
            trace!(?ticket, "stale ticket ignored");
            Err(SettleError::Stale)
        }
    }

    /// Returns the table to `Waiting` and releases the in-flight guard.
    fn finish(&self, session: &mut Session) {
        session.phase = Phase::Waiting;
        session.pending = None;
        self.busy.store(false, Ordering::SeqCst);
    }
}
