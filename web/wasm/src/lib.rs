use highcard::{Card, Dealt, Game, GameOptions, Outcome, Score, Suit, Ticket};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&self) {
        self.game.reset();
    }

    /// Deals a round. Returns `null` when a round is still in flight.
    pub fn deal(&self) -> Result<JsValue, JsValue> {
        match self.game.deal() {
            Ok(dealt) => to_js_value(&JsDealt::from(dealt)),
            Err(_) => Ok(JsValue::NULL),
        }
    }

    /// Moves the round to its next phase. Returns `null` for stale tickets.
    pub fn advance(&self, epoch: u32, round: u32) -> Option<String> {
        self.game
            .advance(Ticket { epoch, round })
            .ok()
            .map(|phase| phase.as_str().to_string())
    }

    /// Settles the round. Returns `false` for stale tickets.
    pub fn settle(&self, epoch: u32, round: u32) -> bool {
        self.game.settle(Ticket { epoch, round }).is_ok()
    }

    /// Handles a `keyup` key. Returns the command it triggered, if any.
    pub fn handle_key(&self, key: &str) -> Result<JsValue, JsValue> {
        match Command::from_key(key) {
            Some(Command::Deal) => self.deal(),
            Some(Command::Reset) => {
                self.reset();
                Ok(JsValue::from_str("reset"))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn set_auto_deal(&self, enabled: bool) {
        self.game.set_auto_deal(enabled);
    }

    pub fn auto_deal_interval_ms(&self) -> u32 {
        self.game.options.auto_deal_interval_ms
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.game.snapshot();

        let js = Snapshot {
            phase: snapshot.phase.as_str(),
            can_deal: snapshot.can_deal(),
            hand: snapshot.hand.map(JsHand::from),
            score: JsScore::from(snapshot.score),
            win_rate: snapshot.win_rate(),
            cards_remaining: snapshot.cards_remaining as u32,
            auto_deal: snapshot.auto_deal,
        };

        to_js_value(&js)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Deal,
    Reset,
}

impl Command {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Enter" => Some(Self::Deal),
            "r" | "R" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    can_deal: bool,
    hand: Option<JsHand>,
    score: JsScore,
    win_rate: u8,
    cards_remaining: u32,
    auto_deal: bool,
}

#[derive(Serialize)]
struct JsCard {
    id: String,
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsHand {
    player: JsCard,
    opponent: JsCard,
    result: &'static str,
}

impl From<Outcome> for JsHand {
    fn from(outcome: Outcome) -> Self {
        Self {
            player: card_to_js(outcome.player),
            opponent: card_to_js(outcome.opponent),
            result: outcome.result.as_str(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    player: u32,
    opponent: u32,
    rounds: u32,
    streak: u32,
    best_streak: u32,
}

impl From<Score> for JsScore {
    fn from(score: Score) -> Self {
        Self {
            player: score.player_wins,
            opponent: score.opponent_wins,
            rounds: score.rounds_played,
            streak: score.streak,
            best_streak: score.best_streak,
        }
    }
}

#[derive(Serialize)]
struct JsDealt {
    epoch: u32,
    round: u32,
    hand: JsHand,
    reshuffled: bool,
}

impl From<Dealt> for JsDealt {
    fn from(dealt: Dealt) -> Self {
        Self {
            epoch: dealt.ticket.epoch,
            round: dealt.ticket.round,
            hand: JsHand::from(dealt.outcome),
            reshuffled: dealt.reshuffled,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id(),
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "spades",
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Clubs => "clubs",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key(" "), Some(Command::Deal));
        assert_eq!(Command::from_key("Enter"), Some(Command::Deal));
        assert_eq!(Command::from_key("R"), Some(Command::Reset));
        assert_eq!(Command::from_key("x"), None);
    }
}
