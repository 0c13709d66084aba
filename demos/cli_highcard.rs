//! CLI high-card example.
//!
//! Set `RUST_LOG=highcard=debug` to watch the engine's logs.

use std::io::{self, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use highcard::{Card, Game, GameOptions, Phase, RoundResult, Snapshot, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "highcard=info".into()),
        )
        .init();

    println!("High card CLI example");
    println!("[enter]/d deal, a <n> auto-deal n rounds, r reset, q quit");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let input = prompt_line("> ");
        let mut words = input.split_whitespace();

        match words.next().unwrap_or("d") {
            "d" | "deal" => deal_and_reveal(&game),
            "a" | "auto" => {
                let rounds = words.next().and_then(|n| n.parse().ok()).unwrap_or(10);
                auto_deal(&game, rounds);
            }
            "r" | "reset" => {
                game.reset();
                println!("New session.");
            }
            "q" | "quit" => break,
            _ => {
                println!("Unknown command.");
                continue;
            }
        }

        print_score(&game.snapshot());
    }
}

/// Deals one round and walks it through every display phase.
fn deal_and_reveal(game: &Game) {
    let dealt = match game.deal() {
        Ok(dealt) => dealt,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    if dealt.reshuffled {
        println!("Deck reshuffled.");
    }

    let outcome = dealt.outcome;
    println!(
        "You: {}   Opponent: {}",
        format_card(outcome.player),
        format_card(outcome.opponent)
    );

    while let Ok(phase) = game.advance(dealt.ticket) {
        match phase {
            Phase::Revealing => println!("{}", status(outcome.result)),
            Phase::Celebrating => println!("{}", colorize("*** WIN ***", "33")),
            Phase::Waiting | Phase::Dealing => break,
        }
    }
}

fn auto_deal(game: &Game, rounds: u32) {
    game.set_auto_deal(true);
    let interval = Duration::from_millis(u64::from(game.options.auto_deal_interval_ms));

    for _ in 0..rounds {
        if !game.auto_deal() {
            break;
        }
        deal_and_reveal(game);
        std::thread::sleep(interval);
    }

    game.set_auto_deal(false);
}

fn status(result: RoundResult) -> &'static str {
    match result {
        RoundResult::Win => "You won the round!",
        RoundResult::Lose => "The opponent won the round.",
        RoundResult::Draw => "Draw.",
    }
}

fn print_score(snapshot: &Snapshot) {
    let score = snapshot.score;
    println!(
        "Rounds {} | You {} | Opponent {} | Streak {} (best {}) | Win rate {}% | Deck {}",
        score.rounds_played,
        score.player_wins,
        score.opponent_wins,
        score.streak,
        score.best_streak,
        snapshot.win_rate(),
        snapshot.cards_remaining,
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
