//! CLI round example.
//!
//! Plays rounds against a JSON state file the way a hosted orchestrator
//! would: load the round, apply one action, persist the result.
//!
//! ```text
//! cargo run --example cli_round -- [state-file]
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use bjround::{
    Action, Game, GameOptions, GameState, Hand, HandCard, Owner, Phase, Rank, StateError, Suit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("game_state_blackjack.json"), PathBuf::from);
    let actor = env::var("USER").unwrap_or_else(|_| "player".to_string());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    println!("Blackjack round CLI (state file: {})", path.display());

    loop {
        let state = match load(&path) {
            Ok(state) => state,
            Err(err) => {
                println!("Ignoring stored round: {err}");
                None
            }
        };
        if let Some(state) = &state {
            print_table(state);
        }

        let input = prompt_line("Action (Hit, Stand, New Game, q): ");
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        let Ok(requested) = input.parse::<Action>() else {
            let labels: Vec<&str> = Action::REQUESTABLE.iter().map(|a| a.label()).collect();
            println!("Unknown action. Use one of: {}", labels.join(", "));
            continue;
        };

        match (Action::effective(requested, Phase::of(state.as_ref())), state) {
            (Action::NewGame, _) => match game.new_round(&actor) {
                Ok(state) => {
                    println!("A new game has been started.");
                    save(&path, &state);
                }
                Err(err) => println!("Deal error: {err}"),
            },
            (Action::Finished, _) => {
                println!("The game has already finished: you need to start a new game.");
            }
            (_, None) => println!("No active round: start a new game first."),
            (Action::Hit, Some(mut state)) => match game.hit(&mut state, &actor) {
                Ok(Some(result)) => {
                    println!("{}", announce(result.winner));
                    save(&path, &state);
                }
                Ok(None) => {
                    println!("Player got a new card.");
                    save(&path, &state);
                }
                Err(err) => println!("Hit failed, round left unchanged: {err}"),
            },
            (Action::Stand, Some(mut state)) => match game.stand(&mut state, &actor) {
                Ok(result) => {
                    println!("{}", announce(result.winner));
                    save(&path, &state);
                }
                Err(err) => println!("Stand failed, round left unchanged: {err}"),
            },
        }
    }
}

fn load(path: &Path) -> Result<Option<GameState>, StateError> {
    match fs::read_to_string(path) {
        Ok(record) => GameState::from_json(&record),
        Err(_) => Ok(None),
    }
}

fn save(path: &Path, state: &GameState) {
    let written = state
        .to_json_pretty()
        .map_err(|err| err.to_string())
        .and_then(|record| fs::write(path, record).map_err(|err| err.to_string()));
    if let Err(err) = written {
        println!("Could not save round: {err}");
    }
}

fn announce(winner: bjround::Winner) -> String {
    match winner {
        bjround::Winner::Tie => "The game was a Tie.".to_string(),
        other => format!("The {other:?} won the game."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.deck.len());
    for owner in [Owner::Dealer, Owner::Player] {
        let hand = state.hand(owner);
        println!(
            "{owner:?}: {} (value {})",
            format_hand(hand),
            hand.visible_value()
        );
    }
    if let Some(winner) = state.winner {
        println!(
            "Result: {winner:?} (player {:?})",
            winner.outcome_for(Owner::Player)
        );
    }
    if let Some(entry) = state.history.last() {
        println!("Last action: {} by {}", entry.action, entry.actor);
        for event in entry.events() {
            println!("  - {}", event.step);
        }
    }
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    let mut ace_ordinal = 0;
    hand.cards()
        .iter()
        .map(|card| {
            if card.hidden {
                return "??".to_string();
            }
            let text = format_card(card);
            if card.is_ace() {
                let value = hand.ace_display_value(ace_ordinal);
                ace_ordinal += 1;
                format!("{text}({value})")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &HandCard) -> String {
    let color_code = match card.card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    let text = card.card.to_string();
    if matches!(card.rank(), Rank::Jack | Rank::Queen | Rank::King | Rank::Ace) {
        colorize(&text, color_code)
    } else {
        text
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
