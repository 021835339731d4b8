//! CLI Switch example.
//!
//! Set `RUST_LOG=switchrs=debug` to follow the engine's decisions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use switchrs::{
    Card, Game, GameOptions, Player, PlayerSummary, RoundError, RoundObserver, StrategyKind,
    TableView, TurnOutcome, UserInput,
};
use tracing_subscriber::EnvFilter;

const AI_NAMES: [&str; 4] = ["Angela", "Bart", "Charly", "Dorothy"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Welcome to Switch v1.1");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        println!("\nPlease select from one of the following options: [1-2]");
        println!("1 - New Game");
        println!("2 - Exit");
        if prompt_range(1, 2) != 1 {
            break;
        }

        let options = GameOptions::default();
        let mut game = Game::new(options.clone(), seed);
        for player in create_players(options.max_players, seed) {
            if let Err(err) = game.add_player(player) {
                println!("Setup error: {err}");
            }
        }

        match game.run_round(&mut ConsoleObserver) {
            Ok(_) => {}
            Err(RoundError::Stalled) => println!("Nobody can move any more. The round is a draw."),
            Err(err) => println!("Round error: {err}"),
        }

        seed = seed.wrapping_add(1);
    }

    println!("Goodbye!");
}

/// Asks for human players and fills the table with computer players.
fn create_players(max_players: usize, seed: u64) -> Vec<Player> {
    let mut players = Vec::new();

    println!("\nHow many human players [1-{max_players}]:");
    let humans = prompt_range(1, max_players);
    for index in 0..humans {
        println!("Please enter the name of player {}:", index + 1);
        players.push(Player::human(prompt_line(), ConsoleInput));
    }

    // At least two players must take part.
    let min_ai = usize::from(humans < 2);
    let max_ai = (max_players - humans).min(AI_NAMES.len());
    let ai_count = if max_ai == 0 {
        0
    } else {
        println!("\nHow many ai players [{min_ai}-{max_ai}]:");
        prompt_range(min_ai, max_ai)
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for (index, name) in AI_NAMES.iter().take(ai_count).enumerate() {
        let strategy_seed = seed.wrapping_add(index as u64 + 1);
        let player = if rng.random_bool(0.5) {
            Player::with_boxed_strategy(*name, StrategyKind::Random.build(strategy_seed))
        } else {
            Player::with_boxed_strategy(
                format!("Smart {name}"),
                StrategyKind::Heuristic.build(strategy_seed),
            )
        };
        players.push(player);
    }

    players
}

/// Reads decisions of human players from standard input.
struct ConsoleInput;

impl UserInput for ConsoleInput {
    fn select_card(&mut self, choices: &[Card]) -> Option<Card> {
        println!(
            "Please select from one of the following cards: [1-{}]",
            choices.len()
        );
        println!("0 - draw a card");
        for (index, card) in choices.iter().enumerate() {
            println!("{} - {card}", index + 1);
        }

        let choice = prompt_range(0, choices.len());
        choice.checked_sub(1).and_then(|i| choices.get(i)).copied()
    }

    fn select_player(&mut self, players: &[PlayerSummary]) -> usize {
        println!(
            "Please select from one of the following players: [1-{}]",
            players.len()
        );
        for (index, player) in players.iter().enumerate() {
            println!("{} - {} = {}", index + 1, player.name, player.hand_size);
        }

        prompt_range(1, players.len()) - 1
    }
}

/// Prints the table before and after every turn.
struct ConsoleObserver;

impl RoundObserver for ConsoleObserver {
    fn on_turn_start(&mut self, view: &TableView<'_>) {
        println!("\nHANDS: {:?}", view.hand_sizes);
        println!("PLAYER: {}", view.player.name());
        if !view.player.is_ai() {
            println!("HAND: {}", format_cards(view.player.hand.cards()));
        }
        match view.top_card {
            Some(card) => println!("TOP CARD: {card}"),
            None => println!("TOP CARD: (none)"),
        }
    }

    fn on_turn_end(&mut self, player: &Player, outcome: &TurnOutcome) {
        let name = player.name();
        match *outcome {
            TurnOutcome::Skipped => println!("{name} is skipped"),
            TurnOutcome::Penalized { drawn } => println!("{name} picks up {drawn} card(s)"),
            TurnOutcome::Discarded(card) | TurnOutcome::Won(card) => {
                println!("Discarded: {card}\n");
            }
            TurnOutcome::Drew {
                card: Some(card),
                discarded: true,
            } => {
                println!("{name} draws a card");
                println!("Discarded: {card}\n");
            }
            TurnOutcome::Drew {
                card: Some(card),
                discarded: false,
            } => {
                println!("{name} draws a card");
                if !player.is_ai() {
                    println!("Unable to discard card: {card}");
                }
            }
            TurnOutcome::Drew { card: None, .. } => println!("The stock is empty"),
        }
    }

    fn on_round_over(&mut self, winner: &Player) {
        println!("\n{}", "-".repeat(80));
        println!("Woohoo!!! Winner of the game is: {}", winner.name());
        println!("{}", "-".repeat(80));
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_line() -> String {
    print!("> ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!("\nGoodbye!");
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
        Err(_) => String::new(),
    }
}

fn prompt_range(min: usize, max: usize) -> usize {
    loop {
        match prompt_line().parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!("Try again: Input should be an integer between [{min}-{max}]"),
        }
    }
}
