//! A Switch card game engine with optional `no_std` support.
//!
//! Switch is a Crazy Eights variant: players take turns discarding a card
//! that matches the top of the discard pile by suit or rank, and the first
//! player to empty their hand wins the round. Special cards skip (eight),
//! reverse (king), force draws (two and queen), swap hands (jack) or can be
//! played on anything (ace and queen).
//!
//! The crate provides a [`Game`] type that manages the round flow, and the
//! [`Strategy`] trait with random, heuristic and human-driven players.
//!
//! # Example
//!
//! ```
//! use switchrs::{Game, GameOptions, Player};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.add_player(Player::random("Angela", 1)).unwrap();
//! game.add_player(Player::heuristic("Smart Bart", 2)).unwrap();
//!
//! // A round can stall once the stock runs dry, so the result is checked.
//! if let Ok(winner) = game.run_round(&mut ()) {
//!     assert!(game.players[winner].hand.is_empty());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, generate_deck};
pub use error::{ActionError, CardError, RoundError, SetupError, UnknownStrategy};
pub use game::{Direction, Game, GameState, PendingEffects, RoundObserver, TableView};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Player, PlayerSummary};
pub use result::TurnOutcome;
pub use strategy::{
    HeuristicStrategy, HumanStrategy, RandomStrategy, Strategy, StrategyKind, TurnView, UserInput,
};
