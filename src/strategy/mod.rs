//! Decision strategies for human and computer players.
//!
//! A [`Strategy`] only ever sees what a seated player could see: the legal
//! cards it may discard, its own hand, and how many cards everybody else
//! holds.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::UnknownStrategy;
use crate::hand::Hand;
use crate::player::PlayerSummary;

mod heuristic;
mod human;
mod random;

pub use heuristic::HeuristicStrategy;
pub use human::{HumanStrategy, UserInput};
pub use random::RandomStrategy;

/// Game state visible to the acting player when choosing a card.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The acting player's hand, including the candidate cards.
    pub hand: &'a Hand,
    /// Hand sizes starting with the acting player, then in turn order.
    pub hand_sizes: &'a [usize],
}

/// Makes the decisions of one player.
pub trait Strategy {
    /// Short name of the strategy, for logs and displays.
    fn name(&self) -> &'static str;

    /// Returns whether the strategy is played by the computer.
    fn is_ai(&self) -> bool {
        true
    }

    /// Picks one of `choices` to discard, or `None` to draw instead.
    ///
    /// `choices` holds only cards that may legally be discarded.
    fn select_card(&mut self, choices: &[Card], view: &TurnView<'_>) -> Option<Card>;

    /// Picks the player to swap hands with after discarding a jack.
    ///
    /// Returns an index into `others`, which is never empty.
    fn select_swap_target(&mut self, others: &[PlayerSummary]) -> usize;
}

/// Computer strategies that can be created by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Plays a random legal card ([`RandomStrategy`]).
    Random,
    /// Scores its options ([`HeuristicStrategy`]).
    Heuristic,
}

impl StrategyKind {
    /// Creates a strategy of this kind.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomStrategy::new(seed)),
            Self::Heuristic => Box::new(HeuristicStrategy::new(seed)),
        }
    }

    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "simple",
            Self::Heuristic => "smart",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "random" => Ok(Self::Random),
            "smart" | "heuristic" => Ok(Self::Heuristic),
            _ => Err(UnknownStrategy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
