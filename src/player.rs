//! Seated players.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::hand::Hand;
use crate::strategy::{HeuristicStrategy, HumanStrategy, RandomStrategy, Strategy, UserInput};

/// A player at the table: a name, a hand, and the strategy that makes their
/// decisions.
pub struct Player {
    name: String,
    /// Cards held by the player. Only the game mutates this during a round.
    pub hand: Hand,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with an empty hand and the given strategy.
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self::with_boxed_strategy(name, Box::new(strategy))
    }

    /// Creates a player from an already boxed strategy.
    pub fn with_boxed_strategy(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            strategy,
        }
    }

    /// Creates a human player whose decisions come from `input`.
    pub fn human<I: UserInput + 'static>(name: impl Into<String>, input: I) -> Self {
        Self::new(name, HumanStrategy::new(input))
    }

    /// Creates a computer player that plays random legal cards.
    pub fn random(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, RandomStrategy::new(seed))
    }

    /// Creates a computer player that scores its options.
    pub fn heuristic(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, HeuristicStrategy::new(seed))
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the player is controlled by the computer.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.strategy.is_ai()
    }

    /// Returns the name of the player's strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Returns the publicly visible part of this player.
    #[must_use]
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            hand_size: self.hand.len(),
        }
    }

    pub(crate) fn parts_mut(&mut self) -> (&Hand, &mut dyn Strategy) {
        (&self.hand, self.strategy.as_mut())
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// What other players may know about a player: their name and hand size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// The player's name.
    pub name: String,
    /// Number of cards the player holds.
    pub hand_size: usize,
}
