use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::player::PlayerSummary;

use super::{Strategy, TurnView};

/// Computer strategy that makes uniformly random decisions.
///
/// It never declines to discard when it has a legal card.
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn select_card(&mut self, choices: &[Card], _view: &TurnView<'_>) -> Option<Card> {
        choices.choose(&mut self.rng).copied()
    }

    fn select_swap_target(&mut self, others: &[PlayerSummary]) -> usize {
        if others.is_empty() {
            return 0;
        }
        self.rng.random_range(0..others.len())
    }
}
