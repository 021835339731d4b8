use crate::card::Card;
use crate::player::PlayerSummary;

use super::{Strategy, TurnView};

/// Source of decisions for a human player, usually a user interface.
///
/// Implementations are responsible for validating input: the game trusts the
/// returned card to be one of the offered choices and the returned index to
/// be in range.
pub trait UserInput {
    /// Presents `choices` and returns the chosen card, or `None` if the
    /// player prefers to draw.
    fn select_card(&mut self, choices: &[Card]) -> Option<Card>;

    /// Presents `players` and returns the index of the chosen one.
    fn select_player(&mut self, players: &[PlayerSummary]) -> usize;
}

/// Strategy that delegates every decision to a [`UserInput`].
pub struct HumanStrategy<I> {
    input: I,
}

impl<I: UserInput> HumanStrategy<I> {
    /// Creates a human strategy reading from `input`.
    pub const fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: UserInput> Strategy for HumanStrategy<I> {
    fn name(&self) -> &'static str {
        "Human"
    }

    fn is_ai(&self) -> bool {
        false
    }

    fn select_card(&mut self, choices: &[Card], _view: &TurnView<'_>) -> Option<Card> {
        self.input.select_card(choices)
    }

    fn select_swap_target(&mut self, others: &[PlayerSummary]) -> usize {
        self.input.select_player(others)
    }
}
