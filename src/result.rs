//! Turn result types.

use crate::card::Card;

/// What happened during a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player was skipped by an eight.
    Skipped,
    /// The player drew penalty cards after a two or a queen and could not
    /// discard.
    Penalized {
        /// Number of cards actually drawn.
        drawn: usize,
    },
    /// The player discarded a card from their hand.
    Discarded(Card),
    /// The player declined or could not discard and drew from the stock.
    Drew {
        /// The drawn card, or `None` if the stock was empty.
        card: Option<Card>,
        /// Whether the drawn card was playable and discarded straight away.
        discarded: bool,
    },
    /// The player discarded their last card.
    Won(Card),
}

impl TurnOutcome {
    /// Returns whether the turn ended the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won(_))
    }

    /// Returns the card that reached the discard pile this turn, if any.
    #[must_use]
    pub const fn discarded(self) -> Option<Card> {
        match self {
            Self::Discarded(card) | Self::Won(card) => Some(card),
            Self::Drew {
                card: Some(card),
                discarded: true,
            } => Some(card),
            _ => None,
        }
    }
}
