//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit is not one of clubs, diamonds, hearts or spades.
    #[error("invalid suit")]
    InvalidSuit,
    /// Rank is not one of 2-10, J, Q, K or A.
    #[error("invalid rank")]
    InvalidRank,
    /// Input does not contain both a suit and a rank.
    #[error("malformed card")]
    Malformed,
}

/// Returned when parsing an unknown strategy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown strategy")]
pub struct UnknownStrategy;

/// Errors that can occur while seating players or dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No players have joined the game.
    #[error("no players have joined the game")]
    NoPlayers,
    /// Players cannot join while a round is in progress.
    #[error("a round is in progress")]
    RoundInProgress,
    /// The table is already full.
    #[error("too many players")]
    TooManyPlayers,
    /// The deck cannot cover every hand plus the first discard.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The chosen swap target is not one of the offered players.
    #[error("invalid swap target")]
    InvalidSwapTarget,
}

/// Errors that can occur while running a full round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round could not be dealt.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A turn failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The turn limit was reached without a winner.
    #[error("turn limit reached without a winner")]
    Stalled,
}
