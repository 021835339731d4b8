//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Dealing the hands and the first discard.
    Dealing,
    /// Players take turns.
    PlayerTurn,
    /// A player has emptied their hand.
    RoundOver,
}

/// Direction of play around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending seat order (+1).
    #[default]
    Forward,
    /// Descending seat order (-1).
    Reverse,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Returns the seat `steps` places away from `from` at a table of
    /// `players` seats.
    #[must_use]
    pub const fn seat_after(self, from: usize, steps: usize, players: usize) -> usize {
        if players == 0 {
            return 0;
        }
        let steps = steps % players;
        match self {
            Self::Forward => (from + steps) % players,
            Self::Reverse => (from + players - steps) % players,
        }
    }
}

/// Effects of special cards waiting to hit the next player.
///
/// Each flag is consumed by exactly one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingEffects {
    /// The next player loses their turn.
    pub skip: bool,
    /// The next player draws two cards instead of playing.
    pub draw_two: bool,
    /// The next player draws four cards instead of playing.
    pub draw_four: bool,
}

impl PendingEffects {
    /// Returns whether any effect is waiting.
    #[must_use]
    pub const fn any(self) -> bool {
        self.skip || self.draw_two || self.draw_four
    }
}
