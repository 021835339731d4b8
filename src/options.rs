//! Game configuration options.

/// Configuration options for a Switch game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use switchrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_max_players(6)
///     .with_turn_limit(None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// Cards drawn by the player hit by a two.
    pub draw_two_count: usize,
    /// Cards drawn by the player hit by a queen.
    pub draw_four_count: usize,
    /// Maximum number of seated players.
    pub max_players: usize,
    /// Turns after which a round without a winner is abandoned.
    /// `None` to play until someone wins.
    pub turn_limit: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            draw_two_count: 2,
            draw_four_count: 4,
            max_players: 4,
            turn_limit: Some(10_000),
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use switchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of cards drawn after a two.
    ///
    /// # Example
    ///
    /// ```
    /// use switchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_two_count(3);
    /// assert_eq!(options.draw_two_count, 3);
    /// ```
    #[must_use]
    pub const fn with_draw_two_count(mut self, count: usize) -> Self {
        self.draw_two_count = count;
        self
    }

    /// Sets the number of cards drawn after a queen.
    #[must_use]
    pub const fn with_draw_four_count(mut self, count: usize) -> Self {
        self.draw_four_count = count;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use switchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the turn limit of a round.
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: Option<usize>) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}
