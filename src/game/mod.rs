//! Game engine and state management.

use alloc::vec::Vec;
use core::mem;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, generate_deck};
use crate::error::{ActionError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;

mod round;
pub mod state;
mod turn;

pub use round::{RoundObserver, TableView};
pub use state::{Direction, GameState, PendingEffects};

/// A Switch game engine that manages the players, the stock, the discard
/// pile and the flow of a round.
///
/// The top of both `stock` and `discards` is the last element. Use
/// [`GameOptions`] to configure hand size and penalties.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Players in seating order.
    pub players: Vec<Player>,
    /// Face-down draw pile.
    pub stock: Vec<Card>,
    /// Face-up discard pile. The last card is the one to follow.
    pub discards: Vec<Card>,
    /// Current direction of play.
    pub direction: Direction,
    /// Effects waiting to hit the next player.
    pub effects: PendingEffects,
    /// Seat whose turn it is.
    current: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use switchrs::{Game, GameOptions, Player};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.add_player(Player::random("Angela", 1)).unwrap();
    /// game.add_player(Player::heuristic("Bart", 2)).unwrap();
    /// game.setup_round().unwrap();
    /// assert_eq!(game.players[0].hand.len(), 7);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            stock: Vec::new(),
            discards: Vec::new(),
            direction: Direction::Forward,
            effects: PendingEffects::default(),
            current: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffled stock from a fresh deck.
    fn create_stock(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = generate_deck();
        cards.shuffle(rng);
        cards
    }

    /// Seats a player at the table.
    ///
    /// Returns the player's seat index.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the table is full.
    pub fn add_player(&mut self, player: Player) -> Result<usize, SetupError> {
        if self.state == GameState::PlayerTurn {
            return Err(SetupError::RoundInProgress);
        }
        if self.players.len() >= self.options.max_players {
            return Err(SetupError::TooManyPlayers);
        }

        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the stock.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.stock.len()
    }

    /// Returns the card on top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.discards.last().copied()
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current
    }

    /// Passes the turn to the next seat in the current direction.
    pub fn advance_turn(&mut self) {
        self.current = self
            .direction
            .seat_after(self.current, 1, self.players.len());
    }

    /// Draws up to `count` cards from the stock into the player's hand.
    ///
    /// Returns the number of cards drawn, which is smaller than `count` when
    /// the stock runs out. The discard pile is never reshuffled into the
    /// stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn pick_up_card(&mut self, player: usize, count: usize) -> Result<usize, ActionError> {
        let acting = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?;

        let drawn = count.min(self.stock.len());
        let split = self.stock.len() - drawn;
        for card in self.stock.drain(split..).rev() {
            acting.hand.add_card(card);
        }

        debug!(
            player = acting.name(),
            requested = count,
            drawn,
            "picked up cards"
        );
        Ok(drawn)
    }

    /// Returns whether `card` may be discarded onto the current top card.
    ///
    /// A card follows the top card by suit or by rank. Aces and queens can
    /// always be played.
    #[must_use]
    pub fn can_discard(&self, card: Card) -> bool {
        let Some(top) = self.top_card() else {
            return true;
        };
        card.suit == top.suit || card.rank == top.rank || card.rank.is_wild()
    }

    /// Returns every player's hand size, starting with `player` and
    /// continuing in the current direction of play.
    ///
    /// This is all a computer player learns about its opponents.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn normalized_hand_sizes(&self, player: usize) -> Result<Vec<usize>, ActionError> {
        let count = self.players.len();
        if player >= count {
            return Err(ActionError::PlayerNotFound);
        }

        Ok((0..count)
            .map(|steps| {
                let seat = self.direction.seat_after(player, steps, count);
                self.players[seat].hand.len()
            })
            .collect())
    }

    /// Exchanges the hands of two players.
    ///
    /// # Errors
    ///
    /// Returns an error if either player is not found.
    pub fn swap_hands(&mut self, a: usize, b: usize) -> Result<(), ActionError> {
        if a >= self.players.len() || b >= self.players.len() {
            return Err(ActionError::PlayerNotFound);
        }
        if a == b {
            return Ok(());
        }

        let hand = mem::take(&mut self.players[a].hand);
        self.players[a].hand = mem::replace(&mut self.players[b].hand, hand);

        debug!(
            first = self.players[a].name(),
            second = self.players[b].name(),
            "swapped hands"
        );
        Ok(())
    }
}
