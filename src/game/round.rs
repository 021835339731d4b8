use tracing::{info, warn};

use crate::card::{Card, DECK_SIZE};
use crate::error::{ActionError, RoundError, SetupError};
use crate::player::Player;
use crate::result::TurnOutcome;

use super::{Direction, Game, GameState, PendingEffects};

/// Public table state shown at the start of a turn.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The player about to act.
    pub player: &'a Player,
    /// The card to follow.
    pub top_card: Option<Card>,
    /// Hand sizes starting with the acting player, then in turn order.
    pub hand_sizes: &'a [usize],
}

/// Receives notifications while a round is played.
///
/// Every hook defaults to doing nothing. Front ends render the table from
/// these, revealing hand contents only for players that are not
/// [AI-controlled](Player::is_ai).
pub trait RoundObserver {
    /// Called before a player takes their turn.
    fn on_turn_start(&mut self, _view: &TableView<'_>) {}

    /// Called after a player took their turn.
    fn on_turn_end(&mut self, _player: &Player, _outcome: &TurnOutcome) {}

    /// Called once the round has a winner.
    fn on_round_over(&mut self, _winner: &Player) {}
}

impl RoundObserver for () {}

impl Game {
    /// Shuffles a fresh deck, deals a hand to every player one card at a
    /// time and turns up the first discard.
    ///
    /// Direction and pending effects are reset and the first seat starts.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated or the deck cannot cover
    /// every hand plus the first discard.
    pub fn setup_round(&mut self) -> Result<(), SetupError> {
        let players = self.players.len();
        if players == 0 {
            return Err(SetupError::NoPlayers);
        }
        let cards_needed = self
            .options
            .hand_size
            .saturating_mul(players)
            .saturating_add(1);
        if cards_needed > DECK_SIZE {
            return Err(SetupError::NotEnoughCards);
        }

        self.state = GameState::Dealing;
        self.stock = Self::create_stock(&mut self.rng);
        self.discards.clear();
        for player in &mut self.players {
            player.hand.clear();
        }
        self.direction = Direction::Forward;
        self.effects = PendingEffects::default();
        self.current = 0;

        for _ in 0..self.options.hand_size {
            for player in &mut self.players {
                if let Some(card) = self.stock.pop() {
                    player.hand.add_card(card);
                }
            }
        }

        if let Some(card) = self.stock.pop() {
            self.discards.push(card);
        }

        self.state = GameState::PlayerTurn;
        info!(
            players,
            stock = self.stock.len(),
            top = ?self.top_card(),
            "round dealt"
        );
        Ok(())
    }

    /// Deals a new round and plays it to the end.
    ///
    /// Returns the seat of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt, a turn fails, or the
    /// turn limit is reached.
    pub fn run_round<O>(&mut self, observer: &mut O) -> Result<usize, RoundError>
    where
        O: RoundObserver + ?Sized,
    {
        self.setup_round()?;
        self.play_round(observer)
    }

    /// Plays the round in progress to the end, starting with the current
    /// seat.
    ///
    /// Every player takes a turn when the turn passes to them; skipped
    /// players lose their turn inside [`Game::play_turn`].
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, a turn fails, or the
    /// turn limit is reached.
    pub fn play_round<O>(&mut self, observer: &mut O) -> Result<usize, RoundError>
    where
        O: RoundObserver + ?Sized,
    {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState.into());
        }

        let mut turns: usize = 0;
        loop {
            if self.options.turn_limit.is_some_and(|limit| turns >= limit) {
                warn!(turns, "round stalled without a winner");
                return Err(RoundError::Stalled);
            }
            turns += 1;

            let player = self.current;
            let hand_sizes = self.normalized_hand_sizes(player)?;
            observer.on_turn_start(&TableView {
                player: &self.players[player],
                top_card: self.top_card(),
                hand_sizes: &hand_sizes,
            });

            let outcome = self.play_turn(player)?;
            observer.on_turn_end(&self.players[player], &outcome);

            if outcome.is_win() {
                observer.on_round_over(&self.players[player]);
                return Ok(player);
            }

            self.advance_turn();
        }
    }
}
