use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::{Card, Rank};
use crate::error::ActionError;
use crate::player::PlayerSummary;
use crate::result::TurnOutcome;
use crate::strategy::TurnView;

use super::{Game, GameState};

impl Game {
    /// Moves `card` from the player's hand to the discard pile and applies
    /// its effect.
    ///
    /// - two: the next player draws two cards
    /// - eight: the next player is skipped
    /// - queen: the next player draws four cards
    /// - king: the direction of play is reversed
    /// - jack: the player swaps hands with another player of their choice
    ///
    /// Legality is not checked here; see [`Game::can_discard`].
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found, does not hold the card,
    /// or picks a swap target that was not offered. The card stays
    /// discarded in the last case.
    pub fn discard_card(&mut self, player: usize, card: Card) -> Result<(), ActionError> {
        let acting = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?;

        if !acting.hand.remove_card(card) {
            return Err(ActionError::CardNotInHand);
        }
        self.discards.push(card);
        debug!(player = acting.name(), %card, "discarded");

        match card.rank {
            Rank::Two => self.effects.draw_two = true,
            Rank::Eight => self.effects.skip = true,
            Rank::Queen => self.effects.draw_four = true,
            Rank::King => {
                self.direction = self.direction.reversed();
                debug!(direction = ?self.direction, "direction reversed");
            }
            Rank::Jack => self.swap_with_chosen(player)?,
            _ => {}
        }

        Ok(())
    }

    /// Lets the player pick another player and swaps hands with them.
    fn swap_with_chosen(&mut self, player: usize) -> Result<(), ActionError> {
        let candidates: Vec<usize> = (0..self.players.len()).filter(|&i| i != player).collect();
        if candidates.is_empty() {
            return Ok(());
        }

        let others: Vec<PlayerSummary> = candidates
            .iter()
            .map(|&seat| self.players[seat].summary())
            .collect();
        let choice = self.players[player]
            .strategy_mut()
            .select_swap_target(&others);
        let target = *candidates
            .get(choice)
            .ok_or(ActionError::InvalidSwapTarget)?;

        self.swap_hands(player, target)
    }

    /// Plays one full turn for the player and reports what happened.
    ///
    /// A pending skip, draw-two or draw-four is consumed first, in that
    /// order, and ends the turn. Otherwise the player's strategy chooses one
    /// of the legal cards. If it declines, or nothing is legal, the player
    /// draws one card and discards it straight away when it is playable.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the
    /// player is not found.
    pub fn play_turn(&mut self, player: usize) -> Result<TurnOutcome, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if player >= self.players.len() {
            return Err(ActionError::PlayerNotFound);
        }

        if self.effects.skip {
            self.effects.skip = false;
            debug!(player = self.players[player].name(), "skipped");
            return Ok(TurnOutcome::Skipped);
        }
        if self.effects.draw_two {
            let drawn = self.pick_up_card(player, self.options.draw_two_count)?;
            self.effects.draw_two = false;
            return Ok(TurnOutcome::Penalized { drawn });
        }
        if self.effects.draw_four {
            let drawn = self.pick_up_card(player, self.options.draw_four_count)?;
            self.effects.draw_four = false;
            return Ok(TurnOutcome::Penalized { drawn });
        }

        let hand_sizes = self.normalized_hand_sizes(player)?;
        let choices: Vec<Card> = self.players[player]
            .hand
            .cards()
            .iter()
            .copied()
            .filter(|&card| self.can_discard(card))
            .collect();

        let selected = if choices.is_empty() {
            None
        } else {
            let (hand, strategy) = self.players[player].parts_mut();
            let view = TurnView {
                hand,
                hand_sizes: &hand_sizes,
            };
            strategy.select_card(&choices, &view)
        };

        if let Some(card) = selected.filter(|card| choices.contains(card)) {
            self.discard_card(player, card)?;
            return Ok(self.finish_discard(player, card, TurnOutcome::Discarded(card)));
        }

        let drawn = if self.pick_up_card(player, 1)? == 1 {
            self.players[player].hand.last()
        } else {
            None
        };
        match drawn {
            Some(card) if self.can_discard(card) => {
                self.discard_card(player, card)?;
                let outcome = TurnOutcome::Drew {
                    card: Some(card),
                    discarded: true,
                };
                Ok(self.finish_discard(player, card, outcome))
            }
            _ => Ok(TurnOutcome::Drew {
                card: drawn,
                discarded: false,
            }),
        }
    }

    /// Plays one full turn for the player.
    ///
    /// Returns `true` if the player emptied their hand and won the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the
    /// player is not found.
    pub fn run_player(&mut self, player: usize) -> Result<bool, ActionError> {
        self.play_turn(player).map(TurnOutcome::is_win)
    }

    /// Ends the round if the discard emptied the player's hand.
    fn finish_discard(&mut self, player: usize, card: Card, outcome: TurnOutcome) -> TurnOutcome {
        if !self.players[player].hand.is_empty() {
            return outcome;
        }

        self.state = GameState::RoundOver;
        info!(winner = self.players[player].name(), "round won");
        TurnOutcome::Won(card)
    }
}
