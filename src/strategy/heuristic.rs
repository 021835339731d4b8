use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{Level, event};

use crate::card::{Card, Rank};
use crate::hand::Hand;
use crate::player::PlayerSummary;

use super::{Strategy, TurnView};

/// Scores at or below this value are not worth discarding.
const DECLINE_THRESHOLD: i32 = -2;

fn signed(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Computer strategy that scores each legal card from its own hand and the
/// opponents' hand sizes.
///
/// Special cards are favoured when they hurt the next player, and regular
/// cards are favoured when they keep a suit the player holds many of on top
/// of the pile. Aces are held back as a last resort.
pub struct HeuristicStrategy {
    rng: ChaCha8Rng,
}

impl HeuristicStrategy {
    /// Creates a heuristic strategy. The seed only affects tie-breaks when
    /// choosing whom to swap hands with.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Scores discarding `card` from `hand`.
    ///
    /// `hand_sizes` starts with the acting player's own hand size and
    /// continues in turn order. Higher is better.
    #[must_use]
    pub fn score(card: Card, hand: &Hand, hand_sizes: &[usize]) -> i32 {
        let in_suit = signed(
            hand.cards()
                .iter()
                .filter(|&&c| c.suit == card.suit && c != card)
                .count(),
        );

        let own = hand_sizes.first().copied().map_or(0, signed);
        let next = hand_sizes.get(1).copied().map_or(own, signed);
        let previous = hand_sizes.last().copied().map_or(own, signed);
        let fewest_other = hand_sizes
            .iter()
            .skip(1)
            .min()
            .copied()
            .map_or(own, signed);

        match card.rank {
            // Swapping pays off the further behind we are.
            Rank::Jack => 3 * (own - 1 - fewest_other),
            Rank::Queen => 6 + in_suit,
            Rank::Two => 4 + in_suit,
            Rank::Eight => 2 + in_suit,
            Rank::King => {
                let reverse = if previous > next { 3 } else { -1 };
                reverse + in_suit
            }
            Rank::Ace => -2 + in_suit,
            _ => in_suit,
        }
    }
}

impl Strategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "Heuristic"
    }

    fn select_card(&mut self, choices: &[Card], view: &TurnView<'_>) -> Option<Card> {
        let mut best: Option<(Card, i32)> = None;

        for &card in choices {
            let score = Self::score(card, view.hand, view.hand_sizes);
            event!(Level::TRACE, %card, score, "scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((card, score));
            }
        }

        let (card, score) = best?;
        if score <= DECLINE_THRESHOLD {
            event!(Level::DEBUG, %card, score, "declining to discard");
            return None;
        }

        event!(Level::DEBUG, %card, score, "selected card");
        Some(card)
    }

    fn select_swap_target(&mut self, others: &[PlayerSummary]) -> usize {
        let Some(smallest) = others.iter().map(|p| p.hand_size).min() else {
            return 0;
        };

        let best: Vec<usize> = others
            .iter()
            .enumerate()
            .filter(|(_, p)| p.hand_size == smallest)
            .map(|(index, _)| index)
            .collect();

        best.choose(&mut self.rng).copied().unwrap_or(0)
    }
}
