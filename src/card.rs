//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the symbol used when displaying the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♢',
            Self::Hearts => '♡',
            Self::Spades => '♠',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    /// Accepts the display symbols, the filled variants and the ASCII
    /// initials `C`, `D`, `H`, `S` (case-insensitive).
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♣' | '♧' | 'c' | 'C' => Ok(Self::Clubs),
            '♢' | '♦' | 'd' | 'D' => Ok(Self::Diamonds),
            '♡' | '♥' | 'h' | 'H' => Ok(Self::Hearts),
            '♠' | '♤' | 's' | 'S' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two. Forces the next player to draw two cards.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight. Skips the next player.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack. Swaps hands with another player.
    Jack,
    /// Queen. Wild; forces the next player to draw four cards.
    Queen,
    /// King. Reverses the direction of play.
    King,
    /// Ace. Wild.
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the symbol used when displaying the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether the rank can be played on any top card.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Ace | Self::Queen)
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(s))
            .ok_or(CardError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card written suit first, e.g. `"♣4"`, `"♡ 10"` or `"SQ"`.
    ///
    /// ```
    /// use switchrs::{Card, Rank, Suit};
    ///
    /// let card: Card = "♡ 10".parse().unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next().ok_or(CardError::Malformed)?;
        let rank = chars.as_str().trim();
        if rank.is_empty() {
            return Err(CardError::Malformed);
        }

        Ok(Self::new(Suit::try_from(suit)?, rank.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Generates the 52 unique cards of a deck, unshuffled.
///
/// Cards are ordered by suit, then by rank.
///
/// ```
/// use switchrs::{DECK_SIZE, generate_deck};
///
/// assert_eq!(generate_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}
