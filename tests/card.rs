//! Card and deck tests.

use std::collections::{HashMap, HashSet};

use switchrs::{Card, CardError, DECK_SIZE, Hand, Rank, Suit, generate_deck};

#[test]
fn generate_deck_has_every_card_once() {
    let deck = generate_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
}

#[test]
fn generate_deck_counts_suits_and_ranks() {
    let deck = generate_deck();

    let mut suits: HashMap<Suit, usize> = HashMap::new();
    let mut ranks: HashMap<Rank, usize> = HashMap::new();
    for card in &deck {
        *suits.entry(card.suit).or_default() += 1;
        *ranks.entry(card.rank).or_default() += 1;
    }

    assert_eq!(suits.len(), 4);
    assert!(suits.values().all(|&count| count == 13));
    assert_eq!(ranks.len(), 13);
    assert!(ranks.values().all(|&count| count == 4));
}

#[test]
fn generate_deck_is_in_enumeration_order() {
    let deck = generate_deck();
    assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(deck[12], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Two));
    assert_eq!(deck[51], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck, generate_deck());
}

#[test]
fn card_display_shows_suit_then_rank() {
    assert_eq!(Card::new(Suit::Clubs, Rank::Four).to_string(), "♣ 4");
    assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "♢ 10");
    assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "♠ Q");
}

#[test]
fn card_parses_symbols_and_initials() {
    let ten_of_hearts = Card::new(Suit::Hearts, Rank::Ten);
    assert_eq!("♡10".parse::<Card>(), Ok(ten_of_hearts));
    assert_eq!("♡ 10".parse::<Card>(), Ok(ten_of_hearts));
    assert_eq!("h10".parse::<Card>(), Ok(ten_of_hearts));
    assert_eq!(
        "Sq".parse::<Card>(),
        Ok(Card::new(Suit::Spades, Rank::Queen))
    );

    let card = Card::new(Suit::Clubs, Rank::Jack);
    assert_eq!(card.to_string().parse::<Card>(), Ok(card));
}

#[test]
fn card_rejects_invalid_values() {
    assert_eq!("x4".parse::<Card>(), Err(CardError::InvalidSuit));
    assert_eq!("♣1".parse::<Card>(), Err(CardError::InvalidRank));
    assert_eq!("♣11".parse::<Card>(), Err(CardError::InvalidRank));
    assert_eq!("♣".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!(Suit::try_from('x'), Err(CardError::InvalidSuit));
    assert_eq!("Z".parse::<Rank>(), Err(CardError::InvalidRank));
}

#[test]
fn only_aces_and_queens_are_wild() {
    let wild: Vec<Rank> = Rank::ALL.into_iter().filter(|r| r.is_wild()).collect();
    assert_eq!(wild, vec![Rank::Queen, Rank::Ace]);
}

#[test]
fn hand_keeps_insertion_order() {
    let mut hand = Hand::new();
    hand.add_card(Card::new(Suit::Spades, Rank::Two));
    hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    hand.add_card(Card::new(Suit::Spades, Rank::King));

    assert_eq!(hand.len(), 3);
    assert_eq!(hand.count_suit(Suit::Spades), 2);
    assert_eq!(hand.last(), Some(Card::new(Suit::Spades, Rank::King)));

    assert!(hand.remove_card(Card::new(Suit::Clubs, Rank::Nine)));
    assert!(!hand.remove_card(Card::new(Suit::Clubs, Rank::Nine)));
    assert_eq!(
        hand.cards(),
        &[
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Spades, Rank::King)
        ]
    );

    hand.clear();
    assert!(hand.is_empty());
}
