//! Unit tests for deck composition and the used flag.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::domain::{Card, Deck, FaceValue, Suit, DECK_SIZE};

#[test]
fn deck_holds_exactly_the_52_card_cross_product() {
    let deck = Deck::new();
    assert_eq!(deck.cards().len(), DECK_SIZE);

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for face_value in FaceValue::ALL {
            assert!(distinct.contains(&Card::new(suit, face_value)));
        }
    }
}

#[test]
fn deck_generation_order_is_suits_outer_faces_inner() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], Card::new(Suit::Hearts, FaceValue::Two));
    assert_eq!(cards[12], Card::new(Suit::Hearts, FaceValue::Ace));
    assert_eq!(cards[13], Card::new(Suit::Diamonds, FaceValue::Two));
    assert_eq!(cards[51], Card::new(Suit::Spades, FaceValue::Ace));

    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.suit, Suit::ALL[i / 13]);
        assert_eq!(card.face_value, FaceValue::ALL[i % 13]);
    }
}

#[test]
fn decks_get_distinct_ids() {
    assert_ne!(Deck::new().id, Deck::new().id);
}

#[test]
fn claim_succeeds_exactly_once() {
    let deck = Deck::new();
    assert!(!deck.is_used());
    assert!(deck.try_claim());
    assert!(deck.is_used());
    assert!(!deck.try_claim());
}

#[test]
fn concurrent_claims_admit_a_single_winner() {
    let deck = Arc::new(Deck::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let deck = Arc::clone(&deck);
            thread::spawn(move || deck.try_claim())
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(wins, 1);
    assert!(deck.is_used());
}
