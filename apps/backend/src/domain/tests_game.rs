//! Unit tests for the game table collections.

use std::sync::Arc;

use crate::domain::player::shared;
use crate::domain::{Deck, Game, Player, DECK_SIZE};

#[test]
fn new_game_is_empty() {
    let game = Game::new();
    let table = game.table();
    assert!(table.shoe.is_empty());
    assert!(table.players.is_empty());
    assert!(table.game_deck_cards.is_empty());
}

#[test]
fn add_deck_appends_cards_in_deck_order() {
    let game = Game::new();
    let first = Arc::new(Deck::new());
    let second = Arc::new(Deck::new());

    let mut table = game.table();
    table.add_deck(Arc::clone(&first));
    table.add_deck(Arc::clone(&second));

    assert_eq!(table.shoe.len(), 2);
    assert_eq!(table.game_deck_cards.len(), 2 * DECK_SIZE);
    assert_eq!(&table.game_deck_cards[..DECK_SIZE], first.cards());
    assert_eq!(&table.game_deck_cards[DECK_SIZE..], second.cards());
    assert!(table.contains_deck(first.id));
    assert!(table.contains_deck(second.id));
}

#[test]
fn deal_drains_from_the_front() {
    let game = Game::new();
    let deck = Arc::new(Deck::new());

    let mut table = game.table();
    table.add_deck(Arc::clone(&deck));

    let dealt = table.deal(3);
    assert_eq!(dealt, deck.cards()[..3].to_vec());
    assert_eq!(table.game_deck_cards.len(), DECK_SIZE - 3);
    assert_eq!(table.game_deck_cards[0], deck.cards()[3]);
}

#[test]
fn seat_of_finds_players_by_id() {
    let game = Game::new();
    let alice = shared(Player::new(Some("Alice".to_string())));
    let bob = shared(Player::new(Some("Bob".to_string())));
    let alice_id = alice.lock().id;
    let bob_id = bob.lock().id;

    let mut table = game.table();
    table.players.push(alice);
    table.players.push(bob);

    assert_eq!(table.seat_of(alice_id), Some(0));
    assert_eq!(table.seat_of(bob_id), Some(1));
    assert_eq!(table.seat_of(uuid::Uuid::new_v4()), None);
}
