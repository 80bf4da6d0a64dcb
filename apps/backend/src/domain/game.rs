//! Game entity: shoe, roster, and the merged in-play card pool.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use uuid::Uuid;

use super::cards::Card;
use super::deck::Deck;
use super::player::SharedPlayer;
use super::shuffle;

/// The three collections a game owns.
///
/// A single lock guards all of them so every operation's read-modify-write
/// runs as one critical section. Lock order is always game table before any
/// player hand, never the reverse.
#[derive(Debug, Default)]
pub struct GameTable {
    /// Decks attached to this game, in addition order.
    pub shoe: Vec<Arc<Deck>>,
    /// Seated players, in seating order. Shared with the global store.
    pub players: Vec<SharedPlayer>,
    /// The merged pool of in-play cards, dealt from the front.
    pub game_deck_cards: Vec<Card>,
}

impl GameTable {
    pub fn contains_deck(&self, deck_id: Uuid) -> bool {
        self.shoe.iter().any(|deck| deck.id == deck_id)
    }

    /// Append a claimed deck to the shoe and its 52 cards, in deck order, to
    /// the end of the in-play pool.
    pub fn add_deck(&mut self, deck: Arc<Deck>) {
        self.game_deck_cards.extend_from_slice(deck.cards());
        self.shoe.push(deck);
    }

    /// Seating position of a player, if seated here.
    pub fn seat_of(&self, player_id: Uuid) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.lock().id == player_id)
    }

    pub fn shuffle(&mut self) {
        shuffle::shuffle(&mut self.game_deck_cards);
    }

    /// Remove the first `count` cards from the pool and return them in order.
    /// Callers must have checked `count` against the pool length.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        self.game_deck_cards.drain(..count).collect()
    }
}

/// A game session. Created empty; decks and players are attached by
/// reference afterwards.
#[derive(Debug)]
pub struct Game {
    pub id: Uuid,
    table: Mutex<GameTable>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            table: Mutex::new(GameTable::default()),
        }
    }

    /// Lock the game's collections for one operation's critical section.
    pub fn table(&self) -> MutexGuard<'_, GameTable> {
        self.table.lock()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
