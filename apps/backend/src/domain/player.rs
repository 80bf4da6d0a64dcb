//! Player entity and the shared handle aliased by game rosters.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use super::cards::Card;

pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// A player with an ordered hand of cards.
///
/// The hand is append-only through dealing; the only other mutation is a
/// full clear when the player is removed from a game.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: Option<String>) -> Self {
        let name = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_PLAYER_NAME.to_string(),
        };

        Self {
            id: Uuid::new_v4(),
            name,
            hand: Vec::new(),
        }
    }

    /// Sum of the numeric face values of every held card.
    pub fn hand_value(&self) -> u32 {
        self.hand.iter().map(Card::value).sum()
    }

    pub fn receive_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}

/// Shared player handle. The global store and every game roster hold clones
/// of the same handle, so a hand mutation is visible everywhere at once.
pub type SharedPlayer = Arc<Mutex<Player>>;

pub fn shared(player: Player) -> SharedPlayer {
    Arc::new(Mutex::new(player))
}
