//! Game store: concurrent map of game sessions.
//!
//! Deleting a game only drops its entry here. Attached decks and players
//! outlive the game, and a used deck stays marked used.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::Game;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct GameStore {
    games: DashMap<Uuid, Arc<Game>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, game: Game) -> Result<Arc<Game>, DomainError> {
        let game = Arc::new(game);
        match self.games.entry(game.id) {
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&game));
                Ok(game)
            }
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::IdCollision,
                format!("Game id {} already exists", game.id),
            )),
        }
    }

    pub fn get(&self, game_id: Uuid) -> Option<Arc<Game>> {
        self.games.get(&game_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of all games; iteration order is unspecified.
    pub fn list(&self) -> Vec<Arc<Game>> {
        self.games
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Returns false when the key was already absent.
    pub fn remove(&self, game_id: Uuid) -> bool {
        self.games.remove(&game_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_then_remove() {
        let store = GameStore::new();
        let game = store.insert(Game::new()).unwrap();

        assert!(store.get(game.id).is_some());
        assert!(store.remove(game.id));
        assert!(store.get(game.id).is_none());
        assert!(!store.remove(game.id));
    }
}
