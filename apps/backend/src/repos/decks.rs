//! Deck store: concurrent map of every deck ever created, used or not.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::Deck;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct DeckStore {
    decks: DashMap<Uuid, Arc<Deck>>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly generated deck keyed by its id. A v4 id collision is
    /// practically unreachable but still surfaces as a conflict.
    pub fn insert(&self, deck: Deck) -> Result<Arc<Deck>, DomainError> {
        let deck = Arc::new(deck);
        match self.decks.entry(deck.id) {
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&deck));
                Ok(deck)
            }
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::IdCollision,
                format!("Deck id {} already exists", deck.id),
            )),
        }
    }

    pub fn get(&self, deck_id: Uuid) -> Option<Arc<Deck>> {
        self.decks.get(&deck_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of all decks; iteration order is unspecified.
    pub fn list(&self) -> Vec<Arc<Deck>> {
        self.decks
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Returns false when the key was already absent.
    pub fn remove(&self, deck_id: Uuid) -> bool {
        self.decks.remove(&deck_id).is_some()
    }
}
