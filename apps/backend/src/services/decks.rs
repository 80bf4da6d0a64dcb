//! Deck creation and lookup operations.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::Deck;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::DeckStore;

/// Deck domain service.
pub struct DeckService;

impl DeckService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh 52-card deck and register it. The deck starts unused
    /// and stays independent of any game until claimed.
    pub fn create_deck(&self, decks: &DeckStore) -> Result<Arc<Deck>, DomainError> {
        let deck = decks.insert(Deck::new())?;
        debug!(deck_id = %deck.id, "created deck");
        Ok(deck)
    }

    pub fn get_deck(&self, decks: &DeckStore, deck_id: Uuid) -> Result<Arc<Deck>, DomainError> {
        decks.get(deck_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Deck, format!("Deck {deck_id} not found"))
        })
    }

    pub fn list_decks(&self, decks: &DeckStore) -> Vec<Arc<Deck>> {
        decks.list()
    }

    /// Delete a deck from the store. Does not touch any game that already
    /// claimed it; the shoe keeps its reference.
    pub fn delete_deck(&self, decks: &DeckStore, deck_id: Uuid) -> Result<(), DomainError> {
        if decks.remove(deck_id) {
            debug!(deck_id = %deck_id, "deleted deck");
            Ok(())
        } else {
            Err(DomainError::not_found(
                NotFoundKind::Deck,
                format!("Deck {deck_id} not found"),
            ))
        }
    }
}

impl Default for DeckService {
    fn default() -> Self {
        Self::new()
    }
}
