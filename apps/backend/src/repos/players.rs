//! Player store: concurrent map of shared player handles.
//!
//! Game rosters hold clones of the same `SharedPlayer` handles, so a hand
//! mutation through one view is visible through every other.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::player::shared;
use crate::domain::{Player, SharedPlayer};
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct PlayerStore {
    players: DashMap<Uuid, SharedPlayer>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, player: Player) -> Result<SharedPlayer, DomainError> {
        let id = player.id;
        let player = shared(player);
        match self.players.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&player));
                Ok(player)
            }
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::IdCollision,
                format!("Player id {id} already exists"),
            )),
        }
    }

    pub fn get(&self, player_id: Uuid) -> Option<SharedPlayer> {
        self.players
            .get(&player_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of all players; iteration order is unspecified.
    pub fn list(&self) -> Vec<SharedPlayer> {
        self.players
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Returns false when the key was already absent.
    pub fn remove(&self, player_id: Uuid) -> bool {
        self.players.remove(&player_id).is_some()
    }
}
