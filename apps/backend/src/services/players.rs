//! Player creation, lookup, and global removal.

use tracing::debug;
use uuid::Uuid;

use crate::domain::{Card, Player, SharedPlayer};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::PlayerStore;

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Register a player. A missing or blank name falls back to "Anonymous".
    pub fn create_player(
        &self,
        players: &PlayerStore,
        name: Option<String>,
    ) -> Result<Player, DomainError> {
        let handle = players.insert(Player::new(name))?;
        let snapshot = handle.lock().clone();
        debug!(player_id = %snapshot.id, player_name = %snapshot.name, "created player");
        Ok(snapshot)
    }

    /// Point-in-time snapshot of a player (identity plus current hand).
    pub fn get_player(&self, players: &PlayerStore, player_id: Uuid) -> Result<Player, DomainError> {
        Ok(self.handle(players, player_id)?.lock().clone())
    }

    pub fn list_players(&self, players: &PlayerStore) -> Vec<Player> {
        players
            .list()
            .into_iter()
            .map(|handle| handle.lock().clone())
            .collect()
    }

    /// The cards currently on the player's hand, across every game they sit in.
    pub fn player_cards(
        &self,
        players: &PlayerStore,
        player_id: Uuid,
    ) -> Result<Vec<Card>, DomainError> {
        Ok(self.handle(players, player_id)?.lock().hand.clone())
    }

    /// Delete a player from the global store. Games that still seat the
    /// player keep their shared handle.
    pub fn delete_player(&self, players: &PlayerStore, player_id: Uuid) -> Result<(), DomainError> {
        if players.remove(player_id) {
            debug!(player_id = %player_id, "deleted player");
            Ok(())
        } else {
            Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            ))
        }
    }

    fn handle(&self, players: &PlayerStore, player_id: Uuid) -> Result<SharedPlayer, DomainError> {
        players.get(player_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
        })
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
