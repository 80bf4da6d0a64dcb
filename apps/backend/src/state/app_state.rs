use std::sync::Arc;

use crate::repos::{DeckStore, GameStore, PlayerStore};

/// Application state containing the shared in-memory stores.
///
/// Cloning is cheap; every clone aliases the same three stores.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub decks: Arc<DeckStore>,
    pub players: Arc<PlayerStore>,
    pub games: Arc<GameStore>,
}

impl AppState {
    /// Create a new AppState with empty stores.
    pub fn new() -> Self {
        Self::default()
    }
}
