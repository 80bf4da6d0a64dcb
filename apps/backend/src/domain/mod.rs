//! Domain layer: pure card-game types and logic.

pub mod cards;
pub mod deck;
pub mod game;
pub mod player;
pub mod shuffle;

#[cfg(test)]
mod tests_cards;
#[cfg(test)]
mod tests_deck;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_shuffle;

// Re-exports for ergonomics
pub use cards::{Card, FaceValue, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use game::{Game, GameTable};
pub use player::{shared, Player, SharedPlayer, DEFAULT_PLAYER_NAME};
