//! Concurrent identity-keyed stores for decks, players, and games.

pub mod decks;
pub mod games;
pub mod players;

pub use decks::DeckStore;
pub use games::GameStore;
pub use players::PlayerStore;
