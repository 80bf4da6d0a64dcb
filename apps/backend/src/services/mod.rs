//! Service layer: validation and orchestration over the stores and domain.

pub mod decks;
pub mod games;
pub mod players;

pub use decks::DeckService;
pub use games::{GameService, GameView, PlayerHandValue, RemainingCardsCountBySuit};
pub use players::PlayerService;
