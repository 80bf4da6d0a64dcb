#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::{Card, Deck, FaceValue, Game, Player, Suit};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use middleware::cors::cors_middleware;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
