//! Error codes for the backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Deal count is not positive or exceeds the remaining cards
    InvalidDealCount,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Deck not found
    DeckNotFound,
    /// Player not found
    PlayerNotFound,

    // Business Logic Conflicts
    /// Deck already attached to this game's shoe
    DeckAlreadyInShoe,
    /// Deck already claimed by a game
    DeckAlreadyUsed,
    /// Player already seated in this game
    PlayerAlreadySeated,
    /// Generated identifier collided with an existing one
    IdCollision,

    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDealCount => "INVALID_DEAL_COUNT",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::DeckNotFound => "DECK_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::DeckAlreadyInShoe => "DECK_ALREADY_IN_SHOE",
            ErrorCode::DeckAlreadyUsed => "DECK_ALREADY_USED",
            ErrorCode::PlayerAlreadySeated => "PLAYER_ALREADY_SEATED",
            ErrorCode::IdCollision => "ID_COLLISION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
