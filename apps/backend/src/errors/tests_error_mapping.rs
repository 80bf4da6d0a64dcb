//! Tests for the DomainError -> AppError -> HTTP status mapping.

use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

#[test]
fn not_found_maps_to_404_with_entity_code() {
    let cases = [
        (NotFoundKind::Game, ErrorCode::GameNotFound),
        (NotFoundKind::Deck, ErrorCode::DeckNotFound),
        (NotFoundKind::Player, ErrorCode::PlayerNotFound),
    ];

    for (kind, expected_code) in cases {
        let err: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, AppError::NotFound { code, .. } if code == expected_code));
    }
}

#[test]
fn conflicts_map_to_409() {
    let cases = [
        (ConflictKind::IdCollision, ErrorCode::IdCollision),
        (ConflictKind::DeckAlreadyInShoe, ErrorCode::DeckAlreadyInShoe),
        (ConflictKind::DeckAlreadyUsed, ErrorCode::DeckAlreadyUsed),
        (
            ConflictKind::PlayerAlreadySeated,
            ErrorCode::PlayerAlreadySeated,
        ),
    ];

    for (kind, expected_code) in cases {
        let err: AppError = DomainError::conflict(kind, "duplicate").into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert!(matches!(err, AppError::Conflict { code, .. } if code == expected_code));
    }
}

#[test]
fn validation_failures_map_to_400() {
    for kind in [
        ValidationKind::DealCountNotPositive,
        ValidationKind::DealCountExceedsRemaining,
    ] {
        let err: AppError = DomainError::validation(kind, "bad count").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            AppError::Validation { code: ErrorCode::InvalidDealCount, .. }
        ));
    }
}

#[test]
fn error_codes_render_screaming_snake_case() {
    assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
    assert_eq!(ErrorCode::InvalidDealCount.as_str(), "INVALID_DEAL_COUNT");
    assert_eq!(
        ErrorCode::PlayerAlreadySeated.to_string(),
        "PLAYER_ALREADY_SEATED"
    );
}
