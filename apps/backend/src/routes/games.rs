//! Game HTTP routes. Thin adapters only: extraction, service calls, and
//! status mapping.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct DealCardsRequest {
    pub player_id: Uuid,
    pub number_of_cards_to_deal: i64,
}

/// GET /api/games
async fn get_all_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = GameService::new();
    // A game deleted between the listing and the snapshot is simply skipped.
    let views: Vec<_> = service
        .list_games(&app_state.games)
        .into_iter()
        .filter_map(|game| service.game_view(&app_state.games, game.id).ok())
        .collect();
    Ok(HttpResponse::Ok().json(&views))
}

/// GET /api/games/{game_id}
async fn get_game_by_id(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = GameService::new().game_view(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&view))
}

/// POST /api/games
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = GameService::new();
    let game = service.create_game(&app_state.games)?;
    let view = service.game_view(&app_state.games, game.id)?;
    Ok(HttpResponse::Created().json(&view))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    GameService::new().delete_game(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/games/{game_id}/decks
async fn get_decks_in_game(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let decks = GameService::new().decks_in_game(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&decks))
}

/// GET /api/games/{game_id}/players
async fn get_players_in_game(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let players = GameService::new().players_in_game(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&players))
}

/// GET /api/games/{game_id}/game-deck-cards
async fn get_game_deck_cards(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let cards = GameService::new().game_deck_cards(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&cards))
}

/// POST /api/games/{game_id}/decks/{deck_id}
async fn add_deck_to_game(
    path: web::Path<(Uuid, Uuid)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, deck_id) = path.into_inner();
    let shoe =
        GameService::new().add_deck_to_game(&app_state.games, &app_state.decks, game_id, deck_id)?;
    Ok(HttpResponse::Ok().json(&shoe))
}

/// POST /api/games/{game_id}/players/{player_id}
async fn add_player_to_game(
    path: web::Path<(Uuid, Uuid)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, player_id) = path.into_inner();
    let player = GameService::new().add_player_to_game(
        &app_state.games,
        &app_state.players,
        game_id,
        player_id,
    )?;
    Ok(HttpResponse::Ok().json(&player))
}

/// DELETE /api/games/{game_id}/players/{player_id}
async fn remove_player_from_game(
    path: web::Path<(Uuid, Uuid)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, player_id) = path.into_inner();
    GameService::new().remove_player_from_game(&app_state.games, game_id, player_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/games/{game_id}/shuffle
async fn shuffle_game_deck(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let cards = GameService::new().shuffle_game_deck(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&cards))
}

/// POST /api/games/{game_id}/deal-cards
async fn deal_cards_to_player(
    path: web::Path<Uuid>,
    request: web::Json<DealCardsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let dealt = GameService::new().deal_cards_to_player(
        &app_state.games,
        &app_state.players,
        path.into_inner(),
        request.player_id,
        request.number_of_cards_to_deal,
    )?;
    Ok(HttpResponse::Ok().json(&dealt))
}

/// GET /api/games/{game_id}/players-hand-values
async fn get_players_hand_values(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let report = GameService::new().players_hand_values(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&report))
}

/// GET /api/games/{game_id}/remaining-cards-by-suit
async fn get_remaining_cards_by_suit(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let report = GameService::new().remaining_cards_by_suit(&app_state.games, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&report))
}

/// GET /api/games/{game_id}/remaining-cards-count
///
/// Emits a JSON object whose key order follows the service-defined
/// enumeration (suits ascending, face values descending), which is why
/// serde_json's preserve_order feature is enabled.
async fn get_remaining_cards_count(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let counts = GameService::new().remaining_cards_counts(&app_state.games, path.into_inner())?;
    let mut body = serde_json::Map::with_capacity(counts.len());
    for (label, count) in counts {
        body.insert(label, serde_json::Value::from(count));
    }
    Ok(HttpResponse::Ok().json(&body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/games")
            .route("", web::get().to(get_all_games))
            .route("", web::post().to(create_game))
            .route("/{game_id}", web::get().to(get_game_by_id))
            .route("/{game_id}", web::delete().to(delete_game))
            .route("/{game_id}/decks", web::get().to(get_decks_in_game))
            .route("/{game_id}/players", web::get().to(get_players_in_game))
            .route(
                "/{game_id}/game-deck-cards",
                web::get().to(get_game_deck_cards),
            )
            .route("/{game_id}/decks/{deck_id}", web::post().to(add_deck_to_game))
            .route(
                "/{game_id}/players/{player_id}",
                web::post().to(add_player_to_game),
            )
            .route(
                "/{game_id}/players/{player_id}",
                web::delete().to(remove_player_from_game),
            )
            .route("/{game_id}/shuffle", web::post().to(shuffle_game_deck))
            .route("/{game_id}/deal-cards", web::post().to(deal_cards_to_player))
            .route(
                "/{game_id}/players-hand-values",
                web::get().to(get_players_hand_values),
            )
            .route(
                "/{game_id}/remaining-cards-by-suit",
                web::get().to(get_remaining_cards_by_suit),
            )
            .route(
                "/{game_id}/remaining-cards-count",
                web::get().to(get_remaining_cards_count),
            ),
    );
}
