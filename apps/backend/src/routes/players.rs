//! Player HTTP routes. Thin adapters only: lookups and status mapping.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
}

/// GET /api/players
async fn get_all_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = PlayerService::new().list_players(&app_state.players);
    Ok(HttpResponse::Ok().json(&players))
}

/// GET /api/players/{player_id}
async fn get_player(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new().get_player(&app_state.players, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&player))
}

/// GET /api/players/{player_id}/cards
async fn get_player_cards(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let cards = PlayerService::new().player_cards(&app_state.players, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&cards))
}

/// POST /api/players
async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player =
        PlayerService::new().create_player(&app_state.players, request.into_inner().name)?;
    Ok(HttpResponse::Created().json(&player))
}

/// DELETE /api/players/{player_id}
async fn delete_player(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    PlayerService::new().delete_player(&app_state.players, path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/players")
            .route("", web::get().to(get_all_players))
            .route("", web::post().to(create_player))
            .route("/{player_id}", web::get().to(get_player))
            .route("/{player_id}", web::delete().to(delete_player))
            .route("/{player_id}/cards", web::get().to(get_player_cards)),
    );
}
