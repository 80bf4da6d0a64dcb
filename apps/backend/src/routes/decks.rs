//! Deck HTTP routes. Thin adapters only: lookups and status mapping.

use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::error::AppError;
use crate::services::DeckService;
use crate::state::app_state::AppState;

/// GET /api/decks
async fn get_all_decks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let decks = DeckService::new().list_decks(&app_state.decks);
    Ok(HttpResponse::Ok().json(&decks))
}

/// GET /api/decks/{deck_id}
async fn get_deck_by_id(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let deck = DeckService::new().get_deck(&app_state.decks, path.into_inner())?;
    Ok(HttpResponse::Ok().json(&*deck))
}

/// POST /api/decks
async fn create_deck(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let deck = DeckService::new().create_deck(&app_state.decks)?;
    Ok(HttpResponse::Created().json(&*deck))
}

/// DELETE /api/decks/{deck_id}
async fn delete_deck(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    DeckService::new().delete_deck(&app_state.decks, path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/decks")
            .route("", web::get().to(get_all_decks))
            .route("", web::post().to(create_deck))
            .route("/{deck_id}", web::get().to(get_deck_by_id))
            .route("/{deck_id}", web::delete().to(delete_deck)),
    );
}
