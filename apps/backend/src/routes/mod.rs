use actix_web::web;

pub mod decks;
pub mod games;
pub mod players;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(decks::configure_routes)
        .configure(players::configure_routes)
        .configure(games::configure_routes);
}
