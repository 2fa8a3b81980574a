use crate::config::Config;
use crate::game::actor_client::GameClient;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod game;
mod health;
mod metrics;

pub fn create_router(config: &Config) -> Router<Arc<GameClient>> {
    Router::new()
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/categories", get(game::categories))
        .route("/game", get(game::snapshot))
        .route("/game/commands", post(game::execute_command))
        .route("/game/ws", get(game::connect_client_to_websocket))
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}
