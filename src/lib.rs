pub mod category;
pub mod config;
pub mod error;
pub mod game;
pub mod metrics;
mod routes;
pub mod startup;
pub mod websocket;
