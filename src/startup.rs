use std::io;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::category::Catalog;
use crate::config::Config;
use crate::error::Error;
use crate::game::actor::GameActor;
use crate::routes;

pub fn load_catalog(config: &Config) -> Result<Catalog, Error> {
    match &config.game.categories_file {
        Some(file_path) => Catalog::from_file(file_path),
        None => {
            log::info!("No categories file configured, using the built-in catalog.");
            Ok(Catalog::builtin())
        }
    }
}

pub async fn create_web_server(config: Config, listener: TcpListener) -> Result<(), io::Error> {
    let catalog = load_catalog(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;

    let game_client = Arc::new(GameActor::spawn(config.game.clone(), catalog));
    let router = routes::create_router(&config).with_state(game_client);

    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
