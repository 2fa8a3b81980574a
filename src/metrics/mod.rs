use lazy_static::lazy_static;
use prometheus::{IntCounter, IntGauge, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ROUNDS_COMPLETED: IntCounter = IntCounter::new(
        "word_dash_rounds_completed",
        "Rounds played through to the scoreboard"
    )
    .expect("metric cannot be created");
    pub static ref STEALS: IntCounter =
        IntCounter::new("word_dash_steals", "Successful steals after a round")
            .expect("metric cannot be created");
    pub static ref CONNECTED_CLIENTS: IntGauge = IntGauge::new(
        "word_dash_connected_clients",
        "Amount of presentation clients connected through websockets"
    )
    .expect("metric cannot be created");
}

pub fn register_metrics() {
    REGISTRY
        .register(Box::new(ROUNDS_COMPLETED.clone()))
        .expect("collector cannot be registered");

    REGISTRY
        .register(Box::new(STEALS.clone()))
        .expect("collector cannot be registered");

    REGISTRY
        .register(Box::new(CONNECTED_CLIENTS.clone()))
        .expect("collector cannot be registered");
}
