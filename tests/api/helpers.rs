use std::net::SocketAddr;

use futures_util::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use once_cell::sync::Lazy;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};
use word_dash::config::Config;

static ENVIRONMENT: Lazy<()> = Lazy::new(|| std::env::set_var("ENVIRONMENT", "dev"));

pub struct TestApp {
    pub base_address: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub r#type: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub snapshot: Value,
    pub cues: Vec<String>,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        TestApp::spawn_app_with(|_| {}).await
    }

    pub async fn spawn_app_with<F>(customize: F) -> TestApp
    where
        F: FnOnce(&mut Config),
    {
        Lazy::force(&ENVIRONMENT);
        // Binding to port 0 triggers an OS scan for an available port, this way we can run tests in parallel where each runs its own application
        let random_port_address = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(random_port_address)
            .await
            .expect("Failed to bind to bind random port.");
        let address = listener.local_addr().unwrap();
        let config = {
            let mut config = Config::get().expect("Failed to read configuration.");
            config.game.heartbeat_millis = 50;
            customize(&mut config);
            config
        };

        let _ = tokio::spawn(word_dash::startup::create_web_server(config, listener));

        TestApp {
            base_address: format!("localhost:{}", address.port()),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("http://{}{path}", self.base_address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_command(&self, body: String) -> Response {
        self.client
            .post(format!("http://{}/game/commands", self.base_address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_command(&self, command: Value) -> Response {
        self.post_raw_command(command.to_string()).await
    }

    pub async fn execute(&self, command: Value) -> CommandResponse {
        let response = self.post_command(command).await;
        assert_eq!(response.status(), StatusCode::OK);
        response
            .json()
            .await
            .expect("Failed to parse CommandResponse.")
    }

    pub async fn start_round(&self, category_id: &str) -> CommandResponse {
        self.execute(json!({"type": "selectCategory", "categoryId": category_id}))
            .await;
        self.execute(json!({"type": "startGame"})).await
    }

    pub async fn open_websocket(&self) -> TestClient {
        let (websocket, _) =
            tokio_tungstenite::connect_async(format!("ws://{}/game/ws", self.base_address))
                .await
                .expect("WebSocket could not be created.");
        let (tx, rx) = websocket.split();
        TestClient { tx, rx }
    }
}

pub struct TestClient {
    pub tx: SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>,
    pub rx: SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl TestClient {
    pub async fn receive_text(&mut self) -> String {
        match self.rx.next().await {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(message)) => panic!("Expected a text message but got '{message:?}'."),
            Some(Err(error)) => panic!("Websocket returned an error {error}"),
            None => panic!("Websocket closed before expected."),
        }
    }

    pub async fn receive_json(&mut self) -> Value {
        serde_json::from_str(&self.receive_text().await).expect("Message was not JSON")
    }

    pub async fn send_command(&mut self, command: Value) {
        self.send_text(command.to_string()).await;
    }

    pub async fn send_text(&mut self, text: String) {
        self.tx
            .send(Message::Text(text))
            .await
            .expect("Could not send message");
    }
}
