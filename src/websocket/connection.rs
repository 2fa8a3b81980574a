use axum::extract::ws::{Message, WebSocket};

use crate::error::Error;
use crate::game::actor::GameWideEvent;
use crate::game::actor_client::{GameClient, GameWideEventReceiver};
use crate::metrics::CONNECTED_CLIENTS;
use crate::websocket::message::WsMessageOut;
use crate::websocket::{close, parse_message, send_error, send_message, send_message_string};

/// Streams game state to one presentation client and forwards its commands to the game.
pub struct ClientConnection {
    game: GameClient,
    game_wide_event_receiver: GameWideEventReceiver,
    websocket: WebSocket,
}

impl ClientConnection {
    pub async fn create(game: GameClient, mut websocket: WebSocket) {
        match game.subscribe().await {
            Ok((game_wide_event_receiver, snapshot)) => {
                let initial_state = WsMessageOut::GameState {
                    snapshot,
                    cues: vec![],
                };
                if let Err(error) = send_message(&mut websocket, &initial_state).await {
                    log::info!("Could not send the initial state to the client. Error: '{error}'.");
                    return;
                }
                ClientConnection {
                    game,
                    game_wide_event_receiver,
                    websocket,
                }
                .start()
                .await
            }
            Err(error) => {
                send_error(&mut websocket, &error).await;
                close(websocket).await;
            }
        }
    }

    async fn start(mut self) {
        CONNECTED_CLIENTS.inc();

        loop {
            tokio::select! {
                game_wide_message = self.game_wide_event_receiver.next() => {
                    if let Err(error) = self.receive_game_wide_message(game_wide_message).await {
                        send_error(&mut self.websocket, &error).await;
                        if error.should_close_websocket() {
                            break;
                        }
                    }
                },
                websocket_message = self.websocket.recv() => {
                    if let Err(error) = self.receive_websocket_message(websocket_message).await {
                        if error.should_close_websocket() {
                            break;
                        }
                        send_error(&mut self.websocket, &error).await;
                    }
                },
            }
        }

        close(self.websocket).await;
        CONNECTED_CLIENTS.dec();
    }

    async fn receive_game_wide_message(
        &mut self,
        game_wide_message: Result<GameWideEvent, Error>,
    ) -> Result<(), Error> {
        match game_wide_message? {
            GameWideEvent::GameState { snapshot, cues } => {
                send_message(
                    &mut self.websocket,
                    &WsMessageOut::GameState { snapshot, cues },
                )
                .await
            }
        }
    }

    async fn receive_websocket_message(
        &mut self,
        websocket_message: Option<Result<Message, axum::Error>>,
    ) -> Result<(), Error> {
        match websocket_message {
            Some(Ok(Message::Text(txt))) => match txt.as_str() {
                "ping" => send_message_string(&mut self.websocket, "pong".to_string()).await,
                message => {
                    let command = parse_message(message)?;
                    // The new state reaches this client through the broadcast
                    self.game.execute(command).await.map(|_| ())
                }
            },
            Some(Ok(Message::Close(_))) => {
                ClientConnection::log_connection_lost("client sent 'Close' websocket frame");
                Err(Error::WebsocketClosed(
                    "client sent 'Close' websocket frame".to_string(),
                ))
            }
            None => {
                ClientConnection::log_connection_lost("other end of websocket was closed abruptly");
                Err(Error::WebsocketClosed(
                    "other end of websocket was closed abruptly".to_string(),
                ))
            }
            Some(Err(error)) => Err(Error::UnprocessableMessage(
                error.to_string(),
                "Message cannot be loaded".to_string(),
            )),
            // Ping and Pong frames are answered by axum
            Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => Ok(()),
            Some(Ok(Message::Binary(_))) => Err(Error::UnprocessableMessage(
                "Unsupported message type".to_string(),
                "Binary frame".to_string(),
            )),
        }
    }

    fn log_connection_lost(reason: &str) {
        log::info!("Connection with client lost due to: {reason}. Stopping client connection.");
    }
}
