pub mod connection;
pub mod message;

use axum::extract::ws::{Message, WebSocket};
use serde::Serialize;

use crate::error::Error;
use crate::game::command::Command;

use self::message::WsMessageOut;

pub async fn send_error(websocket: &mut WebSocket, error: &Error) {
    if let Err(send_error) = send_message(websocket, &WsMessageOut::from(error)).await {
        log::error!("Sent Error '{error}' to the client but the WebSocket is closed. Error: '{send_error}'.");
    }
}

pub async fn close(websocket: WebSocket) {
    if let Err(error) = websocket.close().await {
        log::error!("Could not close WebSocket. Error: '{error}'.")
    }
}

pub fn parse_message(message: &str) -> Result<Command, Error> {
    serde_json::from_str(message)
        .map_err(|error| Error::UnprocessableMessage(error.to_string(), message.to_string()))
}

pub async fn send_message<T>(websocket: &mut WebSocket, value: &T) -> Result<(), Error>
where
    T: ?Sized + Serialize,
{
    let message = serde_json::to_string(value).map_err(|error| {
        Error::log_and_create_internal(&format!(
            "Could not serialize the message. Error: '{error}'."
        ))
    })?;

    send_message_string(websocket, message).await
}

pub async fn send_message_string(websocket: &mut WebSocket, message: String) -> Result<(), Error> {
    websocket
        .send(Message::Text(message))
        .await
        .map_err(|error| Error::WebsocketClosed(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_message;
    use crate::error::Error;
    use crate::game::command::Command;

    #[test]
    fn parse_message_reads_commands() {
        assert_eq!(parse_message(r#"{"type": "skip"}"#), Ok(Command::Skip));
    }

    #[test]
    fn parse_message_rejects_unknown_commands() {
        let result = parse_message(r#"{"type": "cheat"}"#);

        assert!(matches!(result, Err(Error::UnprocessableMessage(_, message)) if message == r#"{"type": "cheat"}"#));
    }
}
