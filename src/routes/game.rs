use std::sync::Arc;

use axum::extract::{State, WebSocketUpgrade};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::StatusCode;
use serde::Serialize;

use crate::category::CategorySummary;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::actor_client::{CommandOutcome, GameClient};
use crate::game::cue::Cue;
use crate::game::snapshot::GameSnapshot;
use crate::websocket::connection::ClientConnection;
use crate::websocket::message::ErrorBody;
use crate::websocket::parse_message;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    snapshot: GameSnapshot,
    cues: Vec<Cue>,
}

impl From<CommandOutcome> for CommandResponse {
    fn from(outcome: CommandOutcome) -> Self {
        CommandResponse {
            snapshot: outcome.snapshot,
            cues: outcome.cues,
        }
    }
}

pub async fn categories(State(game): State<Arc<GameClient>>) -> Json<Vec<CategorySummary>> {
    Json(game.categories())
}

pub async fn snapshot(State(game): State<Arc<GameClient>>) -> Response {
    match game.snapshot().await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn execute_command(State(game): State<Arc<GameClient>>, body: String) -> Response {
    let command = match parse_message(&body) {
        Ok(command) => command,
        Err(error) => return error_response(&error),
    };

    match game.execute(command).await {
        Ok(outcome) => (StatusCode::OK, Json(CommandResponse::from(outcome))).into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn connect_client_to_websocket(
    State(game): State<Arc<GameClient>>,
    websocket_upgrade: WebSocketUpgrade,
) -> Response {
    let game = GameClient::clone(&game);
    websocket_upgrade
        .on_upgrade(move |websocket| async move { ClientConnection::create(game, websocket).await })
}

fn error_response(error: &Error) -> Response {
    (status_code(error), Json(ErrorBody::from(error))).into_response()
}

fn status_code(error: &Error) -> StatusCode {
    match error {
        Error::Domain(DomainError::UnknownCategory(_)) => StatusCode::NOT_FOUND,
        Error::Domain(DomainError::InvalidCommand(_, _)) => StatusCode::CONFLICT,
        Error::Domain(DomainError::EmptyCategory(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Domain(DomainError::InvalidTeam(_)) => StatusCode::BAD_REQUEST,
        Error::UnprocessableMessage(_, _) => StatusCode::BAD_REQUEST,
        Error::Domain(DomainError::DuplicateCategory(_))
        | Error::Internal(_)
        | Error::WebsocketClosed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
