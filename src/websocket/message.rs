use serde::Serialize;

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::cue::Cue;
use crate::game::snapshot::GameSnapshot;

#[derive(Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum WsMessageOut {
    Error {
        error: ErrorBody,
    },
    GameState {
        snapshot: GameSnapshot,
        cues: Vec<Cue>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub r#type: String,
    pub title: String,
    pub detail: String,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        let (r#type, title) = match error {
            Error::Domain(DomainError::EmptyCategory(_)) => {
                ("EMPTY_CATEGORY", "The category has no words")
            }
            Error::Domain(DomainError::UnknownCategory(_)) => {
                ("UNKNOWN_CATEGORY", "The category does not exist")
            }
            Error::Domain(DomainError::DuplicateCategory(_)) => {
                ("DUPLICATE_CATEGORY", "The category is defined more than once")
            }
            Error::Domain(DomainError::InvalidCommand(_, _)) => (
                "INVALID_COMMAND",
                "The command is not allowed in the current phase",
            ),
            Error::Domain(DomainError::InvalidTeam(_)) => ("INVALID_TEAM", "There is no such team"),
            Error::Internal(_) => ("INTERNAL_SERVER", "Internal Server error"),
            Error::UnprocessableMessage(_, _) => {
                ("UNPROCESSABLE_MESSAGE", "The message could not be processed")
            }
            Error::WebsocketClosed(_) => ("WEBSOCKET_CLOSED", "The client websocket is closed"),
        };
        ErrorBody {
            r#type: r#type.to_string(),
            title: title.to_string(),
            detail: error.to_string(),
        }
    }
}

impl From<&Error> for WsMessageOut {
    fn from(error: &Error) -> Self {
        WsMessageOut::Error {
            error: error.into(),
        }
    }
}
