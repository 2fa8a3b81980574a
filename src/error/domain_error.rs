use thiserror::Error;

use crate::game::game_fsm::{GameFsmInput, GameFsmState};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("The category has no words. CategoryId: '{0}'.")]
    EmptyCategory(String),
    #[error("The category does not exist. CategoryId: '{0}'.")]
    UnknownCategory(String),
    #[error("The category is defined more than once. CategoryId: '{0}'.")]
    DuplicateCategory(String),
    #[error("The command is not allowed in the current phase. Command: '{0:?}', Phase: '{1:?}'.")]
    InvalidCommand(GameFsmInput, GameFsmState),
    #[error("There is no such team. Team: '{0}', ValidTeams: '1, 2'.")]
    InvalidTeam(u8),
}
