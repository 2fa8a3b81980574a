use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::category::{Catalog, CategorySummary};
use crate::error::Error;
use crate::game::actor::{GameCommand, GameEvent, GameWideEvent};
use crate::game::command::Command;
use crate::game::cue::Cue;
use crate::game::snapshot::GameSnapshot;

#[derive(Clone, Debug)]
pub struct GameClient {
    pub(super) game_tx: Sender<GameCommand>,
    pub(super) catalog: Arc<Catalog>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub snapshot: GameSnapshot,
    pub cues: Vec<Cue>,
}

impl GameClient {
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.catalog.summaries()
    }

    pub async fn subscribe(&self) -> Result<(GameWideEventReceiver, GameSnapshot), Error> {
        match self
            .request(|response_tx| GameCommand::Subscribe { response_tx })
            .await?
        {
            GameEvent::Subscribed {
                broadcast_rx,
                snapshot,
            } => Ok((GameWideEventReceiver { broadcast_rx }, snapshot)),
            GameEvent::Error { error } => Err(error),
            event => Err(Error::log_and_create_internal(&format!(
                "Sent a GameCommand::Subscribe but received an unexpected response. Response: '{event}'."
            ))),
        }
    }

    pub async fn snapshot(&self) -> Result<GameSnapshot, Error> {
        match self
            .request(|response_tx| GameCommand::GetSnapshot { response_tx })
            .await?
        {
            GameEvent::Snapshot { snapshot } => Ok(snapshot),
            GameEvent::Error { error } => Err(error),
            event => Err(Error::log_and_create_internal(&format!(
                "Sent a GameCommand::GetSnapshot but received an unexpected response. Response: '{event}'."
            ))),
        }
    }

    pub async fn execute(&self, command: Command) -> Result<CommandOutcome, Error> {
        match self
            .request(|response_tx| GameCommand::Execute {
                command,
                response_tx,
            })
            .await?
        {
            GameEvent::Executed { snapshot, cues } => Ok(CommandOutcome { snapshot, cues }),
            GameEvent::Error { error } => Err(error),
            event => Err(Error::log_and_create_internal(&format!(
                "Sent a GameCommand::Execute but received an unexpected response. Response: '{event}'."
            ))),
        }
    }

    async fn request<F>(&self, create_command: F) -> Result<GameEvent, Error>
    where
        F: FnOnce(OneshotSender<GameEvent>) -> GameCommand,
    {
        let (tx, rx): (OneshotSender<GameEvent>, OneshotReceiver<GameEvent>) = oneshot::channel();

        self.game_tx
            .send(create_command(tx))
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "Tried to send a GameCommand but the GameActor is not listening. Error: '{error}'."
                ))
            })?;

        rx.await.map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Sent a GameCommand to the GameActor, but the response channel died. Error: '{error}'."
            ))
        })
    }
}

pub struct GameWideEventReceiver {
    broadcast_rx: broadcast::Receiver<GameWideEvent>,
}

impl GameWideEventReceiver {
    /// Waits for the next game state. A receiver that fell behind skips to the oldest state still buffered.
    pub async fn next(&mut self) -> Result<GameWideEvent, Error> {
        loop {
            match self.broadcast_rx.recv().await {
                Ok(event) => return Ok(event),
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Receiver is behind the Game broadcast. Skipped events: '{skipped}'.");
                }
                Err(RecvError::Closed) => {
                    return Err(Error::log_and_create_internal(
                        "The broadcast channel with the Game has been closed.",
                    ))
                }
            }
        }
    }
}
