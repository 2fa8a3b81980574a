use std::fmt::{Display, Formatter};
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::SendError;
use tokio::sync::oneshot::Sender as OneshotSender;
use tokio::sync::{
    broadcast, mpsc,
    mpsc::{Receiver, Sender},
};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::category::Catalog;
use crate::config::GameSettings;
use crate::error::Error;
use crate::game::actor_client::GameClient;
use crate::game::command::Command;
use crate::game::cue::Cue;
use crate::game::game_fsm::GameFsmState;
use crate::game::snapshot::GameSnapshot;
use crate::game::Game;
use crate::metrics::{ROUNDS_COMPLETED, STEALS};

pub struct GameActor {
    game: Game,
    game_rx: Receiver<GameCommand>,
    broadcast_tx: broadcast::Sender<GameWideEvent>,
    heartbeat_period: Duration,
    heartbeat: Option<Interval>,
}

impl GameActor {
    /// Runs the Game Actor in background and returns a Client to communicate with it
    pub fn spawn(settings: GameSettings, catalog: Catalog) -> GameClient {
        let catalog = Arc::new(catalog);
        let game = Game::new(Arc::clone(&catalog), &settings);
        GameActor::spawn_game(game, settings.heartbeat())
    }

    pub fn spawn_game(game: Game, heartbeat_period: Duration) -> GameClient {
        let catalog = Arc::clone(game.catalog());
        let (game_tx, game_rx): (Sender<GameCommand>, Receiver<GameCommand>) = mpsc::channel(128);
        let (broadcast_tx, _): (
            broadcast::Sender<GameWideEvent>,
            broadcast::Receiver<GameWideEvent>,
        ) = broadcast::channel(64);

        tokio::spawn(
            GameActor {
                game,
                game_rx,
                broadcast_tx,
                heartbeat_period,
                heartbeat: None,
            }
            .start(),
        );

        GameClient { game_tx, catalog }
    }

    async fn start(mut self) {
        loop {
            tokio::select! {
                command = self.game_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => {
                        log::info!("Game channel has been dropped. Stopping game actor.");
                        break;
                    }
                },
                _ = GameActor::next_heartbeat(&mut self.heartbeat) => {
                    // Paused rounds keep the heartbeat but nothing moves
                    if self.game.state() == &GameFsmState::Playing {
                        let cues = self.game.tick();
                        self.sync_heartbeat(&cues);
                        let _ = self.send_game_state(cues);
                    }
                }
            }
        }

        self.heartbeat = None;
    }

    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Subscribe { response_tx } => {
                let event = GameEvent::Subscribed {
                    broadcast_rx: self.broadcast_tx.subscribe(),
                    snapshot: self.game.snapshot(),
                };
                if let Err(event) = response_tx.send(event) {
                    log::error!("Sent {event} but the response channel is closed.");
                }
            }
            GameCommand::GetSnapshot { response_tx } => {
                if let Err(event) = response_tx.send(GameEvent::Snapshot {
                    snapshot: self.game.snapshot(),
                }) {
                    log::error!("Sent {event} but the response channel is closed.");
                }
            }
            GameCommand::Execute {
                command,
                response_tx,
            } => {
                let steal = match &command {
                    Command::StealDecision { did_steal } => Some(*did_steal),
                    _ => None,
                };
                let event = match self.game.execute(command) {
                    Ok(cues) => {
                        if let Some(did_steal) = steal {
                            ROUNDS_COMPLETED.inc();
                            if did_steal {
                                STEALS.inc();
                            }
                        }
                        self.sync_heartbeat(&cues);
                        let _ = self.send_game_state(cues.clone());
                        GameEvent::Executed {
                            snapshot: self.game.snapshot(),
                            cues,
                        }
                    }
                    Err(error) => GameEvent::Error { error },
                };
                if let Err(event) = response_tx.send(event) {
                    log::error!("Sent {event} but the response channel is closed.");
                }
            }
        }
    }

    /// Keeps one heartbeat alive while a round is on the table and tears it down otherwise.
    fn sync_heartbeat(&mut self, cues: &[Cue]) {
        match self.game.state() {
            GameFsmState::Playing | GameFsmState::Paused => {
                let rearm = self.heartbeat.is_none()
                    || cues
                        .iter()
                        .any(|cue| matches!(cue, Cue::RoundStart | Cue::Resume));
                if rearm {
                    let mut interval = time::interval_at(
                        Instant::now() + self.heartbeat_period,
                        self.heartbeat_period,
                    );
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    self.heartbeat = Some(interval);
                }
            }
            _ => {
                if self.heartbeat.take().is_some() {
                    log::debug!("Round is not running anymore, heartbeat stopped.");
                }
            }
        }
    }

    async fn next_heartbeat(heartbeat: &mut Option<Interval>) {
        match heartbeat {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }

    fn send_game_state(&self, cues: Vec<Cue>) -> Result<usize, SendError<GameWideEvent>> {
        self.broadcast_tx.send(GameWideEvent::GameState {
            snapshot: self.game.snapshot(),
            cues,
        })
    }
}

pub(crate) enum GameCommand {
    Subscribe {
        response_tx: OneshotSender<GameEvent>,
    },
    GetSnapshot {
        response_tx: OneshotSender<GameEvent>,
    },
    Execute {
        command: Command,
        response_tx: OneshotSender<GameEvent>,
    },
}

#[derive(Debug)]
pub(crate) enum GameEvent {
    Subscribed {
        broadcast_rx: broadcast::Receiver<GameWideEvent>,
        snapshot: GameSnapshot,
    },
    Snapshot {
        snapshot: GameSnapshot,
    },
    Executed {
        snapshot: GameSnapshot,
        cues: Vec<Cue>,
    },
    Error {
        error: Error,
    },
}

impl Display for GameEvent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                GameEvent::Subscribed { .. } => "GameEvent::Subscribed".to_string(),
                GameEvent::Snapshot { .. } => "GameEvent::Snapshot".to_string(),
                GameEvent::Executed { cues, .. } => format!("GameEvent::Executed(cues: {cues:?})"),
                GameEvent::Error { error } => format!("Error '{error}'"),
            }
        )
    }
}

#[derive(Clone, Debug)]
pub enum GameWideEvent {
    GameState {
        snapshot: GameSnapshot,
        cues: Vec<Cue>,
    },
}
