pub mod actor;
pub mod actor_client;
pub mod command;
pub mod cue;
pub mod game_fsm;
pub mod round_clock;
pub mod snapshot;
pub mod turn_tracker;
pub mod word_pool;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_fsm::{StateMachine, StateMachineImpl};
use std::sync::Arc;

use crate::category::{Catalog, Category};
use crate::config::GameSettings;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::command::Command;
use crate::game::cue::Cue;
use crate::game::game_fsm::{GameFsm, GameFsmInput, GameFsmState};
use crate::game::round_clock::{ClockEvent, RoundClock};
use crate::game::snapshot::GameSnapshot;
use crate::game::turn_tracker::{Team, TurnTracker};
use crate::game::word_pool::WordPool;

/// The round state machine. Owns every piece of game state and the score.
pub struct Game {
    catalog: Arc<Catalog>,
    fsm: StateMachine<GameFsm>,
    selected_category: Option<Arc<Category>>,
    clock: RoundClock,
    word_pool: WordPool,
    turns: TurnTracker,
    current_word: Option<String>,
    losing_team: Option<Team>,
    team1_score: i32,
    team2_score: i32,
    rng: StdRng,
}

impl Game {
    const POSSESSION_LOSS_POINTS: i32 = 1;
    const STEAL_POINTS: i32 = 2;

    pub fn new(catalog: Arc<Catalog>, settings: &GameSettings) -> Self {
        Game::with_rng(catalog, settings, StdRng::from_entropy())
    }

    pub fn with_rng(catalog: Arc<Catalog>, settings: &GameSettings, rng: StdRng) -> Self {
        Self {
            catalog,
            fsm: StateMachine::default(),
            selected_category: None,
            clock: RoundClock::new(
                settings.round_duration_seconds,
                settings.word_duration_seconds,
            ),
            word_pool: WordPool::default(),
            turns: TurnTracker::default(),
            current_word: None,
            losing_team: None,
            team1_score: 0,
            team2_score: 0,
            rng,
        }
    }

    pub fn state(&self) -> &GameFsmState {
        self.fsm.state()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut used_words: Vec<String> = self.word_pool.used_words().iter().cloned().collect();
        used_words.sort();

        GameSnapshot {
            phase: self.state().clone(),
            selected_category: self
                .selected_category
                .as_ref()
                .map(|category| category.summary()),
            round_time_left: self.clock.round_time_left(),
            round_duration: self.clock.round_duration(),
            word_time_left: self.clock.word_time_left(),
            word_duration: self.clock.word_duration(),
            pass_warning_active: self.clock.pass_warning_active(),
            current_word: if self.state() == &GameFsmState::Playing {
                self.current_word.clone()
            } else {
                None
            },
            used_words,
            current_team: self.turns.current_team(),
            round_stats: self.turns.stats().clone(),
            losing_team: self.losing_team,
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            tick_interval_millis: self.clock.tick_interval().as_millis() as u64,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Vec<Cue>, Error> {
        match command {
            Command::SelectCategory { category_id } => self.select_category(&category_id),
            Command::StartGame => self.start_game(),
            Command::TogglePause => self.toggle_pause(),
            Command::GotIt => self.got_it(),
            Command::Skip => self.skip(),
            Command::ContinueToStats => self.continue_to_stats(),
            Command::ContinueToSteal => self.continue_to_steal(),
            Command::StealDecision { did_steal } => self.steal_decision(did_steal),
            Command::AdjustScore { team, delta } => self.adjust_score(team, delta),
            Command::NextRound => self.next_round(),
            Command::ResetGame => self.reset_game(),
            Command::RestartRound => self.restart_round(),
            Command::BackToCategories => self.back_to_categories(),
        }
    }

    pub fn select_category(&mut self, category_id: &str) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::SelectCategory)?;
        let category = self.catalog.get(category_id).ok_or_else(|| {
            Error::Domain(DomainError::UnknownCategory(category_id.to_string()))
        })?;
        if category.words.is_empty() {
            return Err(Error::Domain(DomainError::EmptyCategory(category.id.clone())));
        }

        self.selected_category = Some(category);
        self.process_event(&GameFsmInput::SelectCategory)?;
        Ok(vec![])
    }

    pub fn back_to_categories(&mut self) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::BackToCategories)?;
        self.selected_category = None;
        Ok(vec![])
    }

    pub fn start_game(&mut self) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::StartGame)?;
        self.begin_round()?;
        self.process_event(&GameFsmInput::StartGame)?;
        Ok(vec![Cue::RoundStart])
    }

    pub fn restart_round(&mut self) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::RestartRound)?;
        self.begin_round()?;
        self.process_event(&GameFsmInput::RestartRound)?;
        Ok(vec![Cue::RoundStart])
    }

    pub fn toggle_pause(&mut self) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::TogglePause)?;
        if self.state() == &GameFsmState::Paused {
            self.clock.pause();
            Ok(vec![Cue::Pause])
        } else {
            self.clock.resume();
            Ok(vec![Cue::Resume])
        }
    }

    pub fn got_it(&mut self) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::GotIt)?;
        let next_word = self.draw_word()?;
        if let Some(word) = self.current_word.replace(next_word) {
            self.turns.on_correct(word);
        }
        self.process_event(&GameFsmInput::GotIt)?;
        Ok(vec![Cue::Correct])
    }

    pub fn skip(&mut self) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::Skip)?;
        let next_word = self.draw_word()?;
        if let Some(word) = self.current_word.replace(next_word) {
            self.turns.on_skip(word);
        }
        self.process_event(&GameFsmInput::Skip)?;
        Ok(vec![Cue::Skip])
    }

    /// Advances the round by one second. Only the round timer expiring moves the phase.
    pub fn tick(&mut self) -> Vec<Cue> {
        if self.state() != &GameFsmState::Playing {
            return vec![];
        }

        match self.clock.tick() {
            Some(ClockEvent::RoundExpired) => {
                self.clock.stop();
                self.current_word = None;
                self.losing_team = Some(self.turns.current_team());
                if let Err(error) = self.process_event(&GameFsmInput::TimeExpired) {
                    log::error!("Round timer expired but the round could not be closed. Error: '{error}'.");
                    return vec![];
                }
                log::info!(
                    "Round over, time expired. LosingTeam: '{}'.",
                    self.turns.current_team()
                );
                vec![Cue::TimeExpired]
            }
            Some(ClockEvent::PassWarning) => vec![Cue::PassWarning],
            None => vec![],
        }
    }

    pub fn continue_to_stats(&mut self) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::ContinueToStats)?;
        let losing_team = self.losing_team()?;
        self.process_event(&GameFsmInput::ContinueToStats)?;
        // Correct guesses in the round stats never score, only possession at expiry does
        self.add_points(losing_team, Game::POSSESSION_LOSS_POINTS);
        Ok(vec![])
    }

    pub fn continue_to_steal(&mut self) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::ContinueToSteal)?;
        Ok(vec![])
    }

    pub fn steal_decision(&mut self, did_steal: bool) -> Result<Vec<Cue>, Error> {
        self.ensure_allowed(&GameFsmInput::StealDecision)?;
        let losing_team = self.losing_team()?;
        self.process_event(&GameFsmInput::StealDecision)?;
        if did_steal {
            self.add_points(losing_team.opponent(), Game::STEAL_POINTS);
        }
        self.losing_team = None;
        Ok(vec![])
    }

    pub fn adjust_score(&mut self, team: Team, delta: i32) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::AdjustScore)?;
        self.add_points(team, delta);
        Ok(vec![])
    }

    pub fn next_round(&mut self) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::NextRound)?;
        self.clear_round();
        Ok(vec![])
    }

    pub fn reset_game(&mut self) -> Result<Vec<Cue>, Error> {
        self.process_event(&GameFsmInput::ResetGame)?;
        self.clear_round();
        self.team1_score = 0;
        self.team2_score = 0;
        Ok(vec![])
    }

    fn begin_round(&mut self) -> Result<(), Error> {
        self.word_pool.clear();
        self.turns.reset();
        self.losing_team = None;
        self.clock.arm();
        self.current_word = Some(self.draw_word()?);
        log::info!(
            "Round started. CategoryId: '{}'.",
            self.selected_category
                .as_ref()
                .map(|category| category.id.as_str())
                .unwrap_or_default()
        );
        Ok(())
    }

    fn clear_round(&mut self) {
        self.clock.reset();
        self.word_pool.clear();
        self.turns.reset();
        self.current_word = None;
        self.losing_team = None;
        self.selected_category = None;
    }

    fn draw_word(&mut self) -> Result<String, Error> {
        let category = self.selected_category.as_ref().ok_or_else(|| {
            Error::log_and_create_internal("Tried to draw a word without a selected category.")
        })?;
        let word = self.word_pool.draw(category, &mut self.rng)?;
        self.clock.reset_word();
        Ok(word)
    }

    fn losing_team(&self) -> Result<Team, Error> {
        self.losing_team.ok_or_else(|| {
            Error::log_and_create_internal(&format!(
                "The round is over but there is no losing team. Phase: '{}'.",
                self.state()
            ))
        })
    }

    fn add_points(&mut self, team: Team, points: i32) {
        match team {
            Team::One => self.team1_score = self.team1_score.saturating_add(points),
            Team::Two => self.team2_score = self.team2_score.saturating_add(points),
        }
    }

    fn ensure_allowed(&self, input: &GameFsmInput) -> Result<(), Error> {
        if GameFsm::transition(self.state(), input).is_some() {
            Ok(())
        } else {
            Err(self.invalid_command(input))
        }
    }

    fn process_event(&mut self, input: &GameFsmInput) -> Result<(), Error> {
        match self.fsm.consume(input) {
            Ok(_) => Ok(()),
            Err(_) => Err(self.invalid_command(input)),
        }
    }

    fn invalid_command(&self, input: &GameFsmInput) -> Error {
        log::warn!(
            "Rejected command, the fsm in state {:?} can't transition with an event {:?}.",
            self.state(),
            input
        );
        Error::Domain(DomainError::InvalidCommand(
            input.clone(),
            self.state().clone(),
        ))
    }
}
