use serde::Serialize;

use crate::category::CategorySummary;
use crate::game::game_fsm::{serialize_state, GameFsmState};
use crate::game::turn_tracker::{RoundStats, Team};

/// Read-only view of the game handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(serialize_with = "serialize_state")]
    pub phase: GameFsmState,
    pub selected_category: Option<CategorySummary>,
    pub round_time_left: u8,
    pub round_duration: u8,
    pub word_time_left: u8,
    pub word_duration: u8,
    pub pass_warning_active: bool,
    pub current_word: Option<String>,
    pub used_words: Vec<String>,
    pub current_team: Team,
    pub round_stats: RoundStats,
    pub losing_team: Option<Team>,
    pub team1_score: i32,
    pub team2_score: i32,
    pub tick_interval_millis: u64,
}

impl GameSnapshot {
    pub fn score(&self, team: Team) -> i32 {
        match team {
            Team::One => self.team1_score,
            Team::Two => self.team2_score,
        }
    }
}
