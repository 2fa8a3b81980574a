use serde::{Deserialize, Serialize};

use crate::error::domain_error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        match team {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            other => Err(DomainError::InvalidTeam(other)),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", u8::from(*self))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub team1_correct: Vec<String>,
    pub team2_correct: Vec<String>,
    pub skipped: Vec<String>,
}

impl RoundStats {
    pub fn correct(&self, team: Team) -> &[String] {
        match team {
            Team::One => &self.team1_correct,
            Team::Two => &self.team2_correct,
        }
    }
}

/// Who holds the word, and what happened to every word dealt this round.
#[derive(Debug, Clone)]
pub struct TurnTracker {
    current_team: Team,
    stats: RoundStats,
}

impl Default for TurnTracker {
    fn default() -> Self {
        TurnTracker {
            current_team: Team::One,
            stats: RoundStats::default(),
        }
    }
}

impl TurnTracker {
    pub fn current_team(&self) -> Team {
        self.current_team
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn on_correct(&mut self, word: String) {
        match self.current_team {
            Team::One => self.stats.team1_correct.push(word),
            Team::Two => self.stats.team2_correct.push(word),
        }
        self.current_team = self.current_team.opponent();
    }

    pub fn on_skip(&mut self, word: String) {
        self.stats.skipped.push(word);
    }

    pub fn reset(&mut self) {
        self.current_team = Team::One;
        self.stats = RoundStats::default();
    }
}
