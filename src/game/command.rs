use serde::Deserialize;

use crate::game::turn_tracker::Team;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Command {
    SelectCategory {
        #[serde(rename = "categoryId")]
        category_id: String,
    },
    StartGame,
    TogglePause,
    GotIt,
    Skip,
    ContinueToStats,
    ContinueToSteal,
    StealDecision {
        #[serde(rename = "didSteal")]
        did_steal: bool,
    },
    AdjustScore {
        team: Team,
        delta: i32,
    },
    NextRound,
    ResetGame,
    RestartRound,
    BackToCategories,
}
