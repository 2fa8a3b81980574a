use std::fmt;

use rust_fsm::state_machine;
use serde::Serializer;

/*
 * CategorySelect
 * Idle (category chosen, waiting for the round to start)
 * Round
 *    Playing <-> Paused
 *    RoundOver when the round timer reaches 0
 * Stats -> Steal -> Scoreboard
 * Scoreboard back to CategorySelect (next round or new game)
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub GameFsm(CategorySelect)

    CategorySelect => {
        SelectCategory => Idle
    },
    Idle => {
        StartGame => Playing,
        BackToCategories => CategorySelect
    },
    Playing => {
        GotIt => Playing,
        Skip => Playing,
        TogglePause => Paused,
        TimeExpired => RoundOver
    },
    Paused => {
        TogglePause => Playing,
        RestartRound => Playing
    },
    RoundOver => {
        ContinueToStats => Stats
    },
    Stats => {
        ContinueToSteal => Steal
    },
    Steal => {
        StealDecision => Scoreboard
    },
    Scoreboard => {
        AdjustScore => Scoreboard,
        NextRound => CategorySelect,
        ResetGame => CategorySelect
    }
}

impl fmt::Display for GameFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub(crate) fn serialize_state<S>(state: &GameFsmState, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(state)
}
