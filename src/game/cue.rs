use serde::Serialize;

/// Presentation hints raised by a transition, mapped to sounds and animations by the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    RoundStart,
    Correct,
    Skip,
    Pause,
    Resume,
    PassWarning,
    TimeExpired,
}
