use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockEvent {
    /// The word timer reached 0, the word has to be passed on.
    PassWarning,
    /// The round timer reached 0, both timers are stopped.
    RoundExpired,
}

/// Round and word countdowns, both advanced by the same heartbeat.
#[derive(Debug, Clone)]
pub struct RoundClock {
    round_duration: u8,
    word_duration: u8,
    round_time_left: u8,
    word_time_left: u8,
    is_running: bool,
}

impl Default for RoundClock {
    fn default() -> Self {
        RoundClock::new(RoundClock::ROUND_SECONDS, RoundClock::WORD_SECONDS)
    }
}

impl RoundClock {
    pub const ROUND_SECONDS: u8 = 60;
    pub const WORD_SECONDS: u8 = 15;

    pub fn new(round_duration: u8, word_duration: u8) -> Self {
        let round_duration = round_duration.max(1);
        let word_duration = word_duration.max(1);
        RoundClock {
            round_duration,
            word_duration,
            round_time_left: round_duration,
            word_time_left: word_duration,
            is_running: false,
        }
    }

    pub fn round_duration(&self) -> u8 {
        self.round_duration
    }

    pub fn word_duration(&self) -> u8 {
        self.word_duration
    }

    pub fn round_time_left(&self) -> u8 {
        self.round_time_left
    }

    pub fn word_time_left(&self) -> u8 {
        self.word_time_left
    }

    pub fn pass_warning_active(&self) -> bool {
        self.word_time_left == 0
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Rewinds both timers to their full duration and starts counting.
    pub fn arm(&mut self) {
        self.round_time_left = self.round_duration;
        self.word_time_left = self.word_duration;
        self.is_running = true;
    }

    /// Rewinds both timers without starting them.
    pub fn reset(&mut self) {
        self.round_time_left = self.round_duration;
        self.word_time_left = self.word_duration;
        self.is_running = false;
    }

    pub fn reset_word(&mut self) {
        self.word_time_left = self.word_duration;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    pub fn resume(&mut self) {
        if self.round_time_left > 0 {
            self.is_running = true;
        }
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Advances both timers by one second. Round expiry wins over a pass warning
    /// raised on the same tick and halts the word timer.
    pub fn tick(&mut self) -> Option<ClockEvent> {
        if !self.is_running || self.round_time_left == 0 {
            return None;
        }

        self.round_time_left -= 1;
        if self.round_time_left == 0 {
            self.is_running = false;
            return Some(ClockEvent::RoundExpired);
        }

        if self.word_time_left > 0 {
            self.word_time_left -= 1;
            if self.word_time_left == 0 {
                return Some(ClockEvent::PassWarning);
            }
        }
        None
    }

    /// Cadence of the presentation tick sound, faster as the round runs out.
    pub fn tick_interval(&self) -> Duration {
        let millis = match self.round_time_left {
            31.. => 1000,
            21..=30 => 800,
            11..=20 => 600,
            6..=10 => 400,
            _ => 200,
        };
        Duration::from_millis(millis)
    }
}
