//! Session state: score, combo, countdown, and run status.
//!
//! A single owned struct holds everything that is not tile state. Only
//! the engine's transition operations mutate it — there are no ambient
//! globals and no interior mutability.

use serde::{Deserialize, Serialize};

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The countdown reached zero.
    TimeUp,
    /// Every pair on the board was found.
    Cleared,
}

/// Run status of a session.
///
/// `Ended` is terminal: a finished session cannot be resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Transitions and the countdown are live.
    Running,
    /// Frozen: selections, ticks, and pending timers all wait.
    Paused,
    /// The game is over.
    Ended(EndReason),
}

/// Mutable per-session counters.
///
/// `score` never goes below zero — variants that apply a mismatch
/// penalty floor it when computing the new score. `high_score` is the
/// running maximum of `score`, maintained only for variants that track
/// it (see `GameRules::tracks_high_score`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current score.
    pub score: i64,

    /// Highest score reached this session.
    pub high_score: i64,

    /// Consecutive-match streak. Reset to zero on any mismatch.
    pub combo: u32,

    /// Pairs found so far.
    pub pairs_found: u32,

    /// Seconds left on the countdown.
    pub remaining_seconds: u32,

    /// Run status.
    pub status: GameStatus,
}

impl SessionState {
    /// Create a fresh session with a full countdown.
    #[must_use]
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            combo: 0,
            pairs_found: 0,
            remaining_seconds: initial_seconds,
            status: GameStatus::Running,
        }
    }

    /// Is the session live (not paused, not ended)?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Has the session finished?
    #[must_use]
    pub fn has_ended(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    /// Why the session ended, if it has.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.status {
            GameStatus::Ended(reason) => Some(reason),
            _ => None,
        }
    }

    /// Render the remaining time as `M:SS` with zero-padded seconds.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format a second count as `M:SS` with zero-padded seconds.
///
/// This is the required rendering wherever a countdown is displayed.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SessionState::new(180);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
        assert_eq!(session.combo, 0);
        assert_eq!(session.pairs_found, 0);
        assert_eq!(session.remaining_seconds, 180);
        assert!(session.is_running());
        assert!(!session.has_ended());
        assert_eq!(session.end_reason(), None);
    }

    #[test]
    fn test_status_queries() {
        let mut session = SessionState::new(60);

        session.status = GameStatus::Paused;
        assert!(!session.is_running());
        assert!(!session.has_ended());

        session.status = GameStatus::Ended(EndReason::TimeUp);
        assert!(!session.is_running());
        assert!(session.has_ended());
        assert_eq!(session.end_reason(), Some(EndReason::TimeUp));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(180), "3:00");
        assert_eq!(format_clock(67), "1:07");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_clock_on_session() {
        let session = SessionState::new(125);
        assert_eq!(session.clock(), "2:05");
    }

    #[test]
    fn test_serde_round_trip() {
        let session = SessionState {
            score: 340,
            high_score: 400,
            combo: 2,
            pairs_found: 3,
            remaining_seconds: 91,
            status: GameStatus::Ended(EndReason::Cleared),
        };

        let json = serde_json::to_string(&session).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
