//! Final session report.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::score::ScoreKeeper;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Every planned question was presented.
    Completed,
    /// The time limit expired at a question boundary.
    TimedOut,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionOutcome::Completed => write!(f, "completed"),
            SessionOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// The result of one quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub session_id: Uuid,
    /// Title of the quiz.
    pub title: String,
    pub outcome: SessionOutcome,
    /// Correctly answered questions.
    pub correct: u32,
    /// Presented questions, skipped ones included.
    pub total: u32,
    /// Questions in the plan.
    pub planned: u32,
    /// Questions skipped with an empty answer.
    pub skipped: u32,
    pub percentage: u32,
    pub passed: bool,
    /// Threshold the session was scored against (0 = none).
    pub passing_score: u32,
    /// Wall-clock session duration in milliseconds.
    pub elapsed_ms: u64,
    /// When the session ended.
    pub finished_at: DateTime<Utc>,
}

impl SessionReport {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        session_id: Uuid,
        title: &str,
        outcome: SessionOutcome,
        score: &ScoreKeeper,
        planned: u32,
        skipped: u32,
        elapsed_ms: u64,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            title: title.to_string(),
            outcome,
            correct: score.correct,
            total: score.total,
            planned,
            skipped,
            percentage: score.percentage(),
            passed: score.passed(),
            passing_score: score.passing_score,
            elapsed_ms,
            finished_at,
        }
    }

    /// "Score: 7/10 (70%)".
    pub fn score_line(&self) -> String {
        format!("Score: {}/{} ({}%)", self.correct, self.total, self.percentage)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
