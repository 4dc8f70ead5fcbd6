//! Seams between the session engine and the outside world.
//!
//! A [`QuizFrontend`] presents questions and collects answers; a [`Clock`]
//! tells the runner how much time has passed. The CLI implements the
//! frontend for the terminal; tests script both.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::model::{Question, QuizConfig};
use crate::report::SessionReport;

// ---------------------------------------------------------------------------
// Frontend trait
// ---------------------------------------------------------------------------

/// Presentation and input for a running session.
///
/// Calls arrive in session order: `on_session_start`, then per question
/// `present` followed by `read_answer` and either `on_skipped` or
/// (optionally) `on_feedback`, possibly `on_timed_out`, and finally
/// `on_session_end`.
pub trait QuizFrontend {
    /// The session is about to present its first question.
    fn on_session_start(&mut self, config: &QuizConfig, question_count: usize);

    /// Show a question. `number` is 1-based.
    fn present(&mut self, number: usize, question: &Question, allow_skipping: bool);

    /// Block until the user enters one line of input.
    ///
    /// Returns the line without its line terminator. Implementations map
    /// end of input and read failures to an empty answer.
    fn read_answer(&mut self) -> String;

    /// An empty answer skipped the question.
    fn on_skipped(&mut self, number: usize);

    /// Result of grading one answer; only called when feedback is enabled.
    fn on_feedback(&mut self, correct: bool);

    /// The time limit expired before the next question.
    fn on_timed_out(&mut self);

    /// The session finished and was scored.
    fn on_session_end(&mut self, report: &SessionReport);
}

// ---------------------------------------------------------------------------
// Clock trait
// ---------------------------------------------------------------------------

/// Time source for the runner.
///
/// `now` drives time-limit checks; `wall_time` stamps the report.
pub trait Clock {
    fn now(&self) -> Instant;

    fn wall_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn wall_time(&self) -> DateTime<Utc> {
        (**self).wall_time()
    }
}
