//! Session runner.
//!
//! Drives one planned session through the frontend: present, read, grade,
//! give feedback, and stop when the plan is exhausted or the time limit is
//! reached at a question boundary.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::QuizConfig;
use crate::planner::SessionPlan;
use crate::report::{SessionOutcome, SessionReport};
use crate::score::ScoreKeeper;
use crate::traits::{Clock, QuizFrontend, SystemClock};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    TimedOut,
    Completed,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionState::TimedOut | SessionState::Completed)
    }
}

/// Runs one session of a quiz.
pub struct SessionRunner<'a, C: Clock = SystemClock> {
    config: &'a QuizConfig,
    plan: SessionPlan<'a>,
    clock: C,
    state: SessionState,
    score: ScoreKeeper,
    skipped: u32,
    elapsed: Duration,
    finished_at: Option<DateTime<Utc>>,
    session_id: Uuid,
}

impl<'a> SessionRunner<'a, SystemClock> {
    pub fn new(config: &'a QuizConfig, plan: SessionPlan<'a>) -> Self {
        Self::with_clock(config, plan, SystemClock)
    }
}

impl<'a, C: Clock> SessionRunner<'a, C> {
    pub fn with_clock(config: &'a QuizConfig, plan: SessionPlan<'a>, clock: C) -> Self {
        Self {
            config,
            plan,
            clock,
            state: SessionState::NotStarted,
            score: ScoreKeeper::new(config.passing_score),
            skipped: 0,
            elapsed: Duration::ZERO,
            finished_at: None,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Run the session to the end and return its report.
    ///
    /// A session runs once; calling this again returns the same result
    /// without presenting anything.
    pub fn run(&mut self, frontend: &mut dyn QuizFrontend) -> SessionReport {
        if self.state.is_finished() {
            tracing::warn!(state = ?self.state, "session already ran");
            return self.report();
        }

        let span = tracing::info_span!("session", id = %self.session_id, title = %self.config.title);
        let _enter = span.enter();

        let started_at = self.clock.now();
        self.state = SessionState::Running;
        tracing::info!(questions = self.plan.len(), "session started");

        let settings = self.config.settings;
        let time_limit = self.config.enforced_time_limit();
        frontend.on_session_start(self.config, self.plan.len());

        for (i, question) in self.plan.iter().enumerate() {
            let number = i + 1;

            if let Some(limit) = time_limit {
                if self.clock.now().saturating_duration_since(started_at) >= limit {
                    tracing::info!(presented = i, "time limit reached");
                    self.state = SessionState::TimedOut;
                    frontend.on_timed_out();
                    break;
                }
            }

            frontend.present(number, question, settings.allow_skipping);
            self.score.record_presented();
            let answer = frontend.read_answer();

            if settings.allow_skipping && answer.is_empty() {
                tracing::debug!(id = %question.id, "skipped");
                self.skipped += 1;
                frontend.on_skipped(number);
                continue;
            }

            let correct = question.check(&answer);
            tracing::debug!(id = %question.id, correct, "graded answer");
            if correct {
                self.score.record_correct();
            }
            if settings.show_feedback_after_each {
                frontend.on_feedback(correct);
            }
        }

        if self.state == SessionState::Running {
            self.state = SessionState::Completed;
        }
        self.elapsed = self.clock.now().saturating_duration_since(started_at);
        self.finished_at = Some(self.clock.wall_time());

        let report = self.report();
        tracing::info!(
            outcome = %report.outcome,
            correct = report.correct,
            total = report.total,
            passed = report.passed,
            "session finished"
        );
        frontend.on_session_end(&report);
        report
    }

    fn report(&self) -> SessionReport {
        let outcome = match self.state {
            SessionState::TimedOut => SessionOutcome::TimedOut,
            _ => SessionOutcome::Completed,
        };
        SessionReport::new(
            self.session_id,
            &self.config.title,
            outcome,
            &self.score,
            self.plan.len() as u32,
            self.skipped,
            self.elapsed.as_millis() as u64,
            self.finished_at.unwrap_or_else(|| self.clock.wall_time()),
        )
    }
}
