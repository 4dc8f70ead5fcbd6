//! quizrun-core: the quiz session engine.
//!
//! This crate defines the quiz data model, loads quizzes from disk, plans
//! sessions, runs them against a frontend, and scores the result.

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod planner;
pub mod report;
pub mod score;
pub mod traits;

pub use engine::{SessionRunner, SessionState};
pub use error::QuizError;
pub use model::{DisplaySettings, Question, QuestionBank, QuestionKind, Quiz, QuizConfig};
pub use planner::{plan, SessionPlan};
pub use report::{SessionOutcome, SessionReport};
pub use score::ScoreKeeper;
pub use traits::{Clock, QuizFrontend, SystemClock};
