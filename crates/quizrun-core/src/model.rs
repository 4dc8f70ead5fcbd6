//! Core data model types for quizrun.
//!
//! A quiz is a [`QuizConfig`] plus a [`QuestionBank`]. Questions are a closed
//! set of variants sharing one capability surface: [`Question::prompt`],
//! [`Question::options`] and [`Question::check`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// The options shown for every true/false question.
pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// Per-quiz configuration, as stored in a quiz directory's `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    /// Title shown in menus and the session header.
    pub title: String,
    /// Time limit in minutes; 0 means unlimited.
    #[serde(default)]
    pub time_limit: u32,
    /// Shuffle the planned questions before the session starts.
    #[serde(default)]
    pub randomize_order: bool,
    /// Percentage needed to pass; 0 means every session passes.
    #[serde(default)]
    pub passing_score: u32,
    /// Groups of interchangeable question identifiers, in presentation order.
    #[serde(default, rename = "questions")]
    pub question_groups: Vec<Vec<String>>,
    /// Display and flow settings.
    #[serde(default)]
    pub settings: DisplaySettings,
}

impl QuizConfig {
    /// The configured time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit > 0).then(|| Duration::from_secs(u64::from(self.time_limit) * 60))
    }

    /// The time limit the runner actually enforces.
    ///
    /// Elapsed time is only checked when the timer is shown.
    pub fn enforced_time_limit(&self) -> Option<Duration> {
        if self.settings.show_timer {
            self.time_limit()
        } else {
            None
        }
    }
}

/// Display and flow settings of a quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Print "Correct!"/"Incorrect." after every answer.
    #[serde(default)]
    pub show_feedback_after_each: bool,
    /// An empty answer skips the question instead of grading it.
    #[serde(default)]
    pub allow_skipping: bool,
    /// Show the time limit and enforce it.
    #[serde(default)]
    pub show_timer: bool,
}

/// The variant of a question, with any variant-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one of `options`, by text or by 1-based number.
    MultipleChoice { options: Vec<String> },
    /// Answer "true"/"false", or "1"/"2".
    TrueFalse,
    /// Free-form text.
    FillInBlank,
}

impl QuestionKind {
    /// The tag used for this variant in question files.
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::FillInBlank => "fill_in_blank",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single loaded question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Identifier, taken from the stem of the question's file name.
    pub id: String,
    /// The question text.
    pub prompt: String,
    /// Accepted answers; never empty.
    pub answers: Vec<String>,
    /// Variant and variant-specific data.
    pub kind: QuestionKind,
}

impl Question {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options to display, in order. Empty for fill-in-the-blank.
    pub fn options(&self) -> Vec<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                options.iter().map(String::as_str).collect()
            }
            QuestionKind::TrueFalse => TRUE_FALSE_OPTIONS.to_vec(),
            QuestionKind::FillInBlank => Vec::new(),
        }
    }

    /// Grade a raw answer exactly as typed.
    ///
    /// Surrounding whitespace is significant. A number that falls outside
    /// the option range of a multiple-choice question is compared literally.
    pub fn check(&self, raw_answer: &str) -> bool {
        let effective = match &self.kind {
            QuestionKind::MultipleChoice { options } => match raw_answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].as_str(),
                _ => raw_answer,
            },
            QuestionKind::TrueFalse => match raw_answer {
                "1" => "true",
                "2" => "false",
                other => other,
            },
            QuestionKind::FillInBlank => raw_answer,
        };
        self.accepts(effective)
    }

    /// Case-insensitive membership in the accepted answers.
    pub fn accepts(&self, answer: &str) -> bool {
        let answer = answer.to_lowercase();
        self.answers.iter().any(|a| a.to_lowercase() == answer)
    }
}

/// Loaded questions keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: BTreeMap<String, Question>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question, replacing any earlier question with the same id.
    pub fn insert(&mut self, question: Question) -> Option<Question> {
        self.questions.insert(question.id.clone(), question)
    }

    /// Look up a question by identifier.
    pub fn resolve(&self, id: &str) -> Result<&Question, QuizError> {
        self.questions
            .get(id)
            .ok_or_else(|| QuizError::QuestionNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.questions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut bank = QuestionBank::new();
        for question in iter {
            bank.insert(question);
        }
        bank
    }
}

/// A fully loaded quiz: its directory, configuration and questions.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub path: PathBuf,
    pub config: QuizConfig,
    pub bank: QuestionBank,
}
