//! Session planning.
//!
//! Resolves each question group of a quiz to one concrete question and
//! optionally shuffles the result. The random source is always passed in,
//! so a seeded generator reproduces a plan exactly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Question, QuestionBank, QuizConfig};

/// The ordered questions of one session. Fixed once planned.
#[derive(Debug, Clone)]
pub struct SessionPlan<'a> {
    questions: Vec<&'a Question>,
}

impl<'a> SessionPlan<'a> {
    pub fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Question> + '_ {
        self.questions.iter().copied()
    }
}

/// Plan a session.
///
/// Empty groups contribute nothing. Any unresolvable identifier aborts the
/// whole plan with [`QuizError::QuestionNotFound`].
pub fn plan<'a, R>(
    config: &QuizConfig,
    bank: &'a QuestionBank,
    rng: &mut R,
) -> Result<SessionPlan<'a>, QuizError>
where
    R: Rng + ?Sized,
{
    let mut questions = Vec::with_capacity(config.question_groups.len());

    for (i, group) in config.question_groups.iter().enumerate() {
        let Some(id) = group.choose(rng) else {
            tracing::debug!(group = i + 1, "skipping empty question group");
            continue;
        };
        let question = bank.resolve(id)?;
        tracing::debug!(group = i + 1, alternatives = group.len(), %id, "picked question");
        questions.push(question);
    }

    if config.randomize_order {
        questions.shuffle(rng);
    }

    Ok(SessionPlan { questions })
}
