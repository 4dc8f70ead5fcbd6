//! Session scoring.

/// Correct/total tally of one session and its pass threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    pub correct: u32,
    pub total: u32,
    /// Percentage needed to pass; 0 disables the threshold.
    pub passing_score: u32,
}

impl ScoreKeeper {
    pub fn new(passing_score: u32) -> Self {
        Self {
            correct: 0,
            total: 0,
            passing_score,
        }
    }

    /// Count one presented question.
    pub fn record_presented(&mut self) {
        self.total += 1;
    }

    /// Count one correct answer.
    pub fn record_correct(&mut self) {
        self.correct += 1;
    }

    /// Integer percentage of correct answers, rounded down. 0 for no questions.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.correct * 100 / self.total
    }

    pub fn passed(&self) -> bool {
        self.passing_score == 0 || self.percentage() >= self.passing_score
    }
}
