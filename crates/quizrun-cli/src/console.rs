//! Terminal frontend for quiz sessions.

use std::fmt;
use std::io::{BufRead, Write};

use quizrun_core::model::{Question, QuizConfig};
use quizrun_core::report::SessionReport;
use quizrun_core::traits::QuizFrontend;

/// Read one line, without its line terminator.
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Presents questions on a writer and reads answers line by line.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    write_failed: bool,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            write_failed: false,
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let result = self
            .output
            .write_fmt(args)
            .and_then(|_| self.output.flush());
        if let Err(e) = result {
            // report once; the session carries on regardless
            if !self.write_failed {
                tracing::warn!("failed to write to terminal: {e}");
                self.write_failed = true;
            }
        }
    }
}

impl<R: BufRead, W: Write> QuizFrontend for ConsoleFrontend<R, W> {
    fn on_session_start(&mut self, config: &QuizConfig, question_count: usize) {
        self.emit(format_args!("\nStarting Quiz: {}\n", config.title));
        if config.time_limit > 0 && config.settings.show_timer {
            self.emit(format_args!("Time Limit: {} minutes\n", config.time_limit));
        }
        self.emit(format_args!("Number of Questions: {question_count}\n\n"));
    }

    fn present(&mut self, number: usize, question: &Question, allow_skipping: bool) {
        self.emit(format_args!("\nQuestion {number}: {}\n", question.prompt()));
        let options = question.options();
        if !options.is_empty() {
            self.emit(format_args!("Options:\n"));
            for (i, option) in options.iter().enumerate() {
                self.emit(format_args!("{}. {option}\n", i + 1));
            }
        }
        if allow_skipping {
            self.emit(format_args!("\nEnter your answer (or press Enter to skip): "));
        } else {
            self.emit(format_args!("\nEnter your answer: "));
        }
    }

    fn read_answer(&mut self) -> String {
        match read_line(&mut self.input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("end of input, treating as empty answer");
                String::new()
            }
            Err(e) => {
                tracing::warn!("failed to read answer: {e}");
                String::new()
            }
        }
    }

    fn on_skipped(&mut self, _number: usize) {
        self.emit(format_args!("Question skipped.\n"));
    }

    fn on_feedback(&mut self, correct: bool) {
        if correct {
            self.emit(format_args!("Correct!\n"));
        } else {
            self.emit(format_args!("Incorrect.\n"));
        }
    }

    fn on_timed_out(&mut self) {
        self.emit(format_args!("\nTime's up!\n"));
    }

    fn on_session_end(&mut self, report: &SessionReport) {
        // "Time's up!" has already been shown for a timed-out session
        self.emit(format_args!("\nQuiz completed!\n{}\n", report.score_line()));
        if report.skipped > 0 {
            self.emit(format_args!("Skipped: {}\n", report.skipped));
        }
        if report.passed {
            self.emit(format_args!("Congratulations! You passed!\n"));
        } else {
            self.emit(format_args!("Sorry, you didn't pass. Keep practicing!\n"));
        }
    }
}
