//! The interactive menu: `quizrun` or `quizrun menu`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizrun_core::loader::{self, QuizInfo};

use crate::commands::{list, run};
use crate::console::read_line;
use crate::quotes;

pub fn execute(quizzes_dir: PathBuf, seed: Option<u64>) -> Result<()> {
    let quizzes = loader::discover_quizzes(&quizzes_dir)
        .with_context(|| format!("failed to load quizzes from {}", quizzes_dir.display()))?;

    let stdin = io::stdin();
    menu_loop(&quizzes, seed, &mut stdin.lock(), &mut io::stdout())
}

/// Show the menu until the user exits or input ends.
pub fn menu_loop<R: BufRead, W: Write>(
    quizzes: &[QuizInfo],
    seed: Option<u64>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut rng = StdRng::from_entropy();

    loop {
        write!(
            out,
            "\n=== Quiz Program Menu ===\n\
             1. List Available Quizzes\n\
             2. Start a Quiz\n\
             3. Exit\n\
             \nEnter your choice (1-3): "
        )?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            writeln!(out)?;
            return Ok(());
        };

        match choice.trim() {
            "1" => list::write_quiz_table(out, quizzes)?,
            "2" => {
                if let Some(quiz) = prompt_for_quiz(quizzes, input, out)? {
                    tracing::debug!("starting quiz {}", quiz.path.display());
                    if let Err(e) = run::run_quiz(&quiz.path, seed, &mut *input, &mut *out) {
                        writeln!(out, "Error running quiz: {e:#}")?;
                    }
                }
            }
            "3" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            "42" => writeln!(out, "{}", quotes::life_quote())?,
            "1337" => writeln!(out, "{}", quotes::password_quote())?,
            "1234" => writeln!(out, "{}", quotes::wisdom_quote(&mut rng))?,
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

/// Ask for a quiz number; `None` returns to the menu.
fn prompt_for_quiz<'q, R: BufRead, W: Write>(
    quizzes: &'q [QuizInfo],
    input: &mut R,
    out: &mut W,
) -> Result<Option<&'q QuizInfo>> {
    write!(out, "\nEnter quiz number (or 0 to return to menu): ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    let number = match line.trim().parse::<usize>() {
        Ok(0) | Err(_) => return Ok(None),
        Ok(n) => n,
    };

    let found = quizzes.iter().find(|q| q.number == number);
    if found.is_none() {
        writeln!(out, "Invalid quiz number.")?;
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;

    fn session(quizzes: &[QuizInfo], script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        menu_loop(quizzes, Some(5), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_says_goodbye() {
        let out = session(&[], "3\n");
        assert!(out.contains("=== Quiz Program Menu ==="));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_leaves_the_menu() {
        let out = session(&[], "");
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_choice_and_hidden_entries() {
        let out = session(&[], "9\n42\n1337\n1234\n3\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains(quotes::life_quote()));
        assert!(out.contains(quotes::password_quote()));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn list_then_run_a_quiz() {
        let dir = tempfile::tempdir().unwrap();
        init::write_sample_quiz(dir.path(), &mut io::sink()).unwrap();
        let quizzes = loader::discover_quizzes(dir.path()).unwrap();

        let out = session(&quizzes, "1\n2\n1\n2\n\nJupiter\n3\n");
        assert!(out.contains("Sample Quiz"));
        assert!(out.contains("Question 1: What is the capital of France?"));
        assert!(out.contains("Question skipped."));
        assert!(out.contains("Score: 2/3 (66%)"));
        assert!(out.contains("Congratulations! You passed!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn unknown_or_zero_quiz_number_returns_to_menu() {
        let out = session(&[], "2\n7\n2\n0\n2\nabc\n3\n");
        assert_eq!(out.matches("Invalid quiz number.").count(), 1);
        assert!(out.contains("Goodbye!"));
    }
}
