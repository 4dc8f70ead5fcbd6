//! The `quizrun list` command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizrun_core::loader::{self, QuizInfo};

pub fn execute(quizzes_dir: PathBuf) -> Result<()> {
    let quizzes = loader::discover_quizzes(&quizzes_dir)
        .with_context(|| format!("failed to load quizzes from {}", quizzes_dir.display()))?;

    write_quiz_table(&mut io::stdout(), &quizzes)?;
    Ok(())
}

/// Print the numbered quiz table shown by `list` and the menu.
pub fn write_quiz_table<W: Write + ?Sized>(out: &mut W, quizzes: &[QuizInfo]) -> io::Result<()> {
    writeln!(out, "\n=== Available Quizzes ===")?;
    if quizzes.is_empty() {
        return writeln!(out, "No quizzes available.");
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Path"]);
    for quiz in quizzes {
        table.add_row(vec![
            Cell::new(quiz.number),
            Cell::new(&quiz.title),
            Cell::new(quiz.path.display()),
        ]);
    }

    writeln!(out, "{table}")
}
