//! The `quizrun validate` command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::loader::{self, CONFIG_FILE};

pub fn execute(path: PathBuf) -> Result<()> {
    let quiz_dirs: Vec<PathBuf> = if path.join(CONFIG_FILE).is_file() {
        vec![path.clone()]
    } else {
        loader::discover_quizzes(&path)?
            .into_iter()
            .map(|q| q.path)
            .collect()
    };

    if quiz_dirs.is_empty() {
        println!("No quizzes found in {}.", path.display());
        return Ok(());
    }

    let summary = validate_dirs(&quiz_dirs, &mut io::stdout())?;
    if summary.broken > 0 {
        anyhow::bail!("{} quiz(zes) failed to load", summary.broken);
    }

    Ok(())
}

/// Counts from one validation pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub warnings: usize,
    /// Quizzes that could not be loaded.
    pub broken: usize,
}

/// Load and check each quiz, reporting problems to `out`.
///
/// A quiz that fails to load is reported and skipped; an unusable quiz
/// directory stops the pass.
pub fn validate_dirs<W: Write + ?Sized>(
    quiz_dirs: &[PathBuf],
    out: &mut W,
) -> Result<ValidationSummary> {
    let mut summary = ValidationSummary::default();

    for dir in quiz_dirs {
        let quiz = match loader::load_quiz(dir) {
            Ok(quiz) => quiz,
            Err(e) if e.is_fatal_to_planning() => {
                writeln!(out, "Quiz: {}\n  ERROR: {e}", dir.display())?;
                summary.broken += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to load quiz {}", dir.display()))
            }
        };
        writeln!(
            out,
            "Quiz: {} ({} question groups, {} questions)",
            quiz.config.title,
            quiz.config.question_groups.len(),
            quiz.bank.len()
        )?;

        let warnings = loader::validate_quiz(&quiz);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            writeln!(out, "{prefix} WARNING: {}", w.message)?;
        }
        summary.warnings += warnings.len();
    }

    if summary.warnings == 0 && summary.broken == 0 {
        writeln!(out, "All quizzes valid.")?;
    } else if summary.warnings > 0 {
        writeln!(out, "\n{} warning(s) found.", summary.warnings)?;
    }

    Ok(summary)
}
