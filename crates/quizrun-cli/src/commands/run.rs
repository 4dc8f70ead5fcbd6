//! The `quizrun run` command.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizrun_core::loader;
use quizrun_core::planner;
use quizrun_core::report::SessionReport;
use quizrun_core::SessionRunner;

use crate::console::ConsoleFrontend;

pub fn execute(quizzes_dir: PathBuf, quiz: String, seed: Option<u64>, json: bool) -> Result<()> {
    let quiz_dir = resolve_quiz(&quizzes_dir, &quiz)?;

    let stdin = io::stdin();
    let report = run_quiz(&quiz_dir, seed, stdin.lock(), io::stdout())?;

    if json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

/// Turn a quiz argument into a quiz directory.
///
/// A number selects the quiz with that menu number under `quizzes_dir`,
/// anything else is taken as a path.
pub fn resolve_quiz(quizzes_dir: &Path, quiz: &str) -> Result<PathBuf> {
    let Ok(number) = quiz.parse::<usize>() else {
        return Ok(PathBuf::from(quiz));
    };

    let quizzes = loader::discover_quizzes(quizzes_dir)
        .with_context(|| format!("failed to load quizzes from {}", quizzes_dir.display()))?;
    quizzes
        .into_iter()
        .find(|q| q.number == number)
        .map(|q| q.path)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no quiz number {number} in {} (see `quizrun list`)",
                quizzes_dir.display()
            )
        })
}

/// Load, plan and run one quiz against the given terminal streams.
pub fn run_quiz<R: BufRead, W: Write>(
    quiz_dir: &Path,
    seed: Option<u64>,
    input: R,
    output: W,
) -> Result<SessionReport> {
    let quiz = loader::load_quiz(quiz_dir)
        .with_context(|| format!("failed to load quiz {}", quiz_dir.display()))?;

    for w in loader::validate_quiz(&quiz) {
        match &w.question_id {
            Some(id) => tracing::warn!("{}: [{id}] {}", quiz_dir.display(), w.message),
            None => tracing::warn!("{}: {}", quiz_dir.display(), w.message),
        }
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plan = planner::plan(&quiz.config, &quiz.bank, &mut rng)
        .with_context(|| format!("failed to plan quiz {}", quiz_dir.display()))?;

    let mut frontend = ConsoleFrontend::new(input, output);
    let mut runner = SessionRunner::new(&quiz.config, plan);
    Ok(runner.run(&mut frontend))
}
