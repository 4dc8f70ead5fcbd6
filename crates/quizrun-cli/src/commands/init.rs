//! The `quizrun init` command.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn execute(quizzes_dir: PathBuf) -> Result<()> {
    let quiz_dir = write_sample_quiz(&quizzes_dir, &mut io::stdout())?;

    println!("\nNext steps:");
    println!("  1. Run: quizrun validate {}", quiz_dir.display());
    println!(
        "  2. Run: quizrun --quizzes-dir {} run 1",
        quizzes_dir.display()
    );
    println!("  3. Add your own quiz directories next to it (quiz02, quiz03, ...)");

    Ok(())
}

/// Write the sample quiz to `<quizzes_dir>/quiz01`, keeping existing files.
pub fn write_sample_quiz<W: Write + ?Sized>(quizzes_dir: &Path, out: &mut W) -> Result<PathBuf> {
    let quiz_dir = quizzes_dir.join("quiz01");
    std::fs::create_dir_all(&quiz_dir)
        .with_context(|| format!("failed to create {}", quiz_dir.display()))?;

    for (name, content) in SAMPLE_FILES {
        let path = quiz_dir.join(name);
        if path.exists() {
            writeln!(out, "{} already exists, skipping.", path.display())?;
        } else {
            std::fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Created {}", path.display())?;
        }
    }

    Ok(quiz_dir)
}

const SAMPLE_FILES: &[(&str, &str)] = &[
    ("config.json", SAMPLE_CONFIG),
    ("question001.json", QUESTION_001),
    ("question002.json", QUESTION_002),
    ("question003.json", QUESTION_003),
    ("question004.json", QUESTION_004),
];

const SAMPLE_CONFIG: &str = r#"{
    "title": "Sample Quiz",
    "timeLimit": 5,
    "randomizeOrder": false,
    "passingScore": 60,
    "questions": [
        ["question001"],
        ["question002", "question003"],
        ["question004"]
    ],
    "settings": {
        "showFeedbackAfterEach": true,
        "allowSkipping": true,
        "showTimer": true
    }
}
"#;

const QUESTION_001: &str = r#"{
    "question": "What is the capital of France?",
    "type": "multiple_choice",
    "options": ["London", "Paris", "Berlin", "Madrid"],
    "answers": ["Paris"]
}
"#;

const QUESTION_002: &str = r#"{
    "question": "The Earth orbits the Sun.",
    "type": "true_false",
    "answers": ["true"]
}
"#;

const QUESTION_003: &str = r#"{
    "question": "Water boils at 100 degrees Celsius at sea level.",
    "type": "true_false",
    "answers": ["true"]
}
"#;

const QUESTION_004: &str = r#"{
    "question": "The largest planet in our solar system is ___.",
    "type": "fill_in_blank",
    "answers": ["Jupiter"]
}
"#;
