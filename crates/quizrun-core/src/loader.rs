//! JSON quiz loader.
//!
//! Loads quiz configurations and question files from quiz directories,
//! validates them, and discovers quizzes under a base directory.
//!
//! A quiz directory holds a `config.json` and one `<id>.json` file per
//! question:
//!
//! ```text
//! quizzes/quiz01/config.json
//! quizzes/quiz01/question001.json
//! quizzes/quiz01/question002.json
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{Question, QuestionBank, QuestionKind, Quiz, QuizConfig};

/// File name of a quiz's configuration inside its directory.
pub const CONFIG_FILE: &str = "config.json";

/// Directory name prefix that marks a quiz during discovery.
pub const QUIZ_DIR_PREFIX: &str = "quiz";

/// Intermediate structure for parsing question files.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonQuestion {
    MultipleChoice {
        question: String,
        #[serde(default)]
        answers: Vec<String>,
        #[serde(default)]
        options: Vec<String>,
    },
    TrueFalse {
        question: String,
        #[serde(default)]
        answers: Vec<String>,
    },
    FillInBlank {
        question: String,
        #[serde(default)]
        answers: Vec<String>,
    },
}

fn read_file(path: &Path) -> Result<String, QuizError> {
    std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `config.json` from a quiz directory.
pub fn load_config(quiz_dir: &Path) -> Result<QuizConfig, QuizError> {
    let path = quiz_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| QuizError::config(&path, format!("failed to read: {e}")))?;

    parse_config_str(&content, &path)
}

/// Parse a config JSON string (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<QuizConfig, QuizError> {
    let config: QuizConfig = serde_json::from_str(content)
        .map_err(|e| QuizError::config(source_path, format!("failed to parse: {e}")))?;

    if config.passing_score > 100 {
        return Err(QuizError::config(
            source_path,
            format!("passingScore must be 0-100, got {}", config.passing_score),
        ));
    }

    Ok(config)
}

/// Parse a question JSON string into a [`Question`] with the given id.
pub fn parse_question_str(id: &str, content: &str) -> Result<Question, QuizError> {
    let parsed: JsonQuestion =
        serde_json::from_str(content).map_err(|e| QuizError::question(id, e.to_string()))?;

    let (prompt, answers, kind) = match parsed {
        JsonQuestion::MultipleChoice {
            question,
            answers,
            options,
        } => {
            if options.is_empty() {
                return Err(QuizError::question(id, "multiple_choice needs options"));
            }
            (question, answers, QuestionKind::MultipleChoice { options })
        }
        JsonQuestion::TrueFalse { question, answers } => {
            if let Some(bad) = answers
                .iter()
                .find(|a| !matches!(a.to_lowercase().as_str(), "true" | "false"))
            {
                return Err(QuizError::question(
                    id,
                    format!("true_false answer must be true or false, got {bad:?}"),
                ));
            }
            (question, answers, QuestionKind::TrueFalse)
        }
        JsonQuestion::FillInBlank { question, answers } => {
            (question, answers, QuestionKind::FillInBlank)
        }
    };

    if answers.is_empty() {
        return Err(QuizError::question(id, "no accepted answers"));
    }

    Ok(Question {
        id: id.to_string(),
        prompt,
        answers,
        kind,
    })
}

/// Load a single question file; its id is the file stem.
pub fn load_question(path: &Path) -> Result<Question, QuizError> {
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| QuizError::QuizDirectory {
            path: path.to_path_buf(),
            reason: "question file name is not valid UTF-8".into(),
        })?;
    let content = read_file(path)?;
    parse_question_str(id, &content)
}

/// Load every question file in a quiz directory.
///
/// Every `*.json` file except `config.json` is a question. Other files are
/// ignored; a malformed question aborts the load.
pub fn load_bank(quiz_dir: &Path) -> Result<QuestionBank, QuizError> {
    let mut bank = QuestionBank::new();

    for path in sorted_entries(quiz_dir)? {
        if path.is_dir() || path.file_name().is_some_and(|name| name == CONFIG_FILE) {
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == "json") {
            tracing::debug!("ignoring non-question file {}", path.display());
            continue;
        }
        let question = load_question(&path)?;
        tracing::debug!(id = %question.id, kind = %question.kind, "loaded question");
        bank.insert(question);
    }

    Ok(bank)
}

/// Load a quiz: its config, its questions, and check every group reference.
pub fn load_quiz(quiz_dir: &Path) -> Result<Quiz, QuizError> {
    if !quiz_dir.is_dir() {
        return Err(QuizError::QuizDirectory {
            path: quiz_dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }
    let config = load_config(quiz_dir)?;
    let bank = load_bank(quiz_dir)?;

    for id in config.question_groups.iter().flatten() {
        if !bank.contains(id) {
            return Err(QuizError::QuestionNotFound(id.clone()));
        }
    }

    tracing::info!(
        title = %config.title,
        groups = config.question_groups.len(),
        questions = bank.len(),
        "loaded quiz from {}",
        quiz_dir.display()
    );

    Ok(Quiz {
        path: quiz_dir.to_path_buf(),
        config,
        bank,
    })
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, QuizError> {
    if !dir.is_dir() {
        return Err(QuizError::QuizDirectory {
            path: dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| QuizError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| QuizError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    paths.sort();
    Ok(paths)
}

/// A quiz found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizInfo {
    /// 1-based menu number.
    pub number: usize,
    pub title: String,
    pub path: PathBuf,
}

/// List the quizzes under `base_dir`, numbered from 1 in name order.
///
/// Only subdirectories whose name starts with `quiz` are considered. A quiz
/// whose config fails to load aborts discovery.
pub fn discover_quizzes(base_dir: &Path) -> Result<Vec<QuizInfo>, QuizError> {
    let mut quizzes = Vec::new();

    for path in sorted_entries(base_dir)? {
        let is_quiz = path.is_dir()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(QUIZ_DIR_PREFIX));
        if !is_quiz {
            continue;
        }

        let config = load_config(&path)?;
        quizzes.push(QuizInfo {
            number: quizzes.len() + 1,
            title: config.title,
            path,
        });
    }

    tracing::debug!("discovered {} quizzes in {}", quizzes.len(), base_dir.display());
    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a loaded quiz for issues that do not prevent it from running.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let config = &quiz.config;

    // Empty groups silently shorten the session
    for (i, group) in config.question_groups.iter().enumerate() {
        if group.is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("question group {} is empty and will be skipped", i + 1),
            });
        }
    }

    // Duplicate ids inside one group skew the random pick
    for (i, group) in config.question_groups.iter().enumerate() {
        let mut seen = HashSet::new();
        for id in group {
            if !seen.insert(id) {
                warnings.push(ValidationWarning {
                    question_id: Some(id.clone()),
                    message: format!("listed more than once in question group {}", i + 1),
                });
            }
        }
    }

    // Multiple-choice answers that no option spells out
    for question in quiz.bank.iter() {
        if let QuestionKind::MultipleChoice { options } = &question.kind {
            for answer in &question.answers {
                let answer_lower = answer.to_lowercase();
                if !options.iter().any(|o| o.to_lowercase() == answer_lower) {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: format!("answer {answer:?} is not one of the options"),
                    });
                }
            }
        }
    }

    // Questions no group can ever select
    let referenced: HashSet<&String> = config.question_groups.iter().flatten().collect();
    for question in quiz.bank.iter() {
        if !referenced.contains(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "not referenced by any question group".into(),
            });
        }
    }

    if config.time_limit > 0 && !config.settings.show_timer {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "timeLimit is set but showTimer is off; the limit is not enforced".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_CONFIG: &str = r#"{
    "title": "Basic Knowledge Test",
    "timeLimit": 5,
    "randomizeOrder": false,
    "passingScore": 60,
    "questions": [["question001"], ["question002", "question003"]],
    "settings": {
        "showFeedbackAfterEach": true,
        "allowSkipping": false,
        "showTimer": true
    }
}"#;

    const MCQ: &str = r#"{
    "question": "What is the capital of France?",
    "type": "multiple_choice",
    "answers": ["Paris"],
    "options": ["London", "Paris", "Berlin", "Madrid"]
}"#;

    const TFQ: &str = r#"{
    "question": "Is Paris in France?",
    "type": "true_false",
    "answers": ["True"]
}"#;

    const FIB: &str = r#"{
    "question": "The capital of France is ___.",
    "type": "fill_in_blank",
    "answers": ["Paris"]
}"#;

    fn write_quiz(dir: &Path, config: &str, questions: &[(&str, &str)]) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), config).unwrap();
        for (id, body) in questions {
            std::fs::write(dir.join(format!("{id}.json")), body).unwrap();
        }
    }

    #[test]
    fn parse_basic_config() {
        let config = parse_config_str(BASIC_CONFIG, Path::new("config.json")).unwrap();
        assert_eq!(config.title, "Basic Knowledge Test");
        assert_eq!(config.time_limit, 5);
        assert_eq!(config.passing_score, 60);
        assert!(!config.randomize_order);
        assert_eq!(config.question_groups.len(), 2);
        assert_eq!(config.question_groups[1], vec!["question002", "question003"]);
        assert!(config.settings.show_feedback_after_each);
        assert!(!config.settings.allow_skipping);
        assert!(config.settings.show_timer);
    }

    #[test]
    fn parse_malformed_config() {
        let result = parse_config_str("{ not json", Path::new("config.json"));
        assert!(matches!(result, Err(QuizError::ConfigInvalid { .. })));

        let result = parse_config_str(r#"{"timeLimit": 5}"#, Path::new("config.json"));
        assert!(matches!(result, Err(QuizError::ConfigInvalid { .. })));
    }

    #[test]
    fn passing_score_above_100_is_invalid() {
        let result = parse_config_str(
            r#"{"title": "Too strict", "passingScore": 101}"#,
            Path::new("config.json"),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("passingScore"));
    }

    #[test]
    fn parse_each_question_type() {
        let q = parse_question_str("question001", MCQ).unwrap();
        assert_eq!(q.kind.tag(), "multiple_choice");
        assert_eq!(q.options().len(), 4);
        assert!(q.check("2"));

        let q = parse_question_str("question002", TFQ).unwrap();
        assert_eq!(q.kind, QuestionKind::TrueFalse);
        assert!(q.check("1"));

        let q = parse_question_str("question003", FIB).unwrap();
        assert_eq!(q.kind, QuestionKind::FillInBlank);
        assert_eq!(q.prompt(), "The capital of France is ___.");
    }

    #[test]
    fn unknown_question_type_is_rejected() {
        let body = r#"{"question": "Test question", "type": "invalid_type", "answers": ["Test"]}"#;
        let err = parse_question_str("question009", body).unwrap_err();
        assert!(matches!(err, QuizError::QuestionInvalid { ref id, .. } if id == "question009"));
        assert!(err.to_string().contains("invalid_type"));
    }

    #[test]
    fn structural_invariants_are_enforced() {
        let no_answers = r#"{"question": "?", "type": "fill_in_blank", "answers": []}"#;
        assert!(parse_question_str("a", no_answers).is_err());

        let no_options = r#"{"question": "?", "type": "multiple_choice", "answers": ["x"]}"#;
        assert!(parse_question_str("b", no_options).is_err());

        let bad_tf = r#"{"question": "?", "type": "true_false", "answers": ["yes"]}"#;
        let err = parse_question_str("c", bad_tf).unwrap_err();
        assert!(err.to_string().contains("yes"));

        let upper_tf = r#"{"question": "?", "type": "true_false", "answers": ["FALSE"]}"#;
        assert!(parse_question_str("d", upper_tf).is_ok());
    }

    #[test]
    fn load_quiz_directory() {
        let dir = tempfile::tempdir().unwrap();
        let quiz_dir = dir.path().join("quiz01");
        write_quiz(
            &quiz_dir,
            BASIC_CONFIG,
            &[("question001", MCQ), ("question002", TFQ), ("question003", FIB)],
        );
        std::fs::write(quiz_dir.join("notes.txt"), "not a question").unwrap();

        let quiz = load_quiz(&quiz_dir).unwrap();
        assert_eq!(quiz.config.title, "Basic Knowledge Test");
        assert_eq!(quiz.bank.len(), 3);
        assert!(quiz.bank.contains("question002"));
        assert!(!quiz.bank.contains("config"));
    }

    #[test]
    fn missing_reference_fails_at_load_time() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), BASIC_CONFIG, &[("question001", MCQ), ("question002", TFQ)]);

        let err = load_quiz(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::QuestionNotFound(ref id) if id == "question003"));
    }

    #[test]
    fn malformed_question_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(
            dir.path(),
            BASIC_CONFIG,
            &[("question001", MCQ), ("question002", "{ broken"), ("question003", FIB)],
        );

        let err = load_bank(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::QuestionInvalid { ref id, .. } if id == "question002"));
    }

    #[test]
    fn missing_config_is_config_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_quiz(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::ConfigInvalid { .. }));
    }

    #[test]
    fn discover_only_quiz_directories() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(
            &dir.path().join("quiz02"),
            r#"{"title": "Second"}"#,
            &[],
        );
        write_quiz(&dir.path().join("quiz01"), r#"{"title": "First"}"#, &[]);
        write_quiz(&dir.path().join("drafts"), r#"{"title": "Draft"}"#, &[]);
        std::fs::write(dir.path().join("quiz03.json"), "{}").unwrap();

        let quizzes = discover_quizzes(dir.path()).unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].number, 1);
        assert_eq!(quizzes[0].title, "First");
        assert_eq!(quizzes[1].number, 2);
        assert_eq!(quizzes[1].title, "Second");
    }

    #[test]
    fn discover_fails_on_broken_quiz() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(&dir.path().join("quiz01"), "not json", &[]);
        assert!(discover_quizzes(dir.path()).is_err());
    }

    #[test]
    fn load_quiz_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_quiz(&dir.path().join("quiz09")).unwrap_err();
        assert!(matches!(err, QuizError::QuizDirectory { .. }));
        assert!(!err.is_fatal_to_planning());
    }

    #[test]
    fn discover_requires_directory() {
        let err = discover_quizzes(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, QuizError::QuizDirectory { .. }));
    }

    #[test]
    fn validate_reports_soft_issues() {
        let config = parse_config_str(
            r#"{
                "title": "Messy",
                "timeLimit": 3,
                "questions": [[], ["question001", "question001"]],
                "settings": {"showTimer": false}
            }"#,
            Path::new("config.json"),
        )
        .unwrap();
        let mismatched = r#"{
            "question": "Pick one",
            "type": "multiple_choice",
            "answers": ["Rome"],
            "options": ["London", "Paris"]
        }"#;
        let bank: QuestionBank = [
            parse_question_str("question001", mismatched).unwrap(),
            parse_question_str("orphan", FIB).unwrap(),
        ]
        .into_iter()
        .collect();
        let quiz = Quiz {
            path: PathBuf::from("quiz01"),
            config,
            bank,
        };

        let warnings = validate_quiz(&quiz);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("group 1 is empty")));
        assert!(messages.iter().any(|m| m.contains("more than once")));
        assert!(messages.iter().any(|m| m.contains("not one of the options")));
        assert!(messages.iter().any(|m| m.contains("not referenced")));
        assert!(messages.iter().any(|m| m.contains("not enforced")));
    }

    #[test]
    fn validate_clean_quiz() {
        let config = parse_config_str(BASIC_CONFIG, Path::new("config.json")).unwrap();
        let bank: QuestionBank = [
            parse_question_str("question001", MCQ).unwrap(),
            parse_question_str("question002", TFQ).unwrap(),
            parse_question_str("question003", FIB).unwrap(),
        ]
        .into_iter()
        .collect();
        let quiz = Quiz {
            path: PathBuf::from("quiz01"),
            config,
            bank,
        };
        assert!(validate_quiz(&quiz).is_empty());
    }
}
