pub mod filesystem;
pub mod lint;

use crate::error::{QuizError, Result};
use crate::types::config::PathConfig;
use crate::types::result_type::ResultCatalog;
use crate::types::state::ScoreMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const RESULTS_FILE: &str = "results.json";
const QUESTIONS_SUFFIX: &str = "_questions.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default)]
    pub scores: ScoreMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default, alias = "inversion")]
    pub reveal: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default, alias = "pillarName", alias = "pairName")]
    pub heading: Option<String>,
}

impl Question {
    /// Whether answering shows an interstitial before moving on.
    pub fn has_educational(&self) -> bool {
        self.reveal.is_some() || self.context.is_some()
    }
}

/// A configured path together with its ordered questions.
#[derive(Debug, Clone)]
pub struct QuizPath {
    pub config: PathConfig,
    pub questions: Vec<Question>,
}

impl QuizPath {
    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn question(&self, ordinal: u32) -> Option<&Question> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        self.questions.get(index)
    }
}

pub fn questions_file(content_dir: &Path, path_id: &str) -> PathBuf {
    content_dir.join(format!("{path_id}{QUESTIONS_SUFFIX}"))
}

pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let mut questions: Vec<Question> = serde_json::from_str(raw)?;
    questions.sort_by_key(|question| question.id);
    Ok(questions)
}

/// Structural problems that make a question list unusable for navigation.
pub fn sequence_problems(questions: &[Question], total: u32) -> Vec<String> {
    let mut problems = Vec::new();
    if questions.len() != total as usize {
        problems.push(format!(
            "expected {total} questions, found {}",
            questions.len()
        ));
    }
    for (index, question) in questions.iter().enumerate() {
        let expected = index as u32 + 1;
        if question.id != expected {
            problems.push(format!(
                "question ids must be contiguous from 1: expected {expected}, found {}",
                question.id
            ));
            break;
        }
    }
    for question in questions.iter().filter(|question| question.options.is_empty()) {
        problems.push(format!("question {} has no options", question.id));
    }
    problems
}

pub fn load_path(content_dir: &Path, path: &PathConfig, total: u32) -> Result<QuizPath> {
    let file = questions_file(content_dir, &path.id);
    if !file.exists() {
        return Err(QuizError::ContentNotFound(file.display().to_string()));
    }
    let raw = std::fs::read_to_string(&file)?;
    let questions = parse_questions(&raw)
        .map_err(|e| QuizError::ContentInvalid(format!("{}: {}", file.display(), e)))?;

    let problems = sequence_problems(&questions, total);
    if !problems.is_empty() {
        return Err(QuizError::ContentInvalid(format!(
            "{}: {}",
            file.display(),
            problems.join("; ")
        )));
    }

    tracing::info!(path = %path.id, questions = questions.len(), "content loaded");
    Ok(QuizPath {
        config: path.clone(),
        questions,
    })
}

/// Result metadata from `results.json`; without the file every type uses built-in copy.
pub fn load_catalog(content_dir: &Path) -> Result<ResultCatalog> {
    let file = content_dir.join(RESULTS_FILE);
    if !file.exists() {
        tracing::debug!(file = %file.display(), "no result metadata, using built-in table");
        return Ok(ResultCatalog::default());
    }
    let raw = std::fs::read_to_string(&file)?;
    serde_json::from_str(&raw)
        .map_err(|e| QuizError::ContentInvalid(format!("{}: {}", file.display(), e)))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A question list where every option awards `points` to one dimension.
    pub fn questions_json(count: u32, dimension: &str, with_reveal: bool) -> String {
        let questions = (1..=count)
            .map(|id| {
                let reveal = if with_reveal {
                    format!(r#", "reveal": "Reveal {id}""#)
                } else {
                    String::new()
                };
                format!(
                    r#"{{"id": {id}, "text": "Question {id}", "options": [
                        {{"text": "none", "scores": {{}}}},
                        {{"text": "one", "scores": {{"{dimension}": 1}}}},
                        {{"text": "two", "scores": {{"{dimension}": 2}}}},
                        {{"text": "three", "scores": {{"{dimension}": 3}}}}
                    ]{reveal}}}"#
                )
            })
            .collect::<Vec<_>>();
        format!("[{}]", questions.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::QuizConfig;
    use crate::types::result_type::ResultType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_path_sorts_and_checks_sequence() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("chain_questions.json"),
            r#"[
                {"id": 2, "text": "second", "options": [{"text": "a", "scores": {"feedback": 1}}]},
                {"id": 1, "text": "first", "options": [{"text": "a", "scores": {"creation": 2}}],
                 "reveal": "explained"}
            ]"#,
        )
        .expect("questions should write");

        let cfg = QuizConfig::default();
        let path = load_path(dir.path(), cfg.path("chain").expect("chain"), 2)
            .expect("content should load");
        assert_eq!(path.questions[0].text, "first");
        assert!(path.question(1).expect("q1").has_educational());
        assert!(!path.question(2).expect("q2").has_educational());
        assert!(path.question(0).is_none());
        assert!(path.question(3).is_none());
    }

    #[test]
    fn load_path_rejects_gaps_and_wrong_counts() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("chain_questions.json"),
            r#"[
                {"id": 1, "text": "first", "options": [{"text": "a"}]},
                {"id": 3, "text": "third", "options": [{"text": "a"}]}
            ]"#,
        )
        .expect("questions should write");

        let cfg = QuizConfig::default();
        let error = load_path(dir.path(), cfg.path("chain").expect("chain"), 10)
            .expect_err("gappy content must be rejected");
        let message = error.to_string();
        assert!(message.contains("expected 10 questions"));
        assert!(message.contains("contiguous"));
    }

    #[test]
    fn missing_questions_file_is_content_not_found() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = QuizConfig::default();
        let result = load_path(dir.path(), cfg.path("mirror").expect("mirror"), 10);
        assert!(matches!(result, Err(QuizError::ContentNotFound(_))));
    }

    #[test]
    fn inversion_field_is_read_as_reveal() {
        let questions = parse_questions(
            r#"[{"id": 1, "text": "q", "options": [{"text": "a"}],
                 "inversion": "flipped", "pairName": "Pair"}]"#,
        )
        .expect("questions should parse");
        assert_eq!(questions[0].reveal.as_deref(), Some("flipped"));
        assert_eq!(questions[0].heading.as_deref(), Some("Pair"));
    }

    #[test]
    fn catalog_defaults_when_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let catalog = load_catalog(dir.path()).expect("missing catalog is fine");
        assert_eq!(catalog.meta(ResultType::Resister).name, "The Resister");
    }

    #[test]
    fn fixture_questions_parse() {
        let questions = parse_questions(&fixtures::questions_json(10, "agency", true))
            .expect("fixture should parse");
        assert!(sequence_problems(&questions, 10).is_empty());
        assert_eq!(questions[9].options[3].scores["agency"], 3);
    }
}
