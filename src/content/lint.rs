use super::filesystem::discover_question_files;
use super::{parse_questions, questions_file, sequence_problems, RESULTS_FILE};
use crate::codec::ANSWER_RADIX;
use crate::types::config::QuizConfig;
use crate::types::report::Finding;
use crate::types::result_type::{ResultCatalog, ResultType};
use std::path::Path;

pub fn lint_findings(content_dir: &Path, config: &QuizConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let total = config.total_questions();

    for path in &config.paths {
        let file = questions_file(content_dir, &path.id);
        let display = file.display().to_string();
        let raw = match std::fs::read_to_string(&file) {
            Ok(raw) => raw,
            Err(_) => {
                findings.push(Finding {
                    id: "content.missing_questions".to_string(),
                    title: format!("Missing questions for {}", path.id),
                    body: format!("{display} does not exist or is unreadable."),
                    blocking: true,
                    file: Some(display),
                });
                continue;
            }
        };

        let questions = match parse_questions(&raw) {
            Ok(questions) => questions,
            Err(error) => {
                findings.push(Finding {
                    id: "content.malformed_questions".to_string(),
                    title: format!("Malformed questions for {}", path.id),
                    body: error.to_string(),
                    blocking: true,
                    file: Some(display),
                });
                continue;
            }
        };

        for problem in sequence_problems(&questions, total) {
            findings.push(Finding {
                id: "content.question_sequence".to_string(),
                title: format!("Question list for {} is not navigable", path.id),
                body: problem,
                blocking: true,
                file: Some(display.clone()),
            });
        }

        for question in &questions {
            if question.options.len() > usize::from(ANSWER_RADIX) {
                findings.push(Finding {
                    id: "content.too_many_options".to_string(),
                    title: format!("{} question {} has too many options", path.id, question.id),
                    body: format!(
                        "{} options found; answer tokens only carry indices below {ANSWER_RADIX}.",
                        question.options.len()
                    ),
                    blocking: false,
                    file: Some(display.clone()),
                });
            }

            let mut unknown = question
                .options
                .iter()
                .flat_map(|option| option.scores.keys())
                .filter(|dimension| !path.dimensions.contains(dimension))
                .cloned()
                .collect::<Vec<_>>();
            unknown.sort();
            unknown.dedup();
            if !unknown.is_empty() {
                findings.push(Finding {
                    id: "content.unknown_dimension".to_string(),
                    title: format!("{} question {} scores unknown dimensions", path.id, question.id),
                    body: format!(
                        "Points for {} never reach a result level.",
                        unknown.join(", ")
                    ),
                    blocking: false,
                    file: Some(display.clone()),
                });
            }
        }
    }

    let configured = config
        .paths
        .iter()
        .map(|path| path.id.as_str())
        .collect::<Vec<_>>();
    let stray = discover_question_files(content_dir)
        .into_iter()
        .filter(|id| !configured.contains(&id.as_str()))
        .collect::<Vec<_>>();
    if !stray.is_empty() {
        findings.push(Finding {
            id: "content.unlisted_questions".to_string(),
            title: "Question files without a configured path".to_string(),
            body: format!("No [[paths]] entry for: {}.", stray.join(", ")),
            blocking: false,
            file: None,
        });
    }

    findings.extend(catalog_findings(content_dir));
    findings
}

fn catalog_findings(content_dir: &Path) -> Vec<Finding> {
    let file = content_dir.join(RESULTS_FILE);
    let display = file.display().to_string();
    let raw = match std::fs::read_to_string(&file) {
        Ok(raw) => raw,
        Err(_) => {
            return vec![Finding {
                id: "results.missing".to_string(),
                title: "No result metadata".to_string(),
                body: "Result pages will use the built-in result type descriptions.".to_string(),
                blocking: false,
                file: Some(display),
            }];
        }
    };

    let catalog: ResultCatalog = match serde_json::from_str(&raw) {
        Ok(catalog) => catalog,
        Err(error) => {
            return vec![Finding {
                id: "results.malformed".to_string(),
                title: "Malformed result metadata".to_string(),
                body: error.to_string(),
                blocking: true,
                file: Some(display),
            }];
        }
    };

    let mut findings = Vec::new();
    let mut unknown = catalog
        .types
        .keys()
        .filter(|key| ResultType::from_key(key).is_none())
        .cloned()
        .collect::<Vec<_>>();
    unknown.sort();
    if !unknown.is_empty() {
        findings.push(Finding {
            id: "results.unknown_type".to_string(),
            title: "Result metadata for unknown types".to_string(),
            body: format!("Never displayed: {}.", unknown.join(", ")),
            blocking: false,
            file: Some(display.clone()),
        });
    }

    let missing = ResultType::ALL
        .iter()
        .filter(|kind| !catalog.types.contains_key(kind.key()))
        .map(|kind| kind.key())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        findings.push(Finding {
            id: "results.incomplete".to_string(),
            title: "Result metadata is incomplete".to_string(),
            body: format!("Built-in copy is used for: {}.", missing.join(", ")),
            blocking: false,
            file: Some(display),
        });
    }
    findings
}
