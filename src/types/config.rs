use crate::error::QuizError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DIMENSIONS_PER_PATH: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default = "default_paths")]
    pub paths: Vec<PathConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    pub base_path: Option<String>,
    pub content_dir: Option<String>,
    pub state_file: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSettings {
    pub total_questions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathConfig {
    pub id: String,
    pub name: String,
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub dimension_labels: Vec<String>,
}

impl PathConfig {
    fn new(id: &str, name: &str, dimensions: [&str; 3], labels: [&str; 3]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            dimensions: dimensions.iter().map(|value| value.to_string()).collect(),
            dimension_labels: labels.iter().map(|value| value.to_string()).collect(),
        }
    }

    /// Display label for the dimension at `index`, falling back to its raw name.
    pub fn label(&self, index: usize) -> &str {
        self.dimension_labels
            .get(index)
            .or_else(|| self.dimensions.get(index))
            .map_or("", String::as_str)
    }
}

fn default_paths() -> Vec<PathConfig> {
    vec![
        PathConfig::new(
            "chain",
            "The Amplification Chain",
            ["creation", "consumption", "feedback"],
            [
                "Creation Independence",
                "Consumption Awareness",
                "Feedback Consciousness",
            ],
        ),
        PathConfig::new(
            "pillars",
            "The Five Pillars",
            ["pattern", "structural", "centralization"],
            [
                "Historical Pattern Recognition",
                "Structural Awareness",
                "Centralization Concern",
            ],
        ),
        PathConfig::new(
            "mirror",
            "The Inverse Mirror",
            ["filtering", "agency", "systemic"],
            ["Filter Awareness", "Agency Retention", "Systemic Perspective"],
        ),
    ]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            quiz: QuizSettings::default(),
            paths: default_paths(),
        }
    }
}

impl QuizConfig {
    /// Base path with a guaranteed trailing slash.
    pub fn base_path(&self) -> String {
        let raw = self.site.base_path.as_deref().unwrap_or("/");
        if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        }
    }

    pub fn content_dir(&self) -> &str {
        self.site.content_dir.as_deref().unwrap_or("site/_data")
    }

    pub fn state_file(&self) -> &str {
        self.site
            .state_file
            .as_deref()
            .unwrap_or(".faiscism/state.json")
    }

    pub fn output_dir(&self) -> &str {
        self.site.output_dir.as_deref().unwrap_or("_site")
    }

    pub fn total_questions(&self) -> u32 {
        self.quiz.total_questions.unwrap_or(10)
    }

    pub fn path(&self, id: &str) -> Result<&PathConfig, QuizError> {
        self.paths
            .iter()
            .find(|path| path.id == id)
            .ok_or_else(|| QuizError::UnknownPath(id.to_string()))
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.paths.is_empty() {
            return Err(QuizError::ConfigParse(
                "at least one [[paths]] entry is required".to_string(),
            ));
        }

        if !self.base_path().starts_with('/') {
            return Err(QuizError::ConfigParse(format!(
                "site.base_path must start with '/': {}",
                self.base_path()
            )));
        }

        if self.total_questions() == 0 {
            return Err(QuizError::ConfigParse(
                "quiz.total_questions must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for path in &self.paths {
            if path.id.is_empty()
                || !path
                    .id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(QuizError::ConfigParse(format!(
                    "path id must be non-empty and URL-safe: {:?}",
                    path.id
                )));
            }
            if !seen.insert(path.id.as_str()) {
                return Err(QuizError::ConfigParse(format!(
                    "duplicate path id: {}",
                    path.id
                )));
            }
            if path.dimensions.len() != DIMENSIONS_PER_PATH {
                return Err(QuizError::ConfigParse(format!(
                    "path {} must define exactly {} dimensions (found {})",
                    path.id,
                    DIMENSIONS_PER_PATH,
                    path.dimensions.len()
                )));
            }
            if !path.dimension_labels.is_empty()
                && path.dimension_labels.len() != path.dimensions.len()
            {
                return Err(QuizError::ConfigParse(format!(
                    "path {} dimension_labels must match dimensions",
                    path.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> QuizConfig {
        toml::from_str(toml_str).expect("config should parse")
    }

    #[test]
    fn defaults_cover_three_paths_of_ten_questions() {
        let cfg = QuizConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_questions(), 10);
        assert_eq!(
            cfg.paths.iter().map(|path| path.id.as_str()).collect::<Vec<_>>(),
            vec!["chain", "pillars", "mirror"]
        );
        assert_eq!(cfg.base_path(), "/");
    }

    #[test]
    fn base_path_gains_trailing_slash() {
        let cfg = parse(
            r#"
[site]
base_path = "/quiz"
"#,
        );
        assert_eq!(cfg.base_path(), "/quiz/");
    }

    #[test]
    fn validate_rejects_wrong_dimension_count() {
        let cfg = parse(
            r#"
[[paths]]
id = "solo"
name = "Solo"
dimensions = ["a", "b"]
"#,
        );
        let error = cfg.validate().expect_err("two dimensions must be rejected");
        assert!(error.to_string().contains("exactly 3 dimensions"));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let cfg = parse(
            r#"
[[paths]]
id = "solo"
name = "Solo"
dimensions = ["a", "b", "c"]

[[paths]]
id = "solo"
name = "Again"
dimensions = ["a", "b", "c"]
"#,
        );
        assert!(matches!(cfg.validate(), Err(QuizError::ConfigParse(_))));
    }

    #[test]
    fn label_falls_back_to_dimension_name() {
        let cfg = parse(
            r#"
[[paths]]
id = "solo"
name = "Solo"
dimensions = ["a", "b", "c"]
"#,
        );
        let path = cfg.path("solo").expect("path should exist");
        assert_eq!(path.label(1), "b");
        assert!(matches!(cfg.path("nope"), Err(QuizError::UnknownPath(_))));
    }
}
