use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The six overall classifications, ordered by increasing score ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Sleepwalker,
    Skeptic,
    Participant,
    Architect,
    Witness,
    Resister,
}

impl ResultType {
    pub const ALL: [ResultType; 6] = [
        ResultType::Sleepwalker,
        ResultType::Skeptic,
        ResultType::Participant,
        ResultType::Architect,
        ResultType::Witness,
        ResultType::Resister,
    ];

    /// Classification used whenever a metadata key cannot be resolved.
    pub const FALLBACK: ResultType = ResultType::Participant;

    pub fn key(self) -> &'static str {
        match self {
            Self::Sleepwalker => "sleepwalker",
            Self::Skeptic => "skeptic",
            Self::Participant => "participant",
            Self::Architect => "architect",
            Self::Witness => "witness",
            Self::Resister => "resister",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn builtin_meta(self) -> ResultMeta {
        let (name, summary, hook) = match self {
            Self::Sleepwalker => (
                "The Sleepwalker",
                "Uses AI heavily, trusts implicitly, hasn't considered systemic effects.",
                "I took the mirror test. I'm a Sleepwalker. Are you?",
            ),
            Self::Skeptic => (
                "The Skeptic",
                "Distrusts AI, avoids it, may not understand structural dynamics.",
                "I took the mirror test. I'm a Skeptic. Are you?",
            ),
            Self::Participant => (
                "The Participant",
                "Uses thoughtfully, sees patterns, participates anyway.",
                "I took the mirror test. I'm a Participant. Are you?",
            ),
            Self::Architect => (
                "The Architect",
                "Works in/on AI, understands mechanics, may feel conflicted.",
                "I took the mirror test. I'm an Architect. Are you?",
            ),
            Self::Witness => (
                "The Witness",
                "Sees patterns clearly, struggles with action.",
                "I took the mirror test. I'm a Witness. Are you?",
            ),
            Self::Resister => (
                "The Resister",
                "Actively minimizes AI, seeks alternatives, accepts friction.",
                "I took the mirror test. I'm a Resister. Are you?",
            ),
        };
        ResultMeta {
            name: name.to_string(),
            summary: summary.to_string(),
            description: String::new(),
            hook: hook.to_string(),
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMeta {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hook: String,
}

/// Result metadata keyed by result type, as supplied by content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultCatalog {
    #[serde(default)]
    pub types: HashMap<String, ResultMeta>,
}

impl ResultCatalog {
    /// Metadata for a known type; content entries win over the built-in table.
    pub fn meta(&self, kind: ResultType) -> ResultMeta {
        self.types
            .get(kind.key())
            .cloned()
            .unwrap_or_else(|| kind.builtin_meta())
    }

    /// Lookup by raw key; unknown keys resolve to the fallback type.
    pub fn lookup(&self, key: &str) -> (ResultType, ResultMeta) {
        let kind = ResultType::from_key(key).unwrap_or(ResultType::FALLBACK);
        (kind, self.meta(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_ratio_bands() {
        let mut sorted = ResultType::ALL;
        sorted.sort();
        assert_eq!(sorted, ResultType::ALL);
        assert!(ResultType::Sleepwalker < ResultType::Resister);
    }

    #[test]
    fn unknown_key_falls_back_to_participant() {
        let catalog = ResultCatalog::default();
        let (kind, meta) = catalog.lookup("oracle");
        assert_eq!(kind, ResultType::Participant);
        assert_eq!(meta.name, "The Participant");
    }

    #[test]
    fn content_metadata_overrides_builtin_entry() {
        let catalog: ResultCatalog = serde_json::from_str(
            r#"{"types": {"witness": {"name": "Custom Witness", "summary": "s"}}}"#,
        )
        .expect("catalog should parse");
        assert_eq!(catalog.meta(ResultType::Witness).name, "Custom Witness");
        assert_eq!(catalog.meta(ResultType::Skeptic).name, "The Skeptic");
    }
}
