use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dimension name to integer score.
pub type ScoreMap = BTreeMap<String, i64>;

/// Progress through one path. `answers[i]` holds the option chosen for question `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathState {
    #[serde(default)]
    pub answers: Vec<Option<u8>>,
    #[serde(default)]
    pub scores: ScoreMap,
}

impl PathState {
    pub fn is_empty(&self) -> bool {
        self.answers.iter().all(Option::is_none) && self.scores.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    /// First question (1-based) without an answer, or `None` when all `total` are answered.
    pub fn first_unanswered(&self, total: u32) -> Option<u32> {
        (1..=total).find(|ordinal| {
            self.answers
                .get(*ordinal as usize - 1)
                .copied()
                .flatten()
                .is_none()
        })
    }

    /// The full answer sequence, if every one of the `total` questions is answered.
    pub fn complete_answers(&self, total: u32) -> Option<Vec<u8>> {
        (0..total as usize)
            .map(|index| self.answers.get(index).copied().flatten())
            .collect()
    }
}

/// Everything persisted for one device: one entry per started path.
pub type StateDocument = BTreeMap<String, PathState>;
