use crate::error::{QuizError, Result};
use crate::types::state::{PathState, ScoreMap, StateDocument};
use std::fs;
use std::path::PathBuf;

/// Raw persistence underneath [`PathStateStore`].
pub trait StateBackend {
    /// The stored document, or `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, raw: &str) -> Result<()>;
}

/// Stores the whole document in one JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(QuizError::Io(error)),
        }
    }

    fn save(&mut self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for exercising the store and controller without a filesystem.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    pub raw: Option<String>,
    pub fail_writes: bool,
}

#[cfg(test)]
impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.raw.clone())
    }

    fn save(&mut self, raw: &str) -> Result<()> {
        if self.fail_writes {
            return Err(QuizError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "storage disabled",
            )));
        }
        self.raw = Some(raw.to_string());
        Ok(())
    }
}

/// Per-path answers and scores, persisted on every mutation.
#[derive(Debug)]
pub struct PathStateStore<B: StateBackend> {
    backend: B,
}

impl<B: StateBackend> PathStateStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn get(&self, path_id: &str) -> PathState {
        self.read_all().remove(path_id).unwrap_or_default()
    }

    pub fn update(
        &mut self,
        path_id: &str,
        question: u32,
        answer: u8,
        contribution: &ScoreMap,
    ) -> Result<PathState> {
        if question == 0 {
            return Err(QuizError::InvalidQuestion(question));
        }

        let mut document = self.read_all();
        let state = document.entry(path_id.to_string()).or_default();

        let slot = question as usize - 1;
        if state.answers.len() <= slot {
            state.answers.resize(slot + 1, None);
        }
        state.answers[slot] = Some(answer);

        for (dimension, value) in contribution {
            let total = state.scores.entry(dimension.clone()).or_insert(0);
            *total = total.saturating_add(*value);
        }

        let updated = state.clone();
        tracing::debug!(
            path = path_id,
            question,
            answer,
            scores = ?updated.scores,
            "path state updated"
        );
        self.write_all(&document);
        Ok(updated)
    }

    pub fn clear(&mut self, path_id: &str) {
        let mut document = self.read_all();
        if document.remove(path_id).is_some() {
            tracing::debug!(path = path_id, "path state cleared");
        }
        self.write_all(&document);
    }

    fn read_all(&self) -> StateDocument {
        let raw = match self.backend.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return StateDocument::new(),
            Err(error) => {
                tracing::warn!(%error, "state unreadable, starting empty");
                return StateDocument::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, "state is malformed, starting empty");
            StateDocument::new()
        })
    }

    fn write_all(&mut self, document: &StateDocument) {
        let persisted = serde_json::to_string(document)
            .map_err(QuizError::Json)
            .and_then(|raw| self.backend.save(&raw));
        if let Err(error) = persisted {
            tracing::warn!(%error, "failed to persist state");
        }
    }
}
