//! The per-path state machine that walks a user from the start screen through
//! every question to a result address.
//!
//! ```text
//! Start ──resume/restart──▶ AtQuestion(n) ──select──▶ ShowingEducational(n)
//!                               │    ▲                        │
//!                               │    └──────── confirm ───────┤ (n < total)
//!                               └─ select, no interstitial ───┤
//!                                                             ▼ (n == total)
//!                                                       AtResult(code)
//! ```

use crate::codec;
use crate::content::QuizPath;
use crate::error::{QuizError, Result};
use crate::scoring::level;
use crate::store::{PathStateStore, StateBackend};
use crate::types::level::ResultCode;
use crate::types::state::PathState;
use crate::urls;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Start,
    AtQuestion(u32),
    ShowingEducational(u32),
    AtResult(ResultCode),
}

/// What the start screen offers for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartScreen {
    Fresh,
    /// `next_question` is `None` once every question has an answer.
    Resumable {
        next_question: Option<u32>,
        answered: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied,
    /// Clipboard refused; the address must be copied by hand.
    ManualCopy(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// A clipboard that is never available, forcing the manual-copy fallback.
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(QuizError::ClipboardUnavailable)
    }
}

pub struct Navigator<B: StateBackend> {
    store: PathStateStore<B>,
    path: QuizPath,
    total_questions: u32,
    base_path: String,
    state: NavState,
}

impl<B: StateBackend> Navigator<B> {
    pub fn new(
        store: PathStateStore<B>,
        path: QuizPath,
        total_questions: u32,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            path,
            total_questions,
            base_path: base_path.into(),
            state: NavState::Start,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn path(&self) -> &QuizPath {
        &self.path
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn path_state(&self) -> PathState {
        self.store.get(self.path.id())
    }

    #[cfg(test)]
    pub fn store(&self) -> &PathStateStore<B> {
        &self.store
    }

    pub fn enter_start(&mut self) -> StartScreen {
        self.state = NavState::Start;
        let saved = self.path_state();
        if saved.is_empty() {
            return StartScreen::Fresh;
        }
        StartScreen::Resumable {
            next_question: saved.first_unanswered(self.total_questions),
            answered: saved.answered_count(),
        }
    }

    /// Continue at the first unanswered question, or at the result if none remain.
    pub fn resume(&mut self) -> &NavState {
        let saved = self.path_state();
        self.state = match saved.first_unanswered(self.total_questions) {
            Some(question) => NavState::AtQuestion(question),
            None => NavState::AtResult(self.result_code()),
        };
        tracing::debug!(path = self.path.id(), state = ?self.state, "resumed");
        &self.state
    }

    pub fn restart(&mut self) -> &NavState {
        self.store.clear(self.path.id());
        self.state = NavState::AtQuestion(1);
        tracing::debug!(path = self.path.id(), "restarted");
        &self.state
    }

    pub fn select_answer(&mut self, option: usize) -> Result<&NavState> {
        let NavState::AtQuestion(ordinal) = self.state else {
            return Err(QuizError::InvalidTransition(format!(
                "cannot answer while in {:?}",
                self.state
            )));
        };
        let question = self
            .path
            .question(ordinal)
            .ok_or(QuizError::InvalidQuestion(ordinal))?;
        let chosen = question.options.get(option).ok_or(QuizError::InvalidOption {
            question: ordinal,
            option,
        })?;
        let answer = u8::try_from(option).map_err(|_| QuizError::InvalidOption {
            question: ordinal,
            option,
        })?;

        let contribution = chosen.scores.clone();
        let educational = question.has_educational();
        self.store
            .update(self.path.id(), ordinal, answer, &contribution)?;

        if educational {
            self.state = NavState::ShowingEducational(ordinal);
        } else {
            self.advance_from(ordinal);
        }
        tracing::debug!(path = self.path.id(), question = ordinal, option, state = ?self.state, "answer selected");
        Ok(&self.state)
    }

    pub fn confirm(&mut self) -> Result<&NavState> {
        let NavState::ShowingEducational(ordinal) = self.state else {
            return Err(QuizError::InvalidTransition(format!(
                "nothing to confirm in {:?}",
                self.state
            )));
        };
        self.advance_from(ordinal);
        Ok(&self.state)
    }

    fn advance_from(&mut self, ordinal: u32) {
        self.state = if ordinal < self.total_questions {
            NavState::AtQuestion(ordinal + 1)
        } else {
            let code = self.result_code();
            tracing::info!(path = self.path.id(), code = %code, "path completed");
            NavState::AtResult(code)
        };
    }

    pub fn result_code(&self) -> ResultCode {
        level::result_code(&self.path.config.dimensions, &self.path_state().scores)
    }

    /// Address of the page for the current state.
    pub fn destination(&self) -> String {
        let id = self.path.id();
        match &self.state {
            NavState::Start => urls::path_start_url(&self.base_path, id),
            NavState::AtQuestion(n) | NavState::ShowingEducational(n) => {
                urls::question_url(&self.base_path, id, *n)
            }
            NavState::AtResult(code) => urls::result_url(&self.base_path, id, code),
        }
    }

    /// Answer token for deep links, once every question has an answer.
    pub fn answer_token(&self) -> Option<String> {
        let answers = self.path_state().complete_answers(self.total_questions)?;
        codec::encode(&answers).ok()
    }

    pub fn share<C: Clipboard>(&self, clipboard: &mut C) -> Result<ShareOutcome> {
        if !matches!(self.state, NavState::AtResult(_)) {
            return Err(QuizError::InvalidTransition(
                "share is only offered on a result".to_string(),
            ));
        }
        let address = self.destination();
        match clipboard.write_text(&address) {
            Ok(()) => Ok(ShareOutcome::Copied),
            Err(error) => {
                tracing::debug!(%error, "clipboard unavailable, falling back to manual copy");
                Ok(ShareOutcome::ManualCopy(address))
            }
        }
    }
}
