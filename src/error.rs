use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unknown quiz path: {0}")]
    UnknownPath(String),

    #[error("content not found: {0}")]
    ContentNotFound(String),

    #[error("invalid content: {0}")]
    ContentInvalid(String),

    #[error("invalid question ordinal: {0}")]
    InvalidQuestion(u32),

    #[error("question {question} has no option {option}")]
    InvalidOption { question: u32, option: usize },

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("invalid result code: {0}")]
    InvalidCode(String),

    #[error("answer index out of range (must be below 4): {0}")]
    AnswerOutOfRange(u8),

    #[error("clipboard unavailable")]
    ClipboardUnavailable,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
