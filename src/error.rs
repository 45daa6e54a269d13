use thiserror::Error;

/// Main error type for git-daily
#[derive(Error, Debug)]
pub enum GitDailyError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP/API errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API errors
    #[error("Gemini API error: {0}")]
    GeminiApi(String),

    /// Not inside a git working directory
    #[error("not a git repository")]
    NotARepository,
}

/// Result type alias for git-daily operations
pub type Result<T> = std::result::Result<T, GitDailyError>;

impl GitDailyError {
    /// Create a new Gemini API error
    pub fn gemini_api<S: Into<String>>(msg: S) -> Self {
        Self::GeminiApi(msg.into())
    }
}
