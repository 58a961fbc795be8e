use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Login failed: {0}")]
    Login(String),

    #[error("Course discovery failed: {0}")]
    Discovery(String),

    #[error("Course fetch failed: {0}")]
    CourseFetch(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    ResponseFormat(String),

    #[error("Submission rejected: {0}")]
    SinkRejected(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Errors that stop the run before any course is fetched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::Credential(_) | AppError::Login(_)
        )
    }
}
