use thiserror::Error;

/// Unified error type for git-yield operations
#[derive(Error, Debug)]
pub enum YieldError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Cannot bump {version} by {mode}: {mode} number would overflow")]
    VersionOverflow { version: String, mode: String },

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Environment check failed: {0}")]
    Environment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-yield
pub type Result<T> = std::result::Result<T, YieldError>;

impl YieldError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        YieldError::Config(msg.into())
    }

    /// Create an invalid request error with context
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        YieldError::InvalidRequest(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        YieldError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        YieldError::Remote(msg.into())
    }

    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        YieldError::Environment(msg.into())
    }
}

impl From<toml::de::Error> for YieldError {
    fn from(err: toml::de::Error) -> Self {
        YieldError::Config(err.to_string())
    }
}
