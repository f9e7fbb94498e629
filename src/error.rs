use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name is required")]
    MissingName,
    #[error("project name must not be empty")]
    EmptyName,
    #[error("'{0}' cannot be used as a directory name")]
    ReservedDirectoryName(String),
}

/// Every way a round trip to the projects API can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("project '{0}' not found")]
    NotFound(String),
    #[error("projects API unreachable at {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("unreadable response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("projects API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("requested project '{sent}' but the API created '{returned}'")]
    IdentifierMismatch { sent: String, returned: String },
}

impl ApiError {
    /// Failures worth trying again without changing the input.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid timeout '{0}': must be a positive number of seconds")]
    InvalidTimeout(String),
}
