use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Unsupported package manager: {0:?}")]
    UnsupportedPackageManager(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No releases published for {0}")]
    NoReleases(String),

    #[error("No \"latest\" dist-tag for {0}")]
    MissingLatestTag(String),

    #[error("Release feed for {0} has no items")]
    EmptyFeed(String),
}
