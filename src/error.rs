use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{env} environment variable (or --{flag}) is not set")]
    Missing {
        flag: &'static str,
        env: &'static str,
    },

    #[error(
        "DAYS_NUM must be a non-negative integer, it represents the number of previous days to fetch timelogs for (got {0:?})"
    )]
    InvalidDays(String),

    #[error("GITLAB_HOST must start with http:// or https:// (got {0:?})")]
    InvalidHost(String),

    #[error("GITLAB_TIMEOUT_SECS must be at least 1 second (got {0})")]
    InvalidTimeout(u64),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("GitLab responded with {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("unexpected response shape: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    #[error("project {0:?} not found or not accessible with this token")]
    ProjectNotFound(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                status,
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Request(err)
        }
    }
}
