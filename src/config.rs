use std::time::Duration;

use tracing::info;

use crate::args::Args;
use crate::error::ConfigError;
use crate::utils::constants::DEFAULT_HOST;

/// Which aggregation to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Timelogs of one user on exactly the cutoff date. `None` means the
    /// owner of the access token.
    SingleUser { username: Option<String> },
    /// Timelogs of everyone since the cutoff date, split into dev and
    /// tracking time.
    AllUsers { tracking_issue: Option<String> },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub project_path: String,
    pub host: String,
    pub days: u32,
    pub mode: Mode,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let token = non_empty(args.token).ok_or(ConfigError::Missing {
            flag: "token",
            env: "GITLAB_TOKEN",
        })?;
        let project_path = non_empty(args.project_path).ok_or(ConfigError::Missing {
            flag: "project-path",
            env: "GITLAB_PROJECT_PATH",
        })?;

        let host = match non_empty(args.host) {
            Some(host) => {
                if !(host.starts_with("http://") || host.starts_with("https://")) {
                    return Err(ConfigError::InvalidHost(host));
                }
                host.trim_end_matches('/').to_string()
            }
            None => {
                info!("GITLAB_HOST is not set, using default {}", DEFAULT_HOST);
                DEFAULT_HOST.to_string()
            }
        };

        let days = match non_empty(args.days) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidDays(raw))?,
            None => {
                info!("DAYS_NUM is not set, using default 0");
                0
            }
        };

        let mode = if args.all_users {
            Mode::AllUsers {
                tracking_issue: non_empty(args.reporting_issue),
            }
        } else {
            Mode::SingleUser {
                username: non_empty(args.username),
            }
        };

        if args.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(args.timeout_secs));
        }

        Ok(Config {
            token,
            project_path,
            host,
            days,
            mode,
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/api/graphql", self.host)
    }

    pub fn rest_url(&self) -> String {
        format!("{}/api/v4", self.host)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
