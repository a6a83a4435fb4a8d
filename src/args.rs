use clap::{ArgAction, Parser, builder::FalseyValueParser};

#[derive(Parser, Debug, Default)]
#[command(name = "GitLab Timelog Report", about = "Sums GitLab issue timelogs per user")]
pub struct Args {
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "GITLAB_PROJECT_PATH")]
    pub project_path: Option<String>,

    #[arg(long, env = "GITLAB_HOST")]
    pub host: Option<String>,

    /// Number of previous days to report on, 0 means today only
    #[arg(long, env = "DAYS_NUM")]
    pub days: Option<String>,

    #[arg(long, env = "ALL_USERS", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub all_users: bool,

    /// Title substring identifying tracking (non dev) issues
    #[arg(long, env = "GITLAB_REPORTING_ISSUE")]
    pub reporting_issue: Option<String>,

    /// Report for this user instead of the token owner
    #[arg(long, env = "GITLAB_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "GITLAB_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}
