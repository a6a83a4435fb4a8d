mod args;
mod config;
mod error;
mod models;
mod report;
mod utils;

use anyhow::Context;
use args::Args;
use chrono::Local;
use clap::Parser;
use config::{Config, Mode};
use models::projects::Project;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utils::gitlab::GitLabClient;

#[derive(Debug)]
enum Target<'a> {
    User(String),
    Team(Option<&'a str>),
}

/// Resolves the report target, then fetches the project. The user lookup
/// comes first so a bad token fails before the project query.
async fn fetch<'a>(
    client: &GitLabClient,
    config: &'a Config,
) -> anyhow::Result<(Target<'a>, Project)> {
    let target = match &config.mode {
        Mode::SingleUser { username: Some(username) } => Target::User(username.clone()),
        Mode::SingleUser { username: None } => Target::User(
            client
                .get_current_username()
                .await
                .context("failed to get current user")?,
        ),
        Mode::AllUsers { tracking_issue } => Target::Team(tracking_issue.as_deref()),
    };

    let project = client
        .get_project_timelogs(&config.project_path)
        .await
        .with_context(|| format!("failed to fetch timelogs of {}", config.project_path))?;
    info!(
        "Fetched {} issues of {}",
        project.issues.nodes.len(),
        config.project_path
    );

    Ok((target, project))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // before parsing, so .env can supply both RUST_LOG and the settings
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv {
        warn!("Could not load .env file: {}", e);
    }

    let config = Config::from_args(Args::parse())?;
    let client = GitLabClient::new(&config)?;

    let (target, project) = fetch(&client, &config).await?;

    let today = Local::now().date_naive();
    let cutoff = report::cutoff_date(today, config.days);

    match target {
        Target::User(username) => {
            report::user_spent_time(&project, &username, cutoff, &Local).log();
        }
        Target::Team(tracking_issue) => {
            report::all_users_spent_time(&project, tracking_issue, cutoff, &Local).log();
        }
    }

    Ok(())
}
