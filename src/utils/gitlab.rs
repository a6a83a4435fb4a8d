use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::graphql::GraphQLResponse;
use crate::models::projects::Project;
use crate::models::users::CurrentUser;
use crate::utils::constants::GET_TIMELOGS_QUERY;

pub struct GitLabClient {
    client: Client,
    token: String,
    graphql_url: String,
    rest_url: String,
}

impl GitLabClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("gitlab-timelog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            token: config.token.clone(),
            graphql_url: config.graphql_url(),
            rest_url: config.rest_url(),
        })
    }

    /// Username of the access token's owner. The GraphQL timelogs carry
    /// usernames only, so this is what single-user reports match against.
    pub async fn get_current_username(&self) -> Result<String, FetchError> {
        let url = format!("{}/user", self.rest_url);
        debug!("GET {}", url);

        let user = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<CurrentUser>()
            .await?;

        Ok(user.username)
    }

    /// Every issue of the project with all of its timelogs. Nothing is
    /// filtered server side.
    pub async fn get_project_timelogs(&self, project_path: &str) -> Result<Project, FetchError> {
        let body = serde_json::json!({
            "query": GET_TIMELOGS_QUERY,
            "variables": { "fullPath": project_path },
        });
        debug!("POST {} fullPath={}", self.graphql_url, project_path);

        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQLResponse>()
            .await?;

        if !response.errors.is_empty() {
            let messages = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FetchError::GraphQl(messages));
        }

        response
            .data
            .and_then(|data| data.project)
            .ok_or_else(|| FetchError::ProjectNotFound(project_path.to_string()))
    }
}
