use serde::Deserialize;

use crate::models::projects::Project;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<Data>,

    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub project: Option<Project>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}
