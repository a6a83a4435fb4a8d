use serde::Deserialize;

use crate::models::timelogs::Timelogs;

#[derive(Debug, Deserialize)]
pub struct Issues {
    pub nodes: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub iid: String,

    pub title: String,

    pub timelogs: Timelogs,
}
