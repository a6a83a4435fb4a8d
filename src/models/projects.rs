use serde::Deserialize;

use crate::models::issues::Issues;

#[derive(Debug, Deserialize)]
pub struct Project {
    pub issues: Issues,
}
