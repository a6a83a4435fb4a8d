use serde::Deserialize;

/// `GET /api/v4/user`
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}
