use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Timelogs {
    pub nodes: Vec<Timelog>,
}

#[derive(Debug, Deserialize)]
pub struct Timelog {
    /// Seconds.
    #[serde(rename = "timeSpent")]
    pub time_spent: i64,

    /// RFC 3339 with offset. Malformed values are skipped by the report.
    #[serde(rename = "spentAt")]
    pub spent_at: String,

    pub user: TimelogUser,
}

#[derive(Debug, Deserialize)]
pub struct TimelogUser {
    pub username: String,
}
