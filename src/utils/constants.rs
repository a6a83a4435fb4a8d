
pub const DEFAULT_HOST: &str = "https://gitlab.com";

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const GET_TIMELOGS_QUERY: &str = r#"
    query GetProjectTimelogs($fullPath: ID!) {
        project(fullPath: $fullPath) {
            issues {
                nodes {
                    iid
                    title
                    timelogs {
                        nodes {
                            timeSpent
                            spentAt
                            user { username }
                        }
                    }
                }
            }
        }
    }
"#;
