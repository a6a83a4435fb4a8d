pub mod graphql;
pub mod issues;
pub mod projects;
pub mod timelogs;
pub mod users;
