pub mod constants;
pub mod gitlab;
