pub mod config;
pub mod github_config;
pub mod report_config;
