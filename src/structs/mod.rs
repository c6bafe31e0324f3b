pub mod cli;
pub mod config;
pub mod metadata;
pub mod run_parameters;
pub mod status_summary;
pub mod status_summary_builder;
pub mod summary_issue;
