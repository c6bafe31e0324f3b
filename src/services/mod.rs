pub mod github_issue_submitter;
pub mod metadata_aggregator;
pub mod paginator;
pub mod report_builder;
pub mod result_reader;
pub mod result_scanner;
