pub mod issue_submitter_error;
pub mod repo_status;
