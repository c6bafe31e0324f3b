pub mod issue_submitter;
