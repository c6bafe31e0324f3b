use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use async_trait::async_trait;
use tsc_error_summary::enums::issue_submitter_error::IssueSubmitterError;
use tsc_error_summary::structs::cli::Cli;
use tsc_error_summary::traits::issue_submitter::IssueSubmitter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedIssue {
    pub post_result: bool,
    pub title: String,
    pub body_chunks: Vec<String>,
    pub saw_new_errors: bool,
}

#[derive(Default)]
pub struct RecordingSubmitter {
    pub calls: Mutex<Vec<RecordedIssue>>,
}

impl RecordingSubmitter {
    pub fn recorded(&self) -> Vec<RecordedIssue> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueSubmitter for RecordingSubmitter {
    async fn create_issue(
        &self,
        post_result: bool,
        title: &str,
        body_chunks: &[String],
        saw_new_errors: bool,
    ) -> Result<Option<String>, IssueSubmitterError> {
        self.calls.lock().unwrap().push(RecordedIssue {
            post_result,
            title: title.to_string(),
            body_chunks: body_chunks.to_vec(),
            saw_new_errors,
        });
        Ok(post_result.then(|| "https://github.com/octo/sandbox/issues/1".to_string()))
    }
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

pub fn cli(result_dir: &Path, post_result: &str) -> Cli {
    Cli {
        repo_count: "100".to_string(),
        repo_start_index: "0".to_string(),
        result_dir_path: result_dir.to_path_buf(),
        log_uri: "https://example.test/logs/1".to_string(),
        post_result: post_result.to_string(),
    }
}
