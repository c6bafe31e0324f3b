use async_trait::async_trait;
use crate::enums::issue_submitter_error::IssueSubmitterError;

#[async_trait]
pub trait IssueSubmitter: Send + Sync {

    /// Files `body_chunks[0]` as the issue body and every later chunk as a comment, in order.
    ///
    /// Returns the created issue URL, or `None` when `post_result` is false.
    async fn create_issue(
        &self,
        post_result: bool,
        title: &str,
        body_chunks: &[String],
        saw_new_errors: bool,
    ) -> Result<Option<String>, IssueSubmitterError>;
}
