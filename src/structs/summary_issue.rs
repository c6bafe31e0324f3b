/// Everything the submitter needs, in posting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryIssue {
    pub title: String,
    /// First chunk is the issue body, the rest are follow-up comments.
    pub body_chunks: Vec<String>,
    pub saw_new_errors: bool,
}
