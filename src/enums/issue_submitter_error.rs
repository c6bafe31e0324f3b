use thiserror::Error;
use crate::errors::SummaryError;

#[derive(Debug, Clone, Error)]
pub enum IssueSubmitterError {
    #[error("GitHub API {operation} failed with status {status}: {body}")]
    ApiError {
        operation: String,
        url: String,
        status: u16,
        body: String,
    },
    #[error("GitHub API {operation} request failed: {reason}")]
    NetworkError {
        operation: String,
        url: String,
        reason: String,
    },
    #[error("failed to decode GitHub {operation} response: {reason}")]
    SerializationError { operation: String, reason: String },
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("refusing to create an issue without a body")]
    EmptyBody,
}

impl From<IssueSubmitterError> for SummaryError {
    fn from(error: IssueSubmitterError) -> Self {
        match error {
            IssueSubmitterError::ApiError { operation, url, status, body } => SummaryError::NetworkError {
                operation,
                url: Some(url),
                status_code: Some(status),
                reason: body,
            },
            IssueSubmitterError::NetworkError { operation, url, reason } => SummaryError::NetworkError {
                operation,
                url: Some(url),
                status_code: None,
                reason,
            },
            IssueSubmitterError::SerializationError { operation, reason } => SummaryError::ParseError {
                content_type: format!("GitHub {} response", operation),
                file_path: None,
                line_number: None,
                reason,
            },
            IssueSubmitterError::AuthenticationError(message) => SummaryError::ConfigurationError {
                message,
                suggestion: Some("Export a GitHub token with issue write access, or pass `false` to do a dry run".to_string()),
            },
            IssueSubmitterError::EmptyBody => SummaryError::system_error("issue submission", "no body chunks to post"),
        }
    }
}
