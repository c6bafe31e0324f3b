use std::fmt;
use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    // Invocation errors
    UsageError {
        message: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        file_path: Option<String>,
        line_number: Option<usize>,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SummaryError {
    pub fn usage_error(message: &str) -> Self {
        Self::UsageError {
            message: message.to_string(),
        }
    }

    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Attaches the offending file to an I/O or parse error produced by a `From` conversion.
    pub fn in_file(self, path: &str) -> Self {
        match self {
            Self::ParseError { content_type, line_number, reason, .. } => Self::ParseError {
                content_type,
                file_path: Some(path.to_string()),
                line_number,
                reason,
            },
            Self::SystemError { operation, reason } => Self::FileOperationError {
                file_path: path.to_string(),
                operation,
                reason,
            },
            other => other,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::ConfigurationError { message, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}", operation, file_path, reason)
            }
            Self::ParseError { content_type, file_path, line_number, reason } => {
                let mut msg = format!("Parse error in {}", content_type);
                if let Some(path) = file_path {
                    msg.push_str(&format!(" file '{}'", path));
                }
                msg.push_str(&format!(": {}", reason));
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SummaryError {}

/// Result type alias for summary operations
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print a user facing message; nothing is submitted after this.
    pub fn handle_error(error: &SummaryError) {
        log::error!("{}", error.technical_details());
        eprintln!("❌ {}", error.user_message());
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for SummaryError {
    fn from(error: std::io::Error) -> Self {
        SummaryError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ParseError {
            content_type: "JSON".to_string(),
            file_path: None,
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SummaryError {
    fn from(error: toml::de::Error) -> Self {
        SummaryError::ParseError {
            content_type: "TOML".to_string(),
            file_path: None,
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<walkdir::Error> for SummaryError {
    fn from(error: walkdir::Error) -> Self {
        let file_path = error
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        SummaryError::FileOperationError {
            file_path,
            operation: "directory walk".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<globset::Error> for SummaryError {
    fn from(error: globset::Error) -> Self {
        SummaryError::ParseError {
            content_type: "glob pattern".to_string(),
            file_path: None,
            line_number: None,
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
