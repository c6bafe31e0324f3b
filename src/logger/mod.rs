pub mod issue_preview_logger;
