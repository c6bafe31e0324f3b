use crate::structs::cli::Cli;

/// Values from the invocation that are echoed verbatim into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub repo_count: String,
    pub repo_start_index: String,
    pub log_uri: String,
}

impl From<&Cli> for RunParameters {
    fn from(cli: &Cli) -> Self {
        Self {
            repo_count: cli.repo_count.clone(),
            repo_start_index: cli.repo_start_index.clone(),
            log_uri: cli.log_uri.clone(),
        }
    }
}
