use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(name = "tsc-error-summary")]
#[clap(about = "Files a summary issue for a TypeScript error delta run", long_about = None)]
pub struct Cli {
    /// Number of repositories the run considered, echoed into the report
    #[arg(value_name = "REPO_COUNT")]
    pub repo_count: String,

    /// Number of top repositories skipped before the run started
    #[arg(value_name = "REPO_START_INDEX")]
    pub repo_start_index: String,

    /// Directory holding the per-repository metadata and result files
    #[arg(value_name = "RESULT_DIR_PATH")]
    pub result_dir_path: PathBuf,

    /// Link to the logs of the pipeline run
    #[arg(value_name = "LOG_URI")]
    pub log_uri: String,

    /// `true` (any case) to post the issue, anything else for a dry run
    #[arg(value_name = "POST_RESULT")]
    pub post_result: String,
}

impl Cli {
    pub fn should_post(&self) -> bool {
        self.post_result.to_lowercase() == "true"
    }
}
