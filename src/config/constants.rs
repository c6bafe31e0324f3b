use std::time::Duration;

/// GitHub caps issue and comment bodies at this many characters.
pub const MAX_CHUNK_SIZE: usize = 65536;

pub const METADATA_FILE_NAME: &str = "metadata.json";
pub const RESULT_FILE_NAME_SUFFIX: &str = "results.txt";

pub const PIPELINE_URL: &str = "https://typescript.visualstudio.com/TypeScript/_build?definitionId=48";
pub const PIPELINE_FILE_URL: &str =
    "https://github.com/microsoft/typescript-error-deltas/blob/main/azure-pipelines-gitTests.yml";

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_ISSUE_OWNER: &str = "microsoft";
pub const DEFAULT_ISSUE_REPO: &str = "typescript";
pub const DEFAULT_USER_AGENT: &str = "tsc-error-summary";
pub const GITHUB_PAT_ENV: &str = "GITHUB_PAT";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_RETRY_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1_000;

pub const CONFIG_PATH_ENV: &str = "TSC_ERROR_SUMMARY_CONFIG";
pub const CONFIG_RELATIVE_PATH: &str = "tsc-error-summary/config.toml";

/// `process.exit(-1)` as observed by a POSIX parent.
pub const USAGE_EXIT_CODE: i32 = 255;
pub const FAILURE_EXIT_CODE: i32 = 1;

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
