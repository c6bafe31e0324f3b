use crate::config::constants::{
    DEFAULT_GITHUB_API_BASE, DEFAULT_ISSUE_OWNER, DEFAULT_ISSUE_REPO, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_USER_AGENT, GITHUB_PAT_ENV,
    MAX_CHUNK_SIZE, METADATA_FILE_NAME, PIPELINE_FILE_URL, PIPELINE_URL, RESULT_FILE_NAME_SUFFIX,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_base() -> String {
        DEFAULT_GITHUB_API_BASE.to_string()
    }

    pub fn default_owner() -> String {
        DEFAULT_ISSUE_OWNER.to_string()
    }

    pub fn default_repo() -> String {
        DEFAULT_ISSUE_REPO.to_string()
    }

    pub fn default_token_env() -> String {
        GITHUB_PAT_ENV.to_string()
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_request_timeout_ms() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_MS
    }

    pub fn default_retry_max_attempts() -> usize {
        DEFAULT_RETRY_MAX_ATTEMPTS
    }

    pub fn default_retry_base_delay_ms() -> u64 {
        DEFAULT_RETRY_BASE_DELAY_MS
    }

    pub fn default_max_chunk_size() -> usize {
        MAX_CHUNK_SIZE
    }

    pub fn default_metadata_file_name() -> String {
        METADATA_FILE_NAME.to_string()
    }

    pub fn default_result_file_suffix() -> String {
        RESULT_FILE_NAME_SUFFIX.to_string()
    }

    pub fn default_pipeline_url() -> String {
        PIPELINE_URL.to_string()
    }

    pub fn default_pipeline_file_url() -> String {
        PIPELINE_FILE_URL.to_string()
    }
}
