use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    #[serde(default = "ConfigHelper::default_api_base")]
    pub api_base: String,

    #[serde(default = "ConfigHelper::default_owner")]
    pub owner: String,

    #[serde(default = "ConfigHelper::default_repo")]
    pub repo: String,

    /// Name of the environment variable holding the access token.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(default = "ConfigHelper::default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "ConfigHelper::default_retry_max_attempts")]
    pub retry_max_attempts: usize,

    #[serde(default = "ConfigHelper::default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: ConfigHelper::default_api_base(),
            owner: ConfigHelper::default_owner(),
            repo: ConfigHelper::default_repo(),
            token_env: ConfigHelper::default_token_env(),
            user_agent: ConfigHelper::default_user_agent(),
            request_timeout_ms: ConfigHelper::default_request_timeout_ms(),
            retry_max_attempts: ConfigHelper::default_retry_max_attempts(),
            retry_base_delay_ms: ConfigHelper::default_retry_base_delay_ms(),
        }
    }
}
