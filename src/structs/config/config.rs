use serde::{Deserialize, Serialize};
use crate::structs::config::github_config::GithubConfig;
use crate::structs::config::report_config::ReportConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub report: ReportConfig,
}
