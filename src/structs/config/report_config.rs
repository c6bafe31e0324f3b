use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "ConfigHelper::default_max_chunk_size")]
    pub max_chunk_size: usize,

    #[serde(default = "ConfigHelper::default_metadata_file_name")]
    pub metadata_file_name: String,

    #[serde(default = "ConfigHelper::default_result_file_suffix")]
    pub result_file_suffix: String,

    #[serde(default = "ConfigHelper::default_pipeline_url")]
    pub pipeline_url: String,

    #[serde(default = "ConfigHelper::default_pipeline_file_url")]
    pub pipeline_file_url: String,
}

impl ReportConfig {
    pub fn metadata_pattern(&self) -> String {
        format!("**/{}", self.metadata_file_name)
    }

    pub fn result_pattern(&self) -> String {
        format!("**/*.{}", self.result_file_suffix)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: ConfigHelper::default_max_chunk_size(),
            metadata_file_name: ConfigHelper::default_metadata_file_name(),
            result_file_suffix: ConfigHelper::default_result_file_suffix(),
            pipeline_url: ConfigHelper::default_pipeline_url(),
            pipeline_file_url: ConfigHelper::default_pipeline_file_url(),
        }
    }
}
