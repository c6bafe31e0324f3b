use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_PATH_ENV, CONFIG_RELATIVE_PATH};
use crate::errors::{SummaryError, SummaryResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn load() -> SummaryResult<Config> {
        match Self::config_location() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn config_location() -> Option<PathBuf> {
        if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(explicit));
        }
        dirs::home_dir().map(|d| d.join(CONFIG_RELATIVE_PATH))
    }

    pub fn load_from(path: &Path) -> SummaryResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| SummaryError::from(e).in_file(&display))?;
        Self::parse(&content).map_err(|e| e.in_file(&display))
    }

    pub fn parse(content: &str) -> SummaryResult<Config> {
        let config: Config = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> SummaryResult<()> {
        if config.report.max_chunk_size == 0 {
            return Err(SummaryError::config_error(
                "report.max_chunk_size must be greater than zero",
                Some("Remove the key to use the GitHub limit of 65536"),
            ));
        }
        if config.github.token_env.trim().is_empty() {
            return Err(SummaryError::config_error(
                "github.token_env must name an environment variable",
                None,
            ));
        }
        Ok(())
    }
}
