pub mod config_helper;
pub mod retry_helper;
