use std::process;
use clap::error::ErrorKind;
use clap::Parser;
use tsc_error_summary::config::config_manager::ConfigManager;
use tsc_error_summary::config::constants::{FAILURE_EXIT_CODE, USAGE_EXIT_CODE};
use tsc_error_summary::errors::{ErrorHandler, SummaryError, SummaryResult};
use tsc_error_summary::services::github_issue_submitter::GithubIssueSubmitter;
use tsc_error_summary::structs::cli::Cli;
use tsc_error_summary::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", SummaryError::usage_error(&e.render().to_string()));
            process::exit(USAGE_EXIT_CODE);
        }
    };

    if let Err(e) = run(cli).await {
        ErrorHandler::handle_error(&e);
        process::exit(FAILURE_EXIT_CODE);
    }
}

async fn run(cli: Cli) -> SummaryResult<()> {
    let config = ConfigManager::load()?;
    let submitter = GithubIssueSubmitter::from_env(config.github.clone());
    CommandRunner::new(config).run_command(&cli, &submitter).await?;
    Ok(())
}
