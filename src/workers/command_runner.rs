use std::time::Instant;
use crate::errors::SummaryResult;
use crate::services::metadata_aggregator::MetadataAggregator;
use crate::services::paginator::Paginator;
use crate::services::report_builder::ReportBuilder;
use crate::services::result_reader::ResultReader;
use crate::services::result_scanner::ResultScanner;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::run_parameters::RunParameters;
use crate::structs::summary_issue::SummaryIssue;
use crate::traits::issue_submitter::IssueSubmitter;

pub struct CommandRunner {
    config: Config,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, cli: &Cli, submitter: &dyn IssueSubmitter) -> SummaryResult<Option<String>> {
        self.start_time = Some(Instant::now());

        let result = self.summarize_command(cli, submitter).await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn summarize_command(&self, cli: &Cli, submitter: &dyn IssueSubmitter) -> SummaryResult<Option<String>> {
        let issue = self.prepare_issue(cli)?;
        let post_result = cli.should_post();
        if !post_result {
            log::info!("🧪 Dry run: the issue will be printed instead of posted");
        }

        let url = submitter
            .create_issue(post_result, &issue.title, &issue.body_chunks, issue.saw_new_errors)
            .await?;
        Ok(url)
    }

    /// Runs aggregation, report building and pagination without submitting anything.
    pub fn prepare_issue(&self, cli: &Cli) -> SummaryResult<SummaryIssue> {
        let report_config = &self.config.report;
        let scanner = ResultScanner::new(&cli.result_dir_path);

        log::info!("🔍 Collecting metadata from {}", scanner.root().display());
        let metadata_paths = scanner.find(&report_config.metadata_pattern())?;
        let summary = MetadataAggregator::aggregate(&metadata_paths)?;

        let builder = ReportBuilder::new(report_config);
        let title = builder.title(&summary);
        let header = builder.header(&summary, &RunParameters::from(cli));

        let mut result_paths = scanner.find(&report_config.result_pattern())?;
        let reader = ResultReader::new()?;
        reader.sort_by_file_name(&mut result_paths);
        let fragments = reader.read_fragments(&result_paths)?;
        log::info!("📄 Read {} result fragments", fragments.len());

        let paginator = Paginator::new(report_config.max_chunk_size);
        let body_chunks = paginator.paginate(header, &fragments);
        log::info!("📦 Report split into {} chunk(s) of at most {} characters", body_chunks.len(), paginator.max_chunk_size());

        Ok(SummaryIssue {
            title,
            body_chunks,
            saw_new_errors: !fragments.is_empty(),
        })
    }
}
