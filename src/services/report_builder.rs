use crate::structs::config::report_config::ReportConfig;
use crate::structs::run_parameters::RunParameters;
use crate::structs::status_summary::StatusSummary;

/// Placeholder printed for a tool version no metadata file supplied.
pub const UNRESOLVED_VERSION: &str = "undefined";

pub struct ReportBuilder {
    pipeline_url: String,
    pipeline_file_url: String,
}

impl ReportBuilder {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            pipeline_url: config.pipeline_url.clone(),
            pipeline_file_url: config.pipeline_file_url.clone(),
        }
    }

    pub fn title(&self, summary: &StatusSummary) -> String {
        let (new_version, old_version) = Self::versions(summary);
        format!("[NewErrors] {} vs {}", new_version, old_version)
    }

    pub fn header(&self, summary: &StatusSummary, run: &RunParameters) -> String {
        let (new_version, old_version) = Self::versions(summary);

        let rows: String = summary
            .sorted_status_counts()
            .into_iter()
            .map(|(label, count)| format!("| {} | {} |\n", label, count))
            .collect();

        format!(
            "The following errors were reported by {new}, but not by {old}\n\
             [Pipeline that generated this bug]({pipeline})\n\
             [Logs for the pipeline run]({logs})\n\
             [File that generated the pipeline]({pipeline_file})\n\
             \n\
             This run considered {repo_count} popular TS repos from GH (after skipping the top {start}).\n\
             \n\
             <details>\n\
             <summary>Successfully analyzed {analyzed} of {total} visited repos</summary>\n\
             \n\
             | Outcome | Count |\n\
             |---------|-------|\n\
             {rows}\n\
             </details>\n\n\n",
            new = new_version,
            old = old_version,
            pipeline = self.pipeline_url,
            logs = run.log_uri,
            pipeline_file = self.pipeline_file_url,
            repo_count = run.repo_count,
            start = run.repo_start_index,
            analyzed = summary.analyzed_count,
            total = summary.total_count,
            rows = rows,
        )
    }

    fn versions(summary: &StatusSummary) -> (&str, &str) {
        (
            summary.new_tsc_resolved_version.as_deref().unwrap_or(UNRESOLVED_VERSION),
            summary.old_tsc_resolved_version.as_deref().unwrap_or(UNRESOLVED_VERSION),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::status_summary_builder::StatusSummaryBuilder;

    fn run() -> RunParameters {
        RunParameters {
            repo_count: "100".to_string(),
            repo_start_index: "0".to_string(),
            log_uri: "https://example.test/logs/42".to_string(),
        }
    }

    fn summary() -> StatusSummary {
        let mut summary = StatusSummaryBuilder::new()
            .add_status_count("Error", 2)
            .add_status_count("Detected no interesting changes", 15)
            .add_status_count("Detected interesting changes", 3)
            .build();
        summary.new_tsc_resolved_version = Some("5.1.0".to_string());
        summary.old_tsc_resolved_version = Some("5.0.0".to_string());
        summary
    }

    #[test]
    fn renders_full_header() {
        let builder = ReportBuilder::new(&ReportConfig::default());
        let expected = "\
The following errors were reported by 5.1.0, but not by 5.0.0
[Pipeline that generated this bug](https://typescript.visualstudio.com/TypeScript/_build?definitionId=48)
[Logs for the pipeline run](https://example.test/logs/42)
[File that generated the pipeline](https://github.com/microsoft/typescript-error-deltas/blob/main/azure-pipelines-gitTests.yml)

This run considered 100 popular TS repos from GH (after skipping the top 0).

<details>
<summary>Successfully analyzed 18 of 20 visited repos</summary>

| Outcome | Count |
|---------|-------|
| Detected interesting changes | 3 |
| Detected no interesting changes | 15 |
| Error | 2 |

</details>


";
        assert_eq!(builder.header(&summary(), &run()), expected);
        assert_eq!(builder.title(&summary()), "[NewErrors] 5.1.0 vs 5.0.0");
    }

    #[test]
    fn missing_versions_render_literally() {
        let builder = ReportBuilder::new(&ReportConfig::default());
        let empty = StatusSummary::default();

        assert_eq!(builder.title(&empty), "[NewErrors] undefined vs undefined");
        let header = builder.header(&empty, &run());
        assert!(header.starts_with("The following errors were reported by undefined, but not by undefined\n"));
        assert!(header.contains("Successfully analyzed 0 of 0 visited repos"));
        assert!(header.contains("|---------|-------|\n\n</details>"));
    }

    #[test]
    fn output_is_stable_across_insertion_orders() {
        let builder = ReportBuilder::new(&ReportConfig::default());
        let forward = StatusSummaryBuilder::new()
            .add_status_count("c", 1)
            .add_status_count("a", 2)
            .add_status_count("b", 3)
            .build();
        let backward = StatusSummaryBuilder::new()
            .add_status_count("b", 3)
            .add_status_count("a", 2)
            .add_status_count("c", 1)
            .build();

        let first = builder.header(&forward, &run());
        assert_eq!(first, builder.header(&backward, &run()));
        assert_eq!(first, builder.header(&forward, &run()));
        let a = first.find("| a | 2 |").unwrap();
        let b = first.find("| b | 3 |").unwrap();
        let c = first.find("| c | 1 |").unwrap();
        assert!(a < b && b < c);
    }
}
