use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{SummaryError, SummaryResult};
use crate::structs::metadata::Metadata;
use crate::structs::status_summary::StatusSummary;
use crate::structs::status_summary_builder::StatusSummaryBuilder;

pub struct MetadataAggregator;

impl MetadataAggregator {

    /// Reads every metadata file in the given order. Any unreadable or malformed file aborts the run.
    pub fn aggregate(paths: &[PathBuf]) -> SummaryResult<StatusSummary> {
        let mut builder = StatusSummaryBuilder::new();
        for path in paths {
            let metadata = Self::read_metadata(path)?;
            builder = builder.add_metadata(&metadata);
        }

        let summary = builder.build();
        log::info!(
            "📊 Aggregated {} metadata files: {} of {} repos analyzed",
            paths.len(),
            summary.analyzed_count,
            summary.total_count
        );
        Ok(summary)
    }

    pub fn read_metadata(path: &Path) -> SummaryResult<Metadata> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| SummaryError::from(e).in_file(&display))?;
        serde_json::from_str(&content).map_err(|e| SummaryError::from(e).in_file(&display))
    }
}
