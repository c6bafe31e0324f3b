use crate::enums::repo_status::RepoStatus;
use crate::structs::metadata::Metadata;
use crate::structs::status_summary::StatusSummary;

pub struct StatusSummaryBuilder {
    summary: StatusSummary,
}

impl StatusSummaryBuilder {
    pub fn new() -> Self {
        Self {
            summary: StatusSummary::default(),
        }
    }

    pub fn add_metadata(mut self, metadata: &Metadata) -> Self {
        // First record to carry a version wins; later records never overwrite it.
        if self.summary.new_tsc_resolved_version.is_none() {
            self.summary.new_tsc_resolved_version = metadata.new_tsc_resolved_version.clone();
        }
        if self.summary.old_tsc_resolved_version.is_none() {
            self.summary.old_tsc_resolved_version = metadata.old_tsc_resolved_version.clone();
        }

        for (label, count) in &metadata.status_counts {
            self = self.add_status_count(label, *count);
        }

        self
    }

    pub fn add_status_count(mut self, label: &str, count: u64) -> Self {
        *self.summary.status_counts.entry(label.to_string()).or_insert(0) += count;
        self.summary.total_count += count;
        if RepoStatus::label_counts_as_analyzed(label) {
            self.summary.analyzed_count += count;
        }
        self
    }

    pub fn build(self) -> StatusSummary {
        self.summary
    }
}

impl Default for StatusSummaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
