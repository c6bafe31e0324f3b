use std::collections::HashMap;

/// Aggregate of every metadata file in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total_count: u64,
    pub analyzed_count: u64,
    pub status_counts: HashMap<String, u64>,
    pub new_tsc_resolved_version: Option<String>,
    pub old_tsc_resolved_version: Option<String>,
}

impl StatusSummary {
    /// Status rows in ascending label order; `HashMap` iteration order is never used for output.
    pub fn sorted_status_counts(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .status_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }
}
