use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Per-repository summary written next to each result fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub new_tsc_resolved_version: Option<String>,

    #[serde(default)]
    pub old_tsc_resolved_version: Option<String>,

    #[serde(default)]
    pub status_counts: HashMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_optional() {
        let metadata: Metadata =
            serde_json::from_str(r#"{"statusCounts":{"Detected no interesting changes":5}}"#).unwrap();
        assert_eq!(metadata.new_tsc_resolved_version, None);
        assert_eq!(metadata.old_tsc_resolved_version, None);
        assert_eq!(metadata.status_counts["Detected no interesting changes"], 5);
    }

    #[test]
    fn null_versions_read_as_absent() {
        let metadata: Metadata = serde_json::from_str(
            r#"{"newTscResolvedVersion":null,"oldTscResolvedVersion":"5.0.0","statusCounts":{}}"#,
        )
        .unwrap();
        assert_eq!(metadata.new_tsc_resolved_version, None);
        assert_eq!(metadata.old_tsc_resolved_version.as_deref(), Some("5.0.0"));
    }

    #[test]
    fn negative_or_textual_counts_do_not_match_the_shape() {
        assert!(serde_json::from_str::<Metadata>(r#"{"statusCounts":{"Error":-1}}"#).is_err());
        assert!(serde_json::from_str::<Metadata>(r#"{"statusCounts":{"Error":"2"}}"#).is_err());
        assert!(serde_json::from_str::<Metadata>(r#"[1, 2]"#).is_err());
    }
}
