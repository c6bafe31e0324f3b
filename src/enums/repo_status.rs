use std::fmt;

/// Outcome labels written by the error delta pipeline into `statusCounts`.
///
/// Metadata files may carry labels outside this list; those are still counted
/// and rendered, they just never contribute to the analyzed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoStatus {
    UnknownFailure,
    GitCloneFailed,
    PackageInstallFailed,
    LanguageServiceDisabled,
    DetectedInterestingChanges,
    DetectedNoInterestingChanges,
}

impl RepoStatus {
    pub const ALL: [RepoStatus; 6] = [
        RepoStatus::UnknownFailure,
        RepoStatus::GitCloneFailed,
        RepoStatus::PackageInstallFailed,
        RepoStatus::LanguageServiceDisabled,
        RepoStatus::DetectedInterestingChanges,
        RepoStatus::DetectedNoInterestingChanges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepoStatus::UnknownFailure => "Unknown failure",
            RepoStatus::GitCloneFailed => "Git clone failed",
            RepoStatus::PackageInstallFailed => "Package install failed",
            RepoStatus::LanguageServiceDisabled => "Language service disabled in new TS",
            RepoStatus::DetectedInterestingChanges => "Detected interesting changes",
            RepoStatus::DetectedNoInterestingChanges => "Detected no interesting changes",
        }
    }

    pub fn from_label(label: &str) -> Option<RepoStatus> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }

    /// Whether the compiler comparison actually ran to completion.
    pub fn is_analyzed(&self) -> bool {
        matches!(
            self,
            RepoStatus::DetectedInterestingChanges | RepoStatus::DetectedNoInterestingChanges
        )
    }

    pub fn label_counts_as_analyzed(label: &str) -> bool {
        Self::from_label(label).is_some_and(|status| status.is_analyzed())
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
