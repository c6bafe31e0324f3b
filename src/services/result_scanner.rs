use std::path::{Path, PathBuf};
use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;
use crate::errors::SummaryResult;

/// Finds files under a result directory whose relative path matches a glob.
pub struct ResultScanner {
    root: PathBuf,
}

impl ResultScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns matching files in walk order (directory entries sorted by name).
    pub fn find(&self, pattern: &str) -> SummaryResult<Vec<PathBuf>> {
        let matcher = Self::compile(pattern)?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = path.strip_prefix(&self.root).unwrap_or(path);
            if matcher.is_match(relative_path) {
                files.push(path.to_path_buf());
            }
        }

        log::debug!("🔎 {} files under {} match {}", files.len(), self.root.display(), pattern);
        Ok(files)
    }

    fn compile(pattern: &str) -> SummaryResult<GlobMatcher> {
        let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
        Ok(glob.compile_matcher())
    }
}
