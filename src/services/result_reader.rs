use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;
use crate::errors::{SummaryError, SummaryResult};

/// Reads result fragments in collation order of their file names.
pub struct ResultReader {
    collator: Collator,
}

impl ResultReader {

    /// Root-locale collator at default strength, the ordering `String.prototype.localeCompare` yields.
    pub fn new() -> SummaryResult<Self> {
        let collator = Collator::try_new(&DataLocale::default(), CollatorOptions::new())
            .map_err(|e| SummaryError::system_error("collator setup", &e.to_string()))?;
        Ok(Self { collator })
    }

    /// Orders result files by file name so pagination does not depend on walk order.
    pub fn sort_by_file_name(&self, paths: &mut [PathBuf]) {
        paths.sort_by(|a, b| self.compare_file_names(&Self::file_name(a), &Self::file_name(b)));
    }

    pub fn compare_file_names(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    pub fn read_fragments(&self, paths: &[PathBuf]) -> SummaryResult<Vec<String>> {
        paths.iter().map(|path| Self::read_fragment(path)).collect()
    }

    pub fn read_fragment(path: &Path) -> SummaryResult<String> {
        fs::read_to_string(path).map_err(|e| SummaryError::from(e).in_file(&path.display().to_string()))
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn reader() -> ResultReader {
        ResultReader::new().unwrap()
    }

    #[test]
    fn sorts_by_name_not_directory() {
        let mut paths = vec![
            PathBuf::from("a/zeta.results.txt"),
            PathBuf::from("z/alpha.results.txt"),
            PathBuf::from("m/Beta.results.txt"),
        ];
        reader().sort_by_file_name(&mut paths);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("z/alpha.results.txt"),
                PathBuf::from("m/Beta.results.txt"),
                PathBuf::from("a/zeta.results.txt"),
            ]
        );
    }

    #[test]
    fn punctuation_sorts_before_dot() {
        let reader = reader();
        assert_eq!(reader.compare_file_names("a_b.results.txt", "a.results.txt"), Ordering::Less);
        assert_eq!(reader.compare_file_names("a-b.results.txt", "a.results.txt"), Ordering::Less);
        assert_eq!(reader.compare_file_names("a_b.results.txt", "a-b.results.txt"), Ordering::Less);

        let mut paths = vec![
            PathBuf::from("x/my.results.txt"),
            PathBuf::from("x/my-repo.results.txt"),
            PathBuf::from("x/my_repo.results.txt"),
        ];
        reader.sort_by_file_name(&mut paths);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("x/my_repo.results.txt"),
                PathBuf::from("x/my-repo.results.txt"),
                PathBuf::from("x/my.results.txt"),
            ]
        );
    }

    #[test]
    fn digits_compare_without_numeric_ordering() {
        let reader = reader();
        assert_eq!(reader.compare_file_names("repo10.results.txt", "repo2.results.txt"), Ordering::Less);
        assert_eq!(reader.compare_file_names("a.results.txt", "a1.results.txt"), Ordering::Less);
        assert_eq!(reader.compare_file_names("9.results.txt", "a.results.txt"), Ordering::Less);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_tie() {
        let reader = reader();
        assert_eq!(reader.compare_file_names("a", "A"), Ordering::Less);
        assert_eq!(reader.compare_file_names("A", "b"), Ordering::Less);
        assert_eq!(reader.compare_file_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn unreadable_fragment_is_fatal() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("one.results.txt");
        fs::write(&present, "one").unwrap();
        let missing = dir.path().join("two.results.txt");

        let reader = reader();
        assert_eq!(reader.read_fragments(&[present.clone()]).unwrap(), vec!["one"]);
        let err = reader.read_fragments(&[present, missing]).unwrap_err();
        assert!(matches!(err, SummaryError::FileOperationError { .. }));
    }
}
