use crate::core::{CandidateSource, DatePattern, FileTransfer};
use crate::utils::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Flat directory of snapshot files on local disk.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    base_path: PathBuf,
}

impl LocalDirectory {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl CandidateSource for LocalDirectory {
    /// Names come back in glob order, which is alphabetical.
    fn list_candidates(&self, pattern: &DatePattern) -> Result<Vec<String>> {
        let base = Pattern::escape(&self.base_path.to_string_lossy());
        let query = Path::new(&base).join(pattern.glob());

        let mut names = Vec::new();
        for entry in glob::glob(&query.to_string_lossy())? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        tracing::debug!("{} candidate(s) in {}", names.len(), self.base_path.display());
        Ok(names)
    }
}

/// Copies matches with `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct LocalCopier;

#[async_trait::async_trait]
impl FileTransfer for LocalCopier {
    async fn transfer(
        &self,
        names: &[String],
        source: &Path,
        destination: &Path,
    ) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(destination).await?;

        let mut copied = Vec::with_capacity(names.len());
        for name in names {
            let from = source.join(name);
            let to = destination.join(name);
            tokio::fs::copy(&from, &to).await?;
            tracing::debug!("Copied {} -> {}", from.display(), to.display());
            copied.push(to);
        }
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RequestedTimestamp;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }

    #[test]
    fn test_lists_only_files_of_the_date() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "PTI_SE_15012022_1400.raw");
        touch(dir.path(), "PTI_SE_15012022_1200.raw");
        touch(dir.path(), "PTI_SE_16012022_1200.raw");
        touch(dir.path(), "PTI_SE_15012022_1200.txt");
        fs::create_dir(dir.path().join("PTI_SE_15012022_0000.raw")).unwrap();

        let source = LocalDirectory::new(dir.path());
        let ts = RequestedTimestamp::parse("15.01.2022T00:00").unwrap();
        let names = source
            .list_candidates(&DatePattern::for_timestamp(&ts))
            .unwrap();

        assert_eq!(
            names,
            vec!["PTI_SE_15012022_1200.raw", "PTI_SE_15012022_1400.raw"]
        );
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let dir = TempDir::new().unwrap();
        let odd = dir.path().join("snap[1]");
        fs::create_dir(&odd).unwrap();
        touch(&odd, "PTI_SE_01012022_0000.raw");

        let source = LocalDirectory::new(&odd);
        let ts = RequestedTimestamp::parse("01.01.2022T00:00").unwrap();
        let names = source
            .list_candidates(&DatePattern::for_timestamp(&ts))
            .unwrap();
        assert_eq!(names, vec!["PTI_SE_01012022_0000.raw"]);
    }

    #[tokio::test]
    async fn test_copier_creates_destination() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        touch(src.path(), "PTI_SE_01012022_0000.raw");
        let target = dst.path().join("nested").join("out");

        let copied = LocalCopier
            .transfer(&["PTI_SE_01012022_0000.raw".to_string()], src.path(), &target)
            .await
            .unwrap();

        assert_eq!(copied, vec![target.join("PTI_SE_01012022_0000.raw")]);
        assert_eq!(
            fs::read_to_string(&copied[0]).unwrap(),
            "PTI_SE_01012022_0000.raw"
        );
    }

    #[tokio::test]
    async fn test_copier_reports_missing_source_file() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let result = LocalCopier
            .transfer(&["PTI_SE_09092022_0900.raw".to_string()], src.path(), dst.path())
            .await;
        tokio_test::assert_err!(result);
    }
}
