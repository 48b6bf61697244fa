use crate::domain::model::DatePattern;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Lists the snapshot file names that belong to one date.
///
/// Implementations return bare file names (no directory part) in their
/// natural enumeration order; the matcher's tie-breaking follows that order.
pub trait CandidateSource: Send + Sync {
    fn list_candidates(&self, pattern: &DatePattern) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_dir(&self) -> &Path;
    fn destination_dir(&self) -> &Path;
}

#[async_trait]
pub trait FileTransfer: Send + Sync {
    /// Copies each named file from `source` into `destination`, creating
    /// `destination` first. Returns the written paths.
    async fn transfer(
        &self,
        names: &[String],
        source: &Path,
        destination: &Path,
    ) -> Result<Vec<PathBuf>>;
}
