use std::path::PathBuf;

use crate::error::Result;
use crate::types::TargetAddress;

/// A changed source file and the targets owning its source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyFile {
    pub path: PathBuf,
    pub target_addresses: Vec<TargetAddress>,
}

impl DirtyFile {
    pub fn new<I, T>(path: impl Into<PathBuf>, addresses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetAddress>,
    {
        Self {
            path: path.into(),
            target_addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }
}

/// The host's dirty-file tracking.
pub trait DirtyFiles {
    /// Files changed since the last successful build
    fn dirty_files(&self) -> Result<Vec<DirtyFile>>;
}

impl DirtyFiles for Vec<DirtyFile> {
    fn dirty_files(&self) -> Result<Vec<DirtyFile>> {
        Ok(self.clone())
    }
}
