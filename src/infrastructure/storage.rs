use std::fs;
use std::path::Path;

use crate::domain::error::Result;

/// Read-only view of the filesystem used by the CSV load pipeline.
pub trait FileSource: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file into memory as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Local-disk implementation.
pub struct LocalFiles;

impl FileSource for LocalFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}
