//! Directory-backed state store adapter.
//!
//! # Responsibility
//! - Persist each key as one file under a base directory.
//!
//! # Invariants
//! - A missing key file reads as `None`, never as an error.
//! - Keys map to file names as-is; callers use the fixed `STATE_KEY`.

use super::{StateStore, StorageResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// State store keeping one `<key>.json` file per key.
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Creates the store, creating the base directory when absent.
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
