//! File-backed record source adapter.
//!
//! # Responsibility
//! - Adapt a JSON-array file on disk to the `RecordSource` seam.
//!
//! # Invariants
//! - Read failures map to `Unavailable`, decode failures to `Malformed`;
//!   the two are never conflated.

use super::{FetchError, RawUser, RecordSource, SourceResult};
use std::path::{Path, PathBuf};

/// Record source reading one JSON array file per fetch.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_users(&self) -> SourceResult<Vec<RawUser>> {
        let payload = std::fs::read_to_string(&self.path).map_err(|err| {
            FetchError::Unavailable(format!("{}: {err}", self.path.display()))
        })?;
        let users = serde_json::from_str::<Vec<RawUser>>(&payload)?;
        Ok(users)
    }
}
