//! Persistent state store collaborator and record codec.
//!
//! # Responsibility
//! - Define the string-keyed get/set seam standing in for the browser's
//!   persistent store.
//! - Encode and decode the full record sequence under the fixed key.
//!
//! # Invariants
//! - The persisted value is always the entire unfiltered record sequence;
//!   view state is never written.
//! - Decode failures are recoverable: callers fall back to an empty
//!   sequence and log the event.

use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStateStore;
pub use memory::MemoryStateStore;

/// Fixed key the record sequence is persisted under.
pub const STATE_KEY: &str = "userData";

pub type StorageResult<T> = Result<T, StorageError>;

/// State-store failure for read, write and encode paths.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "state store I/O failure: {err}"),
            Self::Encode(err) => write!(f, "state encoding failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Opaque string-keyed persistent store.
pub trait StateStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Serializes the full record sequence for persistence.
pub fn encode_state(records: &[User]) -> StorageResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Deserializes a persisted record sequence.
///
/// A decode error here is the corrupt-stored-data case; callers treat it
/// as an empty sequence after logging.
pub fn decode_state(raw: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(raw)
}
