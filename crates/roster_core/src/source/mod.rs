//! Remote record source collaborator.
//!
//! # Responsibility
//! - Define the trait seam for the opaque remote data source.
//! - Transform raw source records into domain records.
//!
//! # Invariants
//! - A source is read exactly once, during session load.
//! - Extra fields on raw records are ignored, never an error.

use crate::model::user::{User, UserId, UserStatus};
use rand::Rng;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;

pub use json_file::JsonFileSource;

pub type SourceResult<T> = Result<T, FetchError>;

/// Failure fetching or decoding the remote payload. Fatal to
/// initialization either way.
#[derive(Debug)]
pub enum FetchError {
    /// The source could not be reached or read.
    Unavailable(String),
    /// The payload was read but is not a JSON array of records.
    Malformed(serde_json::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "record source unavailable: {reason}"),
            Self::Malformed(err) => write!(f, "record source payload malformed: {err}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(_) => None,
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Raw record shape as delivered by the source.
///
/// Only `id`, `name` and `email` are consumed; any additional payload
/// fields are dropped by deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Opaque remote source returning the raw record array.
pub trait RecordSource {
    fn fetch_users(&self) -> SourceResult<Vec<RawUser>>;
}

/// Completes a raw record into a domain record.
///
/// The source carries no age or status, so both are synthesized: `age`
/// uniform in `[20, 49]`, `status` a uniform coin flip, independent per
/// record. Placeholder values, deliberately not seeded or reproducible.
pub fn synthesize_user<R: Rng>(raw: RawUser, rng: &mut R) -> User {
    User {
        id: raw.id,
        name: raw.name,
        email: raw.email,
        age: rng.gen_range(20..50),
        status: if rng.gen_bool(0.5) {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        },
    }
}
