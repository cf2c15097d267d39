//! User domain record.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store, the view
//!   deriver and the persistence codec.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `age` is a positive integer; write paths validate before construction.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Remote-sourced records arrive with integer ids, so the allocator for
/// locally created records shares the same integer space.
pub type UserId = i64;

/// Activity state rendered as the status badge and used by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Returns the lowercase wire/display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parses the lowercase wire/display form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Canonical user record held by the session store.
///
/// Remote-sourced and locally created records share this one shape; the
/// provenance of a record is not tracked past the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable id, unique across the merged store except for the documented
    /// remote/local collision case.
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Positive integer; synthesized for remote records, validated for
    /// locally created ones.
    pub age: u32,
    pub status: UserStatus,
}
