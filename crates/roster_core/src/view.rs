//! View state and the pure projection over the record store.
//!
//! # Responsibility
//! - Hold the transient sort/filter state for the session.
//! - Derive the filtered, sorted row sequence for rendering.
//!
//! # Invariants
//! - `project` never mutates its inputs and returns cloned rows only.
//! - Sorting is stable: equal keys keep pre-sort filtered order.
//! - View state is never persisted.

use crate::model::user::{User, UserStatus};
use std::cmp::Ordering;

/// Sortable columns of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    Age,
    Status,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Status => "status",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "age" => Some(Self::Age),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Status filter applied before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, status: UserStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == UserStatus::Active,
            Self::Inactive => status == UserStatus::Inactive,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Transient sort/filter state held alongside the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub filter_status: StatusFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            filter_status: StatusFilter::All,
        }
    }
}

impl ViewState {
    /// Applies a column-header click: toggles direction on the active
    /// field, otherwise switches field and resets to ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }
}

/// Derives the filtered, sorted row sequence for one render request.
///
/// The full sequence is returned every time; pagination and truncation are
/// out of scope. Descending order reverses the comparator, which under a
/// stable sort keeps equal keys in filtered (insertion) order either way.
pub fn project(records: &[User], view: &ViewState) -> Vec<User> {
    let mut rows: Vec<User> = records
        .iter()
        .filter(|user| view.filter_status.matches(user.status))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = compare_on(a, b, view.sort_field);
        match view.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    rows
}

fn compare_on(a: &User, b: &User, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Email => compare_text(&a.email, &b.email),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
    }
}

// Case-insensitive with a deterministic raw tiebreak; stands in for the
// environment-dependent locale comparison of the original surface.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
