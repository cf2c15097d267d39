//! Text rendering of the table surface.
//!
//! # Responsibility
//! - Project derived rows into an aligned text table with status badges
//!   and sort-marked headers.
//! - Render per-field validation messages.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs; it never touches the
//!   store or the persistence layer.

use crate::model::draft::ValidationErrors;
use crate::model::user::User;
use crate::view::{SortDirection, SortField, ViewState};

const COLUMNS: [(&str, SortField); 4] = [
    ("Name", SortField::Name),
    ("Email", SortField::Email),
    ("Age", SortField::Age),
    ("Status", SortField::Status),
];

/// Renders the derived rows as an aligned table.
///
/// The active sort column carries a `^`/`v` marker; each row leads with
/// its id, which stands in for the row's edit/delete action targets.
pub fn render_table(rows: &[User], view: &ViewState) -> String {
    let headers: Vec<String> = std::iter::once("Id".to_string())
        .chain(COLUMNS.iter().map(|(label, field)| header_label(label, *field, view)))
        .collect();

    let body: Vec<[String; 5]> = rows
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.age.to_string(),
                status_badge(user),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    push_row(
        &mut out,
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    );
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Renders field-level validation messages, one line per failing field.
pub fn render_errors(errors: &ValidationErrors) -> String {
    errors
        .messages()
        .iter()
        .map(|(field, message)| format!("{field}: {message}\n"))
        .collect()
}

fn header_label(label: &str, field: SortField, view: &ViewState) -> String {
    if view.sort_field != field {
        return label.to_string();
    }
    let marker = match view.sort_direction {
        SortDirection::Asc => '^',
        SortDirection::Desc => 'v',
    };
    format!("{label} {marker}")
}

fn status_badge(user: &User) -> String {
    format!("[{}]", user.status.as_str())
}

fn push_row<T: AsRef<str>>(out: &mut String, cells: &[T], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
