//! Core domain logic for the roster table.
//! This crate is the single source of truth for the record store, its
//! validation rules and the view-derivation pipeline.

pub mod logging;
pub mod model;
pub mod render;
pub mod session;
pub mod source;
pub mod storage;
pub mod view;

pub use logging::{default_log_level, init_logging, LoggingError, LoggingResult};
pub use model::draft::{validate_draft, FieldError, UserDraft, ValidationErrors};
pub use model::user::{User, UserId, UserStatus};
pub use render::{render_errors, render_table};
pub use session::banner::{ErrorBanner, DISMISS_AFTER};
pub use session::{
    Command, EditSession, Session, SessionError, SessionPhase, SessionResult, FETCH_ERROR_MESSAGE,
};
pub use source::{
    synthesize_user, FetchError, JsonFileSource, RawUser, RecordSource, SourceResult,
};
pub use storage::{
    decode_state, encode_state, FileStateStore, MemoryStateStore, StateStore, StorageError,
    StorageResult, STATE_KEY,
};
pub use view::{project, SortDirection, SortField, StatusFilter, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
