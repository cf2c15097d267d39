//! Session-scoped record store and its operations.
//!
//! # Responsibility
//! - Own the ordered record collection, view state, edit session and
//!   error banner for one page session.
//! - Run the startup merge/load pipeline.
//! - Map every UI action onto one named store operation.
//!
//! # Invariants
//! - Records mutate only through the named operations; each successful
//!   mutation is followed by a full persistence sync.
//! - Validation completes before any store mutation; no partial write.
//! - Sort/filter changes never persist.

use crate::model::draft::{UserDraft, ValidationErrors};
use crate::model::user::{User, UserId};
use crate::source::{synthesize_user, FetchError, RecordSource};
use crate::storage::{decode_state, encode_state, StateStore, StorageError, STATE_KEY};
use crate::view::{project, SortField, StatusFilter, ViewState};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod banner;

use banner::ErrorBanner;

/// Banner text for a failed startup fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch user data";

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure raised by one session operation. Terminal to that operation
/// only; the store is never left partially mutated.
#[derive(Debug)]
pub enum SessionError {
    /// Draft rejected by field validation; per-field details inside.
    Validation(ValidationErrors),
    /// Update targeted an id that is not in the store.
    NotFound(UserId),
    /// Startup fetch failed; the session stays uninitialized.
    Fetch(FetchError),
    /// Persistence sync failed.
    Storage(StorageError),
    /// Operation dispatched before a successful load.
    NotReady,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotReady => write!(f, "session is still loading"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Fetch(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::NotReady => None,
        }
    }
}

impl From<ValidationErrors> for SessionError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<FetchError> for SessionError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Edit-session state machine: `Idle` or `Editing(id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSession {
    Idle,
    Editing(UserId),
}

/// Lifecycle phase of the session.
///
/// Operations are reachable only in `Ready`; a failed load stays in
/// `Loading` indefinitely (no retry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Ready,
}

/// One UI action mapped onto one named store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Form submit: update when an edit session is active, else create.
    Submit(UserDraft),
    Delete(UserId),
    BeginEdit(UserId),
    SetSort(SortField),
    SetFilter(StatusFilter),
}

/// Session-scoped context owning the record store and all derived state.
pub struct Session<S: RecordSource, P: StateStore> {
    source: S,
    state_store: P,
    users: Vec<User>,
    view: ViewState,
    edit: EditSession,
    phase: SessionPhase,
    banner: ErrorBanner,
    next_id: UserId,
}

impl<S: RecordSource, P: StateStore> Session<S, P> {
    /// Creates an empty, not-yet-loaded session over the two collaborators.
    pub fn new(source: S, state_store: P) -> Self {
        Self {
            source,
            state_store,
            users: Vec::new(),
            view: ViewState::default(),
            edit: EditSession::Idle,
            phase: SessionPhase::Loading,
            banner: ErrorBanner::new(),
            next_id: 1,
        }
    }

    /// Merge/load pipeline; runs once at startup.
    ///
    /// Remote records are fetched and completed with synthesized fields,
    /// then concatenated with locally persisted records, remote first; the
    /// order is load-bearing for display ties and duplicate ids. The
    /// merged store is persisted immediately so remote records survive the
    /// session too.
    ///
    /// # Errors
    /// - `Fetch` when the source fails; the banner is set and the session
    ///   stays in `Loading` with an empty store.
    /// - `Storage` when the post-merge sync fails.
    pub fn load(&mut self) -> SessionResult<()> {
        let raw = match self.source.fetch_users() {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=session_load module=session status=error error={err}");
                self.banner.show(FETCH_ERROR_MESSAGE);
                return Err(err.into());
            }
        };

        let mut rng = rand::thread_rng();
        let remote: Vec<User> = raw
            .into_iter()
            .map(|user| synthesize_user(user, &mut rng))
            .collect();
        let local = self.read_persisted();

        let remote_count = remote.len();
        let local_count = local.len();

        self.users = remote;
        self.users.extend(local);
        self.next_id = self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1;

        self.persist()?;
        self.phase = SessionPhase::Ready;
        info!(
            "event=session_load module=session status=ok remote={remote_count} local={local_count}"
        );
        Ok(())
    }

    fn read_persisted(&mut self) -> Vec<User> {
        let raw = match self.state_store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=state_read module=session status=error error={err}");
                return Vec::new();
            }
        };

        match decode_state(&raw) {
            Ok(users) => users,
            Err(err) => {
                // Corrupt persisted data degrades to an empty store.
                warn!("event=state_decode module=session status=error error={err}");
                Vec::new()
            }
        }
    }

    fn persist(&mut self) -> SessionResult<()> {
        let encoded = encode_state(&self.users)?;
        self.state_store.set(STATE_KEY, &encoded)?;
        debug!(
            "event=state_persist module=session status=ok count={}",
            self.users.len()
        );
        Ok(())
    }

    /// Dispatches one command onto its named operation.
    pub fn dispatch(&mut self, command: Command) -> SessionResult<()> {
        if self.phase != SessionPhase::Ready {
            return Err(SessionError::NotReady);
        }

        match command {
            Command::Submit(draft) => self.submit(&draft),
            Command::Delete(id) => self.delete(id),
            Command::BeginEdit(id) => {
                self.begin_edit(id);
                Ok(())
            }
            Command::SetSort(field) => self.set_sort(field),
            Command::SetFilter(status) => self.set_filter(status),
        }
    }

    /// Form submit: update when editing, else create.
    pub fn submit(&mut self, draft: &UserDraft) -> SessionResult<()> {
        self.ensure_ready()?;
        match self.edit {
            EditSession::Editing(id) => self.update(id, draft),
            EditSession::Idle => self.create(draft),
        }
    }

    /// Validates and appends a new record under a freshly allocated id.
    pub fn create(&mut self, draft: &UserDraft) -> SessionResult<()> {
        self.ensure_ready()?;
        let user = draft.build(self.next_id)?;
        self.next_id += 1;
        self.users.push(user);
        self.edit = EditSession::Idle;
        self.persist()
    }

    /// Validates and replaces the record with the given id in place.
    ///
    /// # Errors
    /// - `NotFound` when no record carries the id (surfaced rather than
    ///   silently ignored).
    pub fn update(&mut self, id: UserId, draft: &UserDraft) -> SessionResult<()> {
        self.ensure_ready()?;
        let user = draft.build(id)?;
        let slot = self
            .users
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(SessionError::NotFound(id))?;
        *slot = user;
        self.edit = EditSession::Idle;
        self.persist()
    }

    /// Removes the record with the given id; absent ids are a no-op.
    pub fn delete(&mut self, id: UserId) -> SessionResult<()> {
        self.ensure_ready()?;
        self.users.retain(|user| user.id != id);
        self.persist()
    }

    /// Starts an edit session and returns the form prefill.
    ///
    /// A missing id does nothing at all, leaving any live edit session
    /// untouched, and returns `None`.
    pub fn begin_edit(&mut self, id: UserId) -> Option<UserDraft> {
        let user = self.users.iter().find(|user| user.id == id)?;
        let prefill = UserDraft::from_user(user);
        self.edit = EditSession::Editing(id);
        Some(prefill)
    }

    /// Column-header click; view-state only, nothing is persisted.
    pub fn set_sort(&mut self, field: SortField) -> SessionResult<()> {
        self.ensure_ready()?;
        self.view.toggle_sort(field);
        Ok(())
    }

    /// Filter-dropdown change; view-state only, nothing is persisted.
    pub fn set_filter(&mut self, status: StatusFilter) -> SessionResult<()> {
        self.ensure_ready()?;
        self.view.filter_status = status;
        Ok(())
    }

    fn ensure_ready(&self) -> SessionResult<()> {
        if self.phase != SessionPhase::Ready {
            return Err(SessionError::NotReady);
        }
        Ok(())
    }

    /// Derives the filtered, sorted rows for rendering.
    pub fn rows(&self) -> Vec<User> {
        project(&self.users, &self.view)
    }

    /// Full unfiltered store, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn edit(&self) -> EditSession {
        self.edit
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Currently visible banner message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.banner.message()
    }

    /// Submit-button label derived from the edit session.
    pub fn submit_label(&self) -> &'static str {
        match self.edit {
            EditSession::Editing(_) => "Update User",
            EditSession::Idle => "Add User",
        }
    }
}
