use roster_core::{
    decode_state, encode_state, Command, FetchError, FileStateStore, MemoryStateStore, RawUser,
    RecordSource, Session, SessionError, SessionPhase, SortField, SourceResult, User, UserDraft,
    UserStatus, FETCH_ERROR_MESSAGE, STATE_KEY,
};

struct StubSource {
    users: Vec<RawUser>,
    fail: bool,
}

impl StubSource {
    fn with(users: Vec<RawUser>) -> Self {
        Self { users, fail: false }
    }

    fn failing() -> Self {
        Self {
            users: Vec::new(),
            fail: true,
        }
    }
}

impl RecordSource for StubSource {
    fn fetch_users(&self) -> SourceResult<Vec<RawUser>> {
        if self.fail {
            return Err(FetchError::Unavailable("stub source down".to_string()));
        }
        Ok(self.users.clone())
    }
}

fn raw(id: i64, name: &str) -> RawUser {
    RawUser {
        id,
        name: name.to_string(),
        email: format!("{}@x.io", name.to_lowercase()),
    }
}

fn local_user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@x.io", name.to_lowercase()),
        age: 33,
        status: UserStatus::Inactive,
    }
}

fn seeded_state(local: &[User]) -> MemoryStateStore {
    MemoryStateStore::with_entry(STATE_KEY, &encode_state(local).unwrap())
}

#[test]
fn merge_places_remote_records_before_local_ones() {
    let local = vec![local_user(50, "Eve")];
    let mut session = Session::new(
        StubSource::with(vec![raw(1, "Ada"), raw(2, "Bob")]),
        seeded_state(&local),
    );
    session.load().unwrap();

    let names: Vec<&str> = session.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bob", "Eve"]);
    assert_eq!(session.phase(), SessionPhase::Ready);
}

#[test]
fn synthesized_fields_stay_in_their_ranges() {
    let remote: Vec<RawUser> = (1..=100).map(|id| raw(id, "Gen")).collect();
    let mut session = Session::new(StubSource::with(remote), MemoryStateStore::new());
    session.load().unwrap();

    for user in session.users() {
        assert!((20..=49).contains(&user.age), "age {}", user.age);
        assert!(matches!(
            user.status,
            UserStatus::Active | UserStatus::Inactive
        ));
    }
}

#[test]
fn load_persists_the_merged_store_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let state = FileStateStore::open(dir.path()).unwrap();
    let mut session = Session::new(StubSource::with(vec![raw(1, "Ada")]), state);
    session.load().unwrap();

    let raw_value = std::fs::read_to_string(dir.path().join("userData.json")).unwrap();
    let persisted = decode_state(&raw_value).unwrap();
    assert_eq!(persisted, session.users());
}

#[test]
fn fetch_failure_sets_the_banner_and_stays_loading() {
    let mut session = Session::new(StubSource::failing(), MemoryStateStore::new());

    let err = session.load().unwrap_err();
    assert!(matches!(err, SessionError::Fetch(FetchError::Unavailable(_))));
    assert_eq!(session.phase(), SessionPhase::Loading);
    assert_eq!(session.error_message(), Some(FETCH_ERROR_MESSAGE));
    assert!(session.users().is_empty());

    // Controls stay unreachable after a failed load.
    let err = session.dispatch(Command::Delete(1)).unwrap_err();
    assert!(matches!(err, SessionError::NotReady));
}

#[test]
fn corrupt_persisted_state_degrades_to_empty() {
    let state = MemoryStateStore::with_entry(STATE_KEY, "{ definitely not records");
    let mut session = Session::new(StubSource::with(vec![raw(1, "Ada")]), state);
    session.load().unwrap();

    let names: Vec<&str> = session.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada"]);
}

#[test]
fn duplicate_ids_across_remote_and_local_are_both_kept() {
    let local = vec![local_user(1, "Shadow")];
    let mut session = Session::new(StubSource::with(vec![raw(1, "Ada")]), seeded_state(&local));
    session.load().unwrap();

    let ids: Vec<i64> = session.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 1]);
}

#[test]
fn id_allocation_starts_past_the_merged_maximum() {
    let local = vec![local_user(1, "Eve"), local_user(7, "Mallory")];
    let mut session = Session::new(StubSource::with(vec![raw(3, "Ada")]), seeded_state(&local));
    session.load().unwrap();

    session
        .create(&UserDraft {
            name: "New".to_string(),
            email: "new@x.io".to_string(),
            age: "21".to_string(),
            status: UserStatus::Active,
        })
        .unwrap();

    assert_eq!(session.users().last().unwrap().id, 8);
}

#[test]
fn persisted_store_round_trips_through_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();

    let snapshot = {
        let state = FileStateStore::open(dir.path()).unwrap();
        let mut session = Session::new(StubSource::with(Vec::new()), state);
        session.load().unwrap();
        session
            .create(&UserDraft {
                name: "Ada".to_string(),
                email: "ada@x.io".to_string(),
                age: "30".to_string(),
                status: UserStatus::Active,
            })
            .unwrap();
        session.users().to_vec()
    };

    let state = FileStateStore::open(dir.path()).unwrap();
    let mut session = Session::new(StubSource::with(Vec::new()), state);
    session.load().unwrap();

    assert_eq!(session.users(), snapshot.as_slice());
}

#[test]
fn sort_and_filter_changes_do_not_persist() {
    let dir = tempfile::tempdir().unwrap();
    let state = FileStateStore::open(dir.path()).unwrap();
    let mut session = Session::new(StubSource::with(vec![raw(1, "Ada")]), state);
    session.load().unwrap();

    let state_path = dir.path().join("userData.json");
    let before = std::fs::read_to_string(&state_path).unwrap();

    session.dispatch(Command::SetSort(SortField::Age)).unwrap();
    session
        .dispatch(Command::SetFilter(
            roster_core::StatusFilter::Inactive,
        ))
        .unwrap();

    let after = std::fs::read_to_string(&state_path).unwrap();
    assert_eq!(before, after);
}
