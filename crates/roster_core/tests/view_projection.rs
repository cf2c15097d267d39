use roster_core::{
    project, SortDirection, SortField, StatusFilter, User, UserStatus, ViewState,
};

fn user(id: i64, name: &str, age: u32, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@x.io", name.to_lowercase()),
        age,
        status,
    }
}

fn sample() -> Vec<User> {
    vec![
        user(1, "Carol", 45, UserStatus::Active),
        user(2, "alice", 30, UserStatus::Inactive),
        user(3, "Bob", 22, UserStatus::Active),
        user(4, "Dave", 30, UserStatus::Inactive),
    ]
}

fn view(field: SortField, direction: SortDirection, filter: StatusFilter) -> ViewState {
    ViewState {
        sort_field: field,
        sort_direction: direction,
        filter_status: filter,
    }
}

#[test]
fn active_filter_yields_exactly_the_active_subset() {
    let store = sample();
    let rows = project(
        &store,
        &view(SortField::Name, SortDirection::Asc, StatusFilter::Active),
    );

    assert!(rows.iter().all(|u| u.status == UserStatus::Active));
    let expected: Vec<i64> = store
        .iter()
        .filter(|u| u.status == UserStatus::Active)
        .map(|u| u.id)
        .collect();
    let mut got: Vec<i64> = rows.iter().map(|u| u.id).collect();
    got.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn projection_is_idempotent_and_leaves_the_store_alone() {
    let store = sample();
    let snapshot = store.clone();
    let view = view(SortField::Age, SortDirection::Desc, StatusFilter::All);

    let first = project(&store, &view);
    let second = project(&store, &view);

    assert_eq!(first, second);
    assert_eq!(store, snapshot);
}

#[test]
fn age_sort_toggle_reverses_the_sequence_when_no_ties_exist() {
    let store = vec![
        user(1, "Carol", 45, UserStatus::Active),
        user(2, "alice", 30, UserStatus::Inactive),
        user(3, "Bob", 22, UserStatus::Active),
    ];

    let asc = project(
        &store,
        &view(SortField::Age, SortDirection::Asc, StatusFilter::All),
    );
    let desc = project(
        &store,
        &view(SortField::Age, SortDirection::Desc, StatusFilter::All),
    );

    let reversed: Vec<User> = asc.into_iter().rev().collect();
    assert_eq!(desc, reversed);
}

#[test]
fn age_sorts_numerically_not_lexicographically() {
    let store = vec![
        user(1, "A", 100, UserStatus::Active),
        user(2, "B", 9, UserStatus::Active),
        user(3, "C", 30, UserStatus::Active),
    ];

    let rows = project(
        &store,
        &view(SortField::Age, SortDirection::Asc, StatusFilter::All),
    );
    let ages: Vec<u32> = rows.iter().map(|u| u.age).collect();
    assert_eq!(ages, vec![9, 30, 100]);
}

#[test]
fn equal_keys_keep_insertion_order() {
    let store = sample();

    let rows = project(
        &store,
        &view(SortField::Age, SortDirection::Asc, StatusFilter::All),
    );
    // alice (id 2) precedes Dave (id 4) in insertion order; both are 30.
    let tied: Vec<i64> = rows.iter().filter(|u| u.age == 30).map(|u| u.id).collect();
    assert_eq!(tied, vec![2, 4]);

    let rows = project(
        &store,
        &view(SortField::Age, SortDirection::Desc, StatusFilter::All),
    );
    let tied: Vec<i64> = rows.iter().filter(|u| u.age == 30).map(|u| u.id).collect();
    assert_eq!(tied, vec![2, 4]);
}

#[test]
fn name_sort_ignores_case() {
    let rows = project(
        &sample(),
        &view(SortField::Name, SortDirection::Asc, StatusFilter::All),
    );
    let names: Vec<&str> = rows.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn status_sort_groups_by_badge_value() {
    let rows = project(
        &sample(),
        &view(SortField::Status, SortDirection::Asc, StatusFilter::All),
    );
    let statuses: Vec<UserStatus> = rows.iter().map(|u| u.status).collect();
    assert_eq!(
        statuses,
        vec![
            UserStatus::Active,
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Inactive,
        ]
    );
}
