use evaltrack_core::db::open_db_in_memory;
use evaltrack_core::{
    RepoError, RoleRepository, SqliteRoleRepository, SqliteUserRepository, Status, UserRepository,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let created = repo
        .create_user("Ada Lovelace", "ada@example.com", None, None)
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.status, Status::Active);
    assert!(created.created_at > 0);
    assert!(created.updated_at > 0);

    let loaded = repo.get_user_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_missing_user_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    assert!(repo.get_user_by_id(4242).unwrap().is_none());
}

#[test]
fn update_status_on_missing_user_returns_none_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    repo.create_user("Grace Hopper", "grace@example.com", None, None)
        .unwrap();

    let updated = repo.update_user_status(4242, Status::Inactive).unwrap();
    assert!(updated.is_none());

    let all = repo.get_all_users().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, Status::Active);
}

#[test]
fn update_status_deactivates_but_keeps_user_listed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let user = repo
        .create_user("Alan Turing", "alan@example.com", None, None)
        .unwrap();

    let updated = repo
        .update_user_status(user.id, Status::Inactive)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, Status::Inactive);

    // No implicit filtering of inactive rows.
    let all = repo.get_all_users().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, Status::Inactive);
}

#[test]
fn get_all_users_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let first = repo
        .create_user("First", "first@example.com", None, None)
        .unwrap();
    let second = repo
        .create_user("Second", "second@example.com", None, None)
        .unwrap();

    let all = repo.get_all_users().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn duplicate_email_fails_with_database_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    repo.create_user("One", "same@example.com", None, None)
        .unwrap();
    let err = repo
        .create_user("Two", "same@example.com", None, None)
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn duplicate_name_fails_with_database_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    repo.create_user("Same Name", "a@example.com", None, None)
        .unwrap();
    let err = repo
        .create_user("Same Name", "b@example.com", None, None)
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn add_role_creates_one_link_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let users = SqliteUserRepository::new(&conn);
    let roles = SqliteRoleRepository::new(&conn);

    let user = users
        .create_user("Linked", "linked@example.com", None, None)
        .unwrap();
    let role = roles.create_role("manager", Some("people manager")).unwrap();

    let first = users.add_role(user.id, role.id, Status::Active).unwrap();
    assert_eq!(first.user_id, user.id);
    assert_eq!(first.role_id, role.id);
    assert_eq!(first.status, Status::Active);

    // Second call with a different status returns the original link unchanged.
    let second = users.add_role(user.id, role.id, Status::Inactive).unwrap();
    assert_eq!(second, first);

    assert_eq!(count_links(&conn, user.id, role.id), 1);
}

#[test]
fn add_role_allows_several_roles_per_user() {
    let conn = open_db_in_memory().unwrap();
    let users = SqliteUserRepository::new(&conn);
    let roles = SqliteRoleRepository::new(&conn);

    let user = users
        .create_user("Multi", "multi@example.com", None, None)
        .unwrap();
    let first_role = roles.create_role("reviewer", None).unwrap();
    let second_role = roles.create_role("approver", None).unwrap();

    let first = users
        .add_role(user.id, first_role.id, Status::Active)
        .unwrap();
    let second = users
        .add_role(user.id, second_role.id, Status::Active)
        .unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn user_keeps_area_and_company_references() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO areas (name, description) VALUES ('Engineering', 'Eng dept');",
        [],
    )
    .unwrap();
    let area_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO companies (name, description) VALUES ('Acme', 'HQ');",
        [],
    )
    .unwrap();
    let company_id = conn.last_insert_rowid();

    let repo = SqliteUserRepository::new(&conn);
    let user = repo
        .create_user(
            "Scoped",
            "scoped@example.com",
            Some(area_id),
            Some(company_id),
        )
        .unwrap();

    assert_eq!(user.area_id, Some(area_id));
    assert_eq!(user.company_id, Some(company_id));
}

fn count_links(conn: &Connection, user_id: i64, role_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM users_roles WHERE user_id = ?1 AND role_id = ?2;",
        [user_id, role_id],
        |row| row.get(0),
    )
    .unwrap()
}
