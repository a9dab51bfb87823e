use evaltrack_core::db::open_db_in_memory;
use evaltrack_core::{
    PermissionRepository, RepoError, RoleRepository, SqlitePermissionRepository,
    SqliteRoleRepository, Status,
};
use rusqlite::Connection;

#[test]
fn role_create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let created = repo.create_role("admin", Some("full access")).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.status, Status::Active);
    assert_eq!(created.description.as_deref(), Some("full access"));

    let loaded = repo.get_role_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn role_description_may_be_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let created = repo.create_role("bare", None).unwrap();
    assert_eq!(created.description, None);
}

#[test]
fn duplicate_role_name_fails_with_database_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    repo.create_role("viewer", None).unwrap();
    let err = repo.create_role("viewer", None).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn update_role_status_roundtrip_and_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let role = repo.create_role("temp", None).unwrap();
    let updated = repo
        .update_role_status(role.id, Status::Inactive)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, Status::Inactive);

    assert!(repo.update_role_status(4242, Status::Active).unwrap().is_none());
}

#[test]
fn get_all_permissions_on_empty_table_returns_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePermissionRepository::new(&conn);

    let all = repo.get_all_permissions().unwrap();
    assert!(all.is_empty());
}

#[test]
fn permission_create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePermissionRepository::new(&conn);

    let created = repo
        .create_permission("results.read", Some("read evaluation results"))
        .unwrap();
    assert_eq!(created.status, Status::Active);

    let loaded = repo.get_permission_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);

    assert!(repo.get_permission_by_id(4242).unwrap().is_none());
}

#[test]
fn add_permission_creates_one_grant_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let roles = SqliteRoleRepository::new(&conn);
    let permissions = SqlitePermissionRepository::new(&conn);

    let role = roles.create_role("editor", None).unwrap();
    let permission = permissions.create_permission("results.write", None).unwrap();

    let first = roles
        .add_permission(role.id, permission.id, Status::Active)
        .unwrap();
    let second = roles
        .add_permission(role.id, permission.id, Status::Inactive)
        .unwrap();

    // Both calls return the identical grant, original status included.
    assert_eq!(second, first);
    assert_eq!(second.status, Status::Active);
    assert_eq!(count_grants(&conn, role.id, permission.id), 1);
}

#[test]
fn add_permission_with_inactive_status_persists_that_status() {
    let conn = open_db_in_memory().unwrap();
    let roles = SqliteRoleRepository::new(&conn);
    let permissions = SqlitePermissionRepository::new(&conn);

    let role = roles.create_role("dormant", None).unwrap();
    let permission = permissions.create_permission("audit.read", None).unwrap();

    let grant = roles
        .add_permission(role.id, permission.id, Status::Inactive)
        .unwrap();
    assert_eq!(grant.status, Status::Inactive);
}

fn count_grants(conn: &Connection, role_id: i64, permission_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM roles_permissions WHERE role_id = ?1 AND permission_id = ?2;",
        [role_id, permission_id],
        |row| row.get(0),
    )
    .unwrap()
}
