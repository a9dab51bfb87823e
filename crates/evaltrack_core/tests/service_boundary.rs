//! Error-translation behavior of the service layer.

use evaltrack_core::db::open_db_in_memory;
use evaltrack_core::{
    CompanyService, RoleService, ServiceError, SqliteCompanyRepository, SqliteRoleRepository,
    SqliteUserRepository, Status, UserService,
};

#[test]
fn storage_failures_surface_as_database_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = CompanyService::new(SqliteCompanyRepository::new(&conn));

    service
        .create_company("Umbrella", None, Status::Active)
        .unwrap();
    let err = service
        .create_company("Umbrella", None, Status::Active)
        .unwrap_err();

    match err {
        ServiceError::Database(message) => assert!(
            message.contains("UNIQUE"),
            "unexpected message: {message}"
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_records_are_absent_results_not_errors() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));

    assert!(users.get_user_by_id(4242).unwrap().is_none());
    assert!(users
        .update_user_status(4242, Status::Inactive)
        .unwrap()
        .is_none());
}

#[test]
fn invalid_persisted_data_surfaces_as_operation_error_with_name() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));

    let user = users
        .create_user("Corrupt", "corrupt@example.com", None, None)
        .unwrap();
    conn.execute("UPDATE users SET status = 7 WHERE id = ?1;", [user.id])
        .unwrap();

    let err = users.get_user_by_id(user.id).unwrap_err();
    match err {
        ServiceError::Operation { operation, message } => {
            assert_eq!(operation, "get_user_by_id");
            assert!(message.contains("status"), "unexpected message: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn service_level_add_role_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::new(&conn));
    let roles = RoleService::new(SqliteRoleRepository::new(&conn));

    let user = users
        .create_user("Service", "service@example.com", None, None)
        .unwrap();
    let role = roles.create_role("lead", None).unwrap();

    let first = users.add_role(user.id, role.id, Status::Active).unwrap();
    let second = users.add_role(user.id, role.id, Status::Inactive).unwrap();
    assert_eq!(second, first);
}

#[test]
fn service_errors_render_their_operation_context() {
    let err = ServiceError::Operation {
        operation: "create_user",
        message: "boom".to_string(),
    };
    assert_eq!(err.to_string(), "error in create_user: boom");

    let err = ServiceError::Database("disk I/O error".to_string());
    assert_eq!(err.to_string(), "database error: disk I/O error");
}
