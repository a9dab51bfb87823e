use evaltrack_core::db::open_db_in_memory;
use evaltrack_core::{
    AreaRepository, CompanyRepository, RepoError, SqliteAreaRepository, SqliteCompanyRepository,
    Status,
};
use rusqlite::Connection;

#[test]
fn create_area_returns_populated_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAreaRepository::new(&conn);

    let area = repo
        .create_area("Engineering", Some("Eng dept"), Status::Active)
        .unwrap();
    assert!(area.id > 0);
    assert_eq!(area.name, "Engineering");
    assert_eq!(area.description.as_deref(), Some("Eng dept"));
    assert_eq!(area.status, Status::Active);
    assert!(area.created_at > 0);
    assert!(area.updated_at > 0);
}

#[test]
fn create_area_honors_explicit_inactive_status() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAreaRepository::new(&conn);

    let area = repo.create_area("Archived", None, Status::Inactive).unwrap();
    assert_eq!(area.status, Status::Inactive);
}

#[test]
fn company_create_get_update_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let company = repo
        .create_company("Acme", Some("parent company"), Status::Active)
        .unwrap();
    let loaded = repo.get_company_by_id(company.id).unwrap().unwrap();
    assert_eq!(loaded, company);

    let updated = repo
        .update_company_status(company.id, Status::Inactive)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, Status::Inactive);
    assert_eq!(updated.name, "Acme");

    assert!(repo.get_company_by_id(4242).unwrap().is_none());
    assert!(repo
        .update_company_status(4242, Status::Active)
        .unwrap()
        .is_none());
}

#[test]
fn duplicate_company_name_fails_with_database_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    repo.create_company("Globex", None, Status::Active).unwrap();
    let err = repo
        .create_company("Globex", None, Status::Active)
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn get_all_companies_includes_inactive_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    repo.create_company("Active Co", None, Status::Active)
        .unwrap();
    repo.create_company("Inactive Co", None, Status::Inactive)
        .unwrap();

    let all = repo.get_all_companies().unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn add_area_links_company_once() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::new(&conn);
    let areas = SqliteAreaRepository::new(&conn);

    let company = companies
        .create_company("Initech", None, Status::Active)
        .unwrap();
    let area = areas
        .create_area("Operations", None, Status::Active)
        .unwrap();

    let first = companies
        .add_area(company.id, area.id, Status::Active)
        .unwrap();
    let second = companies
        .add_area(company.id, area.id, Status::Inactive)
        .unwrap();

    assert_eq!(second, first);
    assert_eq!(count_links(&conn, company.id, area.id), 1);
}

fn count_links(conn: &Connection, company_id: i64, area_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM companies_areas WHERE company_id = ?1 AND area_id = ?2;",
        [company_id, area_id],
        |row| row.get(0),
    )
    .unwrap()
}
