use jobboard_core::db::open_db_in_memory;
use jobboard_core::{
    Actor, JobDraft, JobRepository, JobService, NewUser, RepoError, SqliteJobRepository,
    SqliteUserRepository, UserRepository, ValidationError,
};
use rusqlite::Connection;

fn register(conn: &Connection, email: &str, is_company: bool) -> Actor {
    let repo = SqliteUserRepository::try_new(conn).unwrap();
    repo.create_user(&NewUser {
        name: "Test Account".to_string(),
        email: email.to_string(),
        password_hash: "argon2id$stub".to_string(),
        is_company,
    })
    .unwrap()
    .actor()
}

fn draft(title: &str) -> JobDraft {
    JobDraft::new(title, "We are hiring.")
}

#[test]
fn company_creates_job_bound_to_its_account() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let mut input = draft("Backend Engineer");
    input.salary_from = Some(80_000.0);
    input.salary_to = Some(120_000.0);
    let job = repo.create_job(&input, &company).unwrap();

    assert!(job.id > 0);
    assert_eq!(job.user_id, company.id);
    assert_eq!(job.title, "Backend Engineer");
    assert!(job.is_active);
    assert!(job.created_at > 0);

    let first = repo.get_job(job.id).unwrap().unwrap();
    let second = repo.get_job(job.id).unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, job);
}

#[test]
fn candidate_cannot_create_job() {
    let mut conn = open_db_in_memory().unwrap();
    let candidate = register(&conn, "jane@example.com", false);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let err = repo.create_job(&draft("Backend Engineer"), &candidate).unwrap_err();
    assert!(matches!(
        err,
        RepoError::PermissionDenied { user_id, .. } if user_id == candidate.id
    ));
    assert!(repo.list_jobs(&Default::default()).unwrap().is_empty());
}

#[test]
fn blank_title_or_description_is_rejected() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let err = repo.create_job(&draft("   "), &company).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyTitle)
    ));

    let err = repo
        .create_job(&JobDraft::new("Backend Engineer", "\n"), &company)
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyDescription)
    ));
}

#[test]
fn list_orders_by_id_ascending_and_paginates() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let first = repo.create_job(&draft("first"), &company).unwrap();
    let second = repo.create_job(&draft("second"), &company).unwrap();
    let third = repo.create_job(&draft("third"), &company).unwrap();

    let all = repo.list_jobs(&Default::default()).unwrap();
    let ids: Vec<_> = all.iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    let page = repo
        .list_jobs(&jobboard_core::JobListQuery {
            limit: Some(2),
            offset: 1,
        })
        .unwrap();
    let page_ids: Vec<_> = page.iter().map(|job| job.id).collect();
    assert_eq!(page_ids, vec![second.id, third.id]);
}

#[test]
fn owner_updates_mutable_fields_only() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let job = repo.create_job(&draft("Backend Engineer"), &company).unwrap();

    let mut update = draft("Senior Backend Engineer");
    update.description = "More hiring.".to_string();
    update.salary_from = Some(100_000.0);
    update.is_active = false;
    let updated = repo.update_job(job.id, &update, &company).unwrap();

    assert_eq!(updated.id, job.id);
    assert_eq!(updated.user_id, job.user_id);
    assert_eq!(updated.created_at, job.created_at);
    assert_eq!(updated.title, "Senior Backend Engineer");
    assert_eq!(updated.description, "More hiring.");
    assert_eq!(updated.salary_from, Some(100_000.0));
    assert!(!updated.is_active);
}

#[test]
fn non_owner_update_and_delete_are_denied_and_leave_job_unchanged() {
    let mut conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "hiring@acme.example", true);
    let other_company = register(&conn, "hiring@rival.example", true);
    let mut repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let job = repo.create_job(&draft("Backend Engineer"), &owner).unwrap();

    let err = repo
        .update_job(job.id, &draft("Hijacked"), &other_company)
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::PermissionDenied { user_id, .. } if user_id == other_company.id
    ));

    let err = repo.delete_job(job.id, &other_company).unwrap_err();
    assert!(matches!(err, RepoError::PermissionDenied { .. }));

    let unchanged = repo.get_job(job.id).unwrap().unwrap();
    assert_eq!(unchanged, job);
}

#[test]
fn update_missing_job_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let err = repo.update_job(404, &draft("ghost"), &company).unwrap_err();
    assert!(matches!(err, RepoError::JobNotFound(404)));
}

#[test]
fn inverted_salary_bounds_are_accepted() {
    // The range is not validated anywhere in the system; it is only
    // surfaced in diagnostics. Keep the permissive behavior observable.
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let repo = SqliteJobRepository::try_new(&mut conn).unwrap();

    let mut input = draft("Backend Engineer");
    input.salary_from = Some(120_000.0);
    input.salary_to = Some(80_000.0);
    let job = repo.create_job(&input, &company).unwrap();

    assert_eq!(job.salary_from, Some(120_000.0));
    assert_eq!(job.salary_to, Some(80_000.0));
}

#[test]
fn service_wraps_repository_calls_and_normalizes_limit() {
    let mut conn = open_db_in_memory().unwrap();
    let company = register(&conn, "hiring@acme.example", true);
    let service = JobService::new(SqliteJobRepository::try_new(&mut conn).unwrap());

    let job = service.post_job(&draft("Backend Engineer"), &company).unwrap();
    assert_eq!(service.get_job(job.id).unwrap().map(|j| j.id), Some(job.id));

    let page = service.list_jobs(None, 0).unwrap();
    assert_eq!(page.applied_limit, 100);
    assert_eq!(page.items.len(), 1);

    let page = service.list_jobs(Some(0), 0).unwrap();
    assert_eq!(page.applied_limit, 100);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let mut conn = Connection::open_in_memory().unwrap();

    let result = SqliteJobRepository::try_new(&mut conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection { .. })
    ));
}
