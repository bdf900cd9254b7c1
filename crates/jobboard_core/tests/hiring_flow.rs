//! End-to-end walk through the documented hiring flow: a company posts a
//! listing, a candidate responds, a rival company is denied, and deleting
//! the listing sweeps the response away.

use jobboard_core::db::open_db_in_memory;
use jobboard_core::{
    Actor, JobDraft, JobRepository, NewUser, RepoError, ResponseDraft, ResponseRepository,
    SqliteJobRepository, SqliteResponseRepository, SqliteUserRepository, UserRepository,
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

#[test]
fn company_posts_candidate_responds_rival_is_denied() {
    let mut conn = open_db_in_memory().unwrap();
    let company_a = register(&conn, "hiring@acme.example", true);
    let candidate_b = register(&conn, "jane@example.com", false);
    let company_c = register(&conn, "hiring@rival.example", true);

    let job = {
        let repo = SqliteJobRepository::try_new(&mut conn).unwrap();
        let mut draft = JobDraft::new("Backend Engineer", "Build the job board.");
        draft.salary_from = Some(80_000.0);
        draft.salary_to = Some(120_000.0);
        repo.create_job(&draft, &company_a).unwrap()
    };
    assert!(job.is_active);
    assert_eq!(job.user_id, company_a.id);

    let response = {
        let mut repo = SqliteResponseRepository::try_new(&mut conn).unwrap();
        repo.create_response(&ResponseDraft::new(job.id, "Interested"), &candidate_b)
            .unwrap()
    };
    assert_eq!(response.user_id, candidate_b.id);

    {
        let mut repo = SqliteJobRepository::try_new(&mut conn).unwrap();

        let err = repo
            .update_job(job.id, &JobDraft::new("Hijacked", "..."), &company_c)
            .unwrap_err();
        assert!(matches!(err, RepoError::PermissionDenied { .. }));

        let err = repo.delete_job(job.id, &company_c).unwrap_err();
        assert!(matches!(err, RepoError::PermissionDenied { .. }));

        let unchanged = repo.get_job(job.id).unwrap().unwrap();
        assert_eq!(unchanged, job);

        repo.delete_job(job.id, &company_a).unwrap();
        assert!(repo.get_job(job.id).unwrap().is_none());
    }

    let repo = SqliteResponseRepository::try_new(&mut conn).unwrap();
    assert!(repo.list_responses_by_job(job.id).unwrap().is_empty());
    assert!(repo.get_response(response.id).unwrap().is_none());
}
