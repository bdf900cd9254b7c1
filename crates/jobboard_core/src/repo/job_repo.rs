//! Job repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `jobs` table with ownership enforcement.
//! - Own the cascade delete of dependent responses.
//!
//! # Invariants
//! - Only company accounts create jobs; only the owning account mutates
//!   or deletes them. Reads are public.
//! - `delete_job` removes the job and every dependent response in one
//!   immediate transaction; partial deletion is never observable.
//! - `id`, `user_id` and `created_at` are immutable after creation.

use crate::model::job::{Job, JobDraft, JobId};
use crate::model::user::Actor;
use crate::repo::{bool_to_int, ensure_connection_ready, int_to_bool, RepoError, RepoResult};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

const JOB_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    title,
    description,
    salary_from,
    salary_to,
    is_active,
    created_at
FROM jobs";

const JOBS_DEFAULT_LIMIT: u32 = 100;

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "jobs",
        &[
            "id",
            "user_id",
            "title",
            "description",
            "salary_from",
            "salary_to",
            "is_active",
            "created_at",
        ],
    ),
    ("responses", &["id", "job_id"]),
];

/// Query options for listing jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobListQuery {
    /// Maximum rows to return. Defaults to 100.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for job listing operations.
pub trait JobRepository {
    /// Creates one job bound to the acting company account.
    fn create_job(&self, draft: &JobDraft, actor: &Actor) -> RepoResult<Job>;
    /// Gets one job by id. Public read.
    fn get_job(&self, id: JobId) -> RepoResult<Option<Job>>;
    /// Lists jobs ordered by id ascending. Public read.
    fn list_jobs(&self, query: &JobListQuery) -> RepoResult<Vec<Job>>;
    /// Overwrites the mutable columns of one job owned by the actor.
    fn update_job(&self, id: JobId, draft: &JobDraft, actor: &Actor) -> RepoResult<Job>;
    /// Deletes one job owned by the actor together with its responses.
    fn delete_job(&mut self, id: JobId, actor: &Actor) -> RepoResult<()>;
}

/// SQLite-backed job repository.
pub struct SqliteJobRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteJobRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl JobRepository for SqliteJobRepository<'_> {
    fn create_job(&self, draft: &JobDraft, actor: &Actor) -> RepoResult<Job> {
        if !actor.is_company {
            return Err(RepoError::PermissionDenied {
                action: "create a job",
                user_id: actor.id,
            });
        }
        draft.validate()?;
        warn_on_inverted_salary(draft, "job_create");

        self.conn.execute(
            "INSERT INTO jobs (
                user_id,
                title,
                description,
                salary_from,
                salary_to,
                is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                actor.id,
                draft.title.as_str(),
                draft.description.as_str(),
                draft.salary_from,
                draft.salary_to,
                bool_to_int(draft.is_active),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        load_required_job(self.conn, id)
    }

    fn get_job(&self, id: JobId) -> RepoResult<Option<Job>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{JOB_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_job_row(row)?));
        }
        Ok(None)
    }

    fn list_jobs(&self, query: &JobListQuery) -> RepoResult<Vec<Job>> {
        let limit = normalize_job_limit(query.limit);
        let mut stmt = self.conn.prepare(&format!(
            "{JOB_SELECT_SQL} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let mut rows = stmt.query(params![i64::from(limit), i64::from(query.offset)])?;

        let mut jobs = Vec::new();
        while let Some(row) = rows.next()? {
            jobs.push(parse_job_row(row)?);
        }
        Ok(jobs)
    }

    fn update_job(&self, id: JobId, draft: &JobDraft, actor: &Actor) -> RepoResult<Job> {
        let job = self.get_job(id)?.ok_or(RepoError::JobNotFound(id))?;
        if job.user_id != actor.id {
            return Err(RepoError::PermissionDenied {
                action: "update this job",
                user_id: actor.id,
            });
        }
        draft.validate()?;
        warn_on_inverted_salary(draft, "job_update");

        // id, user_id and created_at are intentionally absent from the SET list.
        let changed = self.conn.execute(
            "UPDATE jobs
             SET
                title = ?1,
                description = ?2,
                salary_from = ?3,
                salary_to = ?4,
                is_active = ?5
             WHERE id = ?6;",
            params![
                draft.title.as_str(),
                draft.description.as_str(),
                draft.salary_from,
                draft.salary_to,
                bool_to_int(draft.is_active),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::JobNotFound(id));
        }

        load_required_job(self.conn, id)
    }

    fn delete_job(&mut self, id: JobId, actor: &Actor) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let owner = tx
            .query_row("SELECT user_id FROM jobs WHERE id = ?1;", [id], |row| {
                row.get::<_, i64>(0)
            })
            .optional()?
            .ok_or(RepoError::JobNotFound(id))?;
        if owner != actor.id {
            return Err(RepoError::PermissionDenied {
                action: "delete this job",
                user_id: actor.id,
            });
        }

        // Responses go first; the jobs row is still referenced until then.
        let responses_deleted = tx.execute("DELETE FROM responses WHERE job_id = ?1;", [id])?;
        tx.execute("DELETE FROM jobs WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=job_delete module=repo status=ok job_id={id} responses_deleted={responses_deleted}"
        );
        Ok(())
    }
}

/// Normalizes a job list limit to the documented default.
pub fn normalize_job_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => JOBS_DEFAULT_LIMIT,
        Some(value) => value,
    }
}

fn warn_on_inverted_salary(draft: &JobDraft, operation: &str) {
    // Inverted bounds are accepted to preserve existing behavior; surface
    // them in diagnostics so the gap stays visible.
    if draft.has_inverted_salary_bounds() {
        warn!(
            "event={operation} module=repo status=warn reason=salary_bounds_inverted salary_from={:?} salary_to={:?}",
            draft.salary_from, draft.salary_to
        );
    }
}

fn load_required_job(conn: &Connection, id: JobId) -> RepoResult<Job> {
    let mut stmt = conn.prepare(&format!("{JOB_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_job_row(row);
    }
    Err(RepoError::InvalidData(format!(
        "job {id} missing after write"
    )))
}

fn parse_job_row(row: &Row<'_>) -> RepoResult<Job> {
    let is_active = int_to_bool(row.get("is_active")?, "jobs.is_active")?;
    Ok(Job {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        salary_from: row.get("salary_from")?,
        salary_to: row.get("salary_to")?,
        is_active,
        created_at: row.get("created_at")?,
    })
}
