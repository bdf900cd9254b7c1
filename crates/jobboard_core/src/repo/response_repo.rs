//! Response repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `responses` table with authorship
//!   enforcement.
//! - Guarantee a response is only ever created against an existing job.
//!
//! # Invariants
//! - Company accounts never author responses.
//! - `user_id` is bound to the acting identity on create; caller-supplied
//!   author values are ignored.
//! - Create runs its job existence check and insert in one immediate
//!   transaction so a response to a concurrently deleted job cannot commit.
//! - Only `message` is mutable; `id`, `user_id` and `job_id` never change.

use crate::model::job::JobId;
use crate::model::response::{Response, ResponseDraft, ResponseId};
use crate::model::user::{Actor, UserId};
use crate::model::ValidationError;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const RESPONSE_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    job_id,
    message
FROM responses";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("responses", &["id", "user_id", "job_id", "message"]),
    ("jobs", &["id"]),
];

/// Repository interface for response operations.
pub trait ResponseRepository {
    /// Creates one response authored by the acting candidate account.
    fn create_response(&mut self, draft: &ResponseDraft, actor: &Actor) -> RepoResult<Response>;
    /// Gets one response by id.
    fn get_response(&self, id: ResponseId) -> RepoResult<Option<Response>>;
    /// Lists every response ordered by id ascending. Administrative use.
    fn list_responses(&self) -> RepoResult<Vec<Response>>;
    /// Lists responses targeting one job, in insertion order.
    fn list_responses_by_job(&self, job_id: JobId) -> RepoResult<Vec<Response>>;
    /// Lists responses authored by one candidate, in insertion order.
    fn list_responses_by_user(&self, user_id: UserId) -> RepoResult<Vec<Response>>;
    /// Overwrites the message of one response authored by the actor.
    fn update_response(&self, id: ResponseId, message: &str, actor: &Actor)
        -> RepoResult<Response>;
    /// Deletes one response authored by the actor.
    fn delete_response(&self, id: ResponseId, actor: &Actor) -> RepoResult<()>;
}

/// SQLite-backed response repository.
pub struct SqliteResponseRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteResponseRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl ResponseRepository for SqliteResponseRepository<'_> {
    fn create_response(&mut self, draft: &ResponseDraft, actor: &Actor) -> RepoResult<Response> {
        if actor.is_company {
            return Err(RepoError::PermissionDenied {
                action: "respond to a job",
                user_id: actor.id,
            });
        }
        draft.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if !job_exists_in_tx(&tx, draft.job_id)? {
            return Err(RepoError::JobNotFound(draft.job_id));
        }

        // Authorship comes from the acting identity; draft.user_id is
        // advisory input and never persisted.
        tx.execute(
            "INSERT INTO responses (user_id, job_id, message) VALUES (?1, ?2, ?3);",
            params![actor.id, draft.job_id, draft.message.as_str()],
        )?;
        let id = tx.last_insert_rowid();
        let response = load_required_response(&tx, id)?;
        tx.commit()?;

        Ok(response)
    }

    fn get_response(&self, id: ResponseId) -> RepoResult<Option<Response>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESPONSE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_response_row(row)?));
        }
        Ok(None)
    }

    fn list_responses(&self) -> RepoResult<Vec<Response>> {
        collect_responses(
            self.conn,
            &format!("{RESPONSE_SELECT_SQL} ORDER BY id ASC;"),
            &[],
        )
    }

    fn list_responses_by_job(&self, job_id: JobId) -> RepoResult<Vec<Response>> {
        collect_responses(
            self.conn,
            &format!("{RESPONSE_SELECT_SQL} WHERE job_id = ?1 ORDER BY id ASC;"),
            &[job_id],
        )
    }

    fn list_responses_by_user(&self, user_id: UserId) -> RepoResult<Vec<Response>> {
        collect_responses(
            self.conn,
            &format!("{RESPONSE_SELECT_SQL} WHERE user_id = ?1 ORDER BY id ASC;"),
            &[user_id],
        )
    }

    fn update_response(
        &self,
        id: ResponseId,
        message: &str,
        actor: &Actor,
    ) -> RepoResult<Response> {
        let existing = self
            .get_response(id)?
            .ok_or(RepoError::ResponseNotFound(id))?;
        if existing.user_id != actor.id {
            return Err(RepoError::PermissionDenied {
                action: "update this response",
                user_id: actor.id,
            });
        }
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let changed = self.conn.execute(
            "UPDATE responses SET message = ?1 WHERE id = ?2;",
            params![message, id],
        )?;
        if changed == 0 {
            return Err(RepoError::ResponseNotFound(id));
        }

        Ok(Response {
            message: message.to_string(),
            ..existing
        })
    }

    fn delete_response(&self, id: ResponseId, actor: &Actor) -> RepoResult<()> {
        let existing = self
            .get_response(id)?
            .ok_or(RepoError::ResponseNotFound(id))?;
        if existing.user_id != actor.id {
            return Err(RepoError::PermissionDenied {
                action: "delete this response",
                user_id: actor.id,
            });
        }

        self.conn
            .execute("DELETE FROM responses WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn collect_responses(conn: &Connection, sql: &str, bind: &[i64]) -> RepoResult<Vec<Response>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(bind.iter()))?;
    let mut responses = Vec::new();
    while let Some(row) = rows.next()? {
        responses.push(parse_response_row(row)?);
    }
    Ok(responses)
}

fn parse_response_row(row: &Row<'_>) -> RepoResult<Response> {
    Ok(Response {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        job_id: row.get("job_id")?,
        message: row.get("message")?,
    })
}

fn load_required_response(tx: &Transaction<'_>, id: ResponseId) -> RepoResult<Response> {
    let mut stmt = tx.prepare(&format!("{RESPONSE_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_response_row(row);
    }
    Err(RepoError::InvalidData(format!(
        "response {id} missing after write"
    )))
}

fn job_exists_in_tx(tx: &Transaction<'_>, job_id: JobId) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM jobs WHERE id = ?1);",
        [job_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
