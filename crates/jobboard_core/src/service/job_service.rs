//! Job listing use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for posting, browsing, editing and
//!   removing job listings.
//! - Delegate authorization and persistence to the repository contract.
//!
//! # Invariants
//! - List results are ordered by id ascending with a normalized limit.

use crate::model::job::{Job, JobDraft, JobId};
use crate::model::user::Actor;
use crate::repo::job_repo::{normalize_job_limit, JobListQuery, JobRepository};
use crate::repo::RepoResult;

/// Page envelope for job listings.
#[derive(Debug, Clone, PartialEq)]
pub struct JobsPage {
    /// Listings ordered by id ascending.
    pub items: Vec<Job>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
}

/// Use-case facade for job listing operations.
pub struct JobService<R: JobRepository> {
    repo: R,
}

impl<R: JobRepository> JobService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Posts one listing on behalf of the acting company account.
    pub fn post_job(&self, draft: &JobDraft, actor: &Actor) -> RepoResult<Job> {
        self.repo.create_job(draft, actor)
    }

    /// Gets one listing by id. Public read.
    pub fn get_job(&self, id: JobId) -> RepoResult<Option<Job>> {
        self.repo.get_job(id)
    }

    /// Lists listings with pagination. Public read.
    pub fn list_jobs(&self, limit: Option<u32>, offset: u32) -> RepoResult<JobsPage> {
        let applied_limit = normalize_job_limit(limit);
        let items = self.repo.list_jobs(&JobListQuery {
            limit: Some(applied_limit),
            offset,
        })?;
        Ok(JobsPage {
            items,
            applied_limit,
        })
    }

    /// Overwrites the mutable fields of one listing owned by the actor.
    pub fn update_job(&self, id: JobId, draft: &JobDraft, actor: &Actor) -> RepoResult<Job> {
        self.repo.update_job(id, draft, actor)
    }

    /// Deletes one listing owned by the actor together with its responses.
    pub fn delete_job(&mut self, id: JobId, actor: &Actor) -> RepoResult<()> {
        self.repo.delete_job(id, actor)
    }
}
