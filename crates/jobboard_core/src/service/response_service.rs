//! Response use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for submitting, browsing, editing and
//!   withdrawing responses to job listings.
//! - Delegate authorship and job existence enforcement to the repository.

use crate::model::job::JobId;
use crate::model::response::{Response, ResponseDraft, ResponseId};
use crate::model::user::{Actor, UserId};
use crate::repo::response_repo::ResponseRepository;
use crate::repo::RepoResult;

/// Use-case facade for response operations.
pub struct ResponseService<R: ResponseRepository> {
    repo: R,
}

impl<R: ResponseRepository> ResponseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Submits one response authored by the acting candidate.
    pub fn submit(&mut self, draft: &ResponseDraft, actor: &Actor) -> RepoResult<Response> {
        self.repo.create_response(draft, actor)
    }

    /// Gets one response by id.
    pub fn get_response(&self, id: ResponseId) -> RepoResult<Option<Response>> {
        self.repo.get_response(id)
    }

    /// Lists every stored response. Administrative use.
    pub fn list_all(&self) -> RepoResult<Vec<Response>> {
        self.repo.list_responses()
    }

    /// Lists responses for one job listing.
    pub fn list_for_job(&self, job_id: JobId) -> RepoResult<Vec<Response>> {
        self.repo.list_responses_by_job(job_id)
    }

    /// Lists responses authored by one candidate.
    pub fn list_by_user(&self, user_id: UserId) -> RepoResult<Vec<Response>> {
        self.repo.list_responses_by_user(user_id)
    }

    /// Replaces the message of one response authored by the actor.
    pub fn edit_message(
        &self,
        id: ResponseId,
        message: &str,
        actor: &Actor,
    ) -> RepoResult<Response> {
        self.repo.update_response(id, message, actor)
    }

    /// Withdraws one response authored by the actor.
    pub fn withdraw(&self, id: ResponseId, actor: &Actor) -> RepoResult<()> {
        self.repo.delete_response(id, actor)
    }
}
