//! Core domain logic for the job-board backend.
//! This crate is the single source of truth for business invariants:
//! who may post, edit and delete job listings, and who may respond.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::job::{Job, JobDraft, JobId};
pub use model::response::{Response, ResponseDraft, ResponseId};
pub use model::user::{Actor, NewUser, User, UserId, UserUpdate};
pub use model::ValidationError;
pub use repo::job_repo::{JobListQuery, JobRepository, SqliteJobRepository};
pub use repo::response_repo::{ResponseRepository, SqliteResponseRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::account_service::AccountService;
pub use service::job_service::{JobService, JobsPage};
pub use service::response_service::ResponseService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
