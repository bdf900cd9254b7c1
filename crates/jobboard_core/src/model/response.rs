//! Job response domain model.
//!
//! # Invariants
//! - `user_id` always names the authoring candidate account.
//! - `job_id` references a job that existed when the response was created;
//!   deleting the job removes its responses in the same transaction.

use crate::model::job::JobId;
use crate::model::user::UserId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned response identifier.
pub type ResponseId = i64;

/// Stored response to a job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Store-assigned identifier.
    pub id: ResponseId,
    /// Authoring candidate account. Immutable after creation.
    pub user_id: UserId,
    /// Target job listing. Immutable after creation.
    pub job_id: JobId,
    /// Cover message. Non-empty.
    pub message: String,
}

/// Create input for a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDraft {
    /// Target job listing.
    pub job_id: JobId,
    /// Cover message. Must be non-empty after trimming.
    pub message: String,
    /// Advisory author field accepted from deserialized input. Ignored on
    /// create: authorship is always bound to the acting identity.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl ResponseDraft {
    /// Creates a draft targeting one job.
    pub fn new(job_id: JobId, message: impl Into<String>) -> Self {
        Self {
            job_id,
            message: message.into(),
            user_id: None,
        }
    }

    /// Checks the draft against response rules.
    ///
    /// # Errors
    /// - `EmptyMessage` when the cover message is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(())
    }
}
