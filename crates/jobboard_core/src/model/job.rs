//! Job listing domain model.
//!
//! # Responsibility
//! - Define the stored job record and the create/update input shape.
//! - Own the non-empty title/description rule applied on every write.
//!
//! # Invariants
//! - `user_id` always names the owning company account and never changes.
//! - `created_at` is set once by the store at insert.
//! - `salary_from`/`salary_to` carry no enforced ordering; write paths
//!   accept an inverted range and only log it at warn level.

use crate::model::user::UserId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned job identifier.
pub type JobId = i64;

/// Stored job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Store-assigned identifier.
    pub id: JobId,
    /// Owning company account. Immutable after creation.
    pub user_id: UserId,
    /// Listing title. Non-empty.
    pub title: String,
    /// Listing body. Non-empty.
    pub description: String,
    /// Optional lower salary bound.
    pub salary_from: Option<f64>,
    /// Optional upper salary bound.
    pub salary_to: Option<f64>,
    /// Whether the listing is currently open.
    pub is_active: bool,
    /// Epoch ms creation timestamp, set by the store.
    pub created_at: i64,
}

/// Create/update input for a job listing.
///
/// The same shape serves both paths: create binds the draft to the acting
/// company account, update overwrites the mutable columns of an existing
/// listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    /// Listing title. Must be non-empty after trimming.
    pub title: String,
    /// Listing body. Must be non-empty after trimming.
    pub description: String,
    /// Optional lower salary bound.
    pub salary_from: Option<f64>,
    /// Optional upper salary bound.
    pub salary_to: Option<f64>,
    /// Listing visibility. New listings default to open.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl JobDraft {
    /// Creates an open draft with only the required fields set.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            salary_from: None,
            salary_to: None,
            is_active: true,
        }
    }

    /// Checks the draft against listing rules.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyDescription` when required text is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Returns whether the salary bounds are present and inverted.
    ///
    /// Inverted bounds are accepted by the write paths; callers use this
    /// only for diagnostics.
    pub fn has_inverted_salary_bounds(&self) -> bool {
        matches!(
            (self.salary_from, self.salary_to),
            (Some(from), Some(to)) if from > to
        )
    }
}
