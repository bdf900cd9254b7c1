//! Domain model for accounts, job listings and responses.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the store.
//! - Own input validation rules shared by every write path.
//!
//! # Invariants
//! - Record identifiers are store-assigned and never reused.
//! - A job always belongs to exactly one company account.
//! - A response always references an existing job and its authoring
//!   candidate account.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod job;
pub mod response;
pub mod user;

/// Validation failures for write-path input.
///
/// Kept as one closed enumeration so callers can map each case to a
/// boundary-level rejection without string matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Job title is empty after trimming.
    EmptyTitle,
    /// Job description is empty after trimming.
    EmptyDescription,
    /// Response message is empty after trimming.
    EmptyMessage,
    /// Account display name is empty after trimming.
    EmptyName,
    /// Email does not look like a mailbox address.
    InvalidEmail(String),
    /// Credential hash must be produced by the boundary before reaching core.
    EmptyPasswordHash,
    /// Another account already registered this email.
    DuplicateEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "job title must not be empty"),
            Self::EmptyDescription => write!(f, "job description must not be empty"),
            Self::EmptyMessage => write!(f, "response message must not be empty"),
            Self::EmptyName => write!(f, "account name must not be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::EmptyPasswordHash => write!(f, "password hash must not be empty"),
            Self::DuplicateEmail(value) => write!(f, "email already registered: `{value}`"),
        }
    }
}

impl Error for ValidationError {}
