//! Account domain model.
//!
//! # Responsibility
//! - Define the stored account record and the registration input shape.
//! - Define the acting identity handed in by the authentication boundary.
//!
//! # Invariants
//! - `email` is stored normalized to lowercase and is unique.
//! - `is_company` is immutable after registration; no role-change
//!   operation exists anywhere in core.
//! - `password_hash` is opaque to core; hashing happens at the boundary.

use crate::model::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Store-assigned account identifier.
pub type UserId = i64;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Stored account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name. Non-empty.
    pub name: String,
    /// Normalized (lowercase) unique email.
    pub email: String,
    /// Opaque credential hash produced by the boundary.
    pub password_hash: String,
    /// `true` for company accounts, `false` for candidates.
    pub is_company: bool,
    /// Epoch ms registration timestamp, set by the store.
    pub created_at: i64,
}

impl User {
    /// Returns the acting identity carried by this account.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            is_company: self.is_company,
        }
    }
}

/// Registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name. Must be non-empty after trimming.
    pub name: String,
    /// Email address; normalized before persistence.
    pub email: String,
    /// Opaque credential hash. Must be non-empty.
    pub password_hash: String,
    /// Role flag, fixed for the lifetime of the account.
    pub is_company: bool,
}

impl NewUser {
    /// Checks registration input against account rules.
    ///
    /// # Errors
    /// - `EmptyName` when the display name is blank.
    /// - `InvalidEmail` when the email does not match the mailbox shape.
    /// - `EmptyPasswordHash` when the credential hash is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let email = normalize_email(&self.email);
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        if self.password_hash.trim().is_empty() {
            return Err(ValidationError::EmptyPasswordHash);
        }
        Ok(())
    }
}

/// Profile update input.
///
/// Always applies to the acting account; the role flag is not part of the
/// shape because it never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// Replacement display name. Must be non-empty after trimming.
    pub name: String,
    /// Replacement email; normalized before persistence.
    pub email: String,
    /// Replacement credential hash. `None` keeps the stored one.
    pub password_hash: Option<String>,
}

impl UserUpdate {
    /// Checks profile update input against account rules.
    ///
    /// # Errors
    /// - `EmptyName` when the display name is blank.
    /// - `InvalidEmail` when the email does not match the mailbox shape.
    /// - `EmptyPasswordHash` when a replacement hash is given but blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let email = normalize_email(&self.email);
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        if let Some(hash) = &self.password_hash {
            if hash.trim().is_empty() {
                return Err(ValidationError::EmptyPasswordHash);
            }
        }
        Ok(())
    }
}

/// Authenticated acting identity supplied by the boundary.
///
/// Core trusts this value as given; authentication itself is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Account identifier of the caller.
    pub id: UserId,
    /// Role flag of the caller.
    pub is_company: bool,
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
