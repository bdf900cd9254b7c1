//! Account use-case service.
//!
//! # Responsibility
//! - Provide registration, lookup, listing and profile update entry
//!   points for boundary callers.
//!
//! # Invariants
//! - Credential hashing happens at the boundary; this service only ever
//!   sees opaque hashes.
//! - Role (`is_company`) is fixed at registration.
//! - Profile updates apply to the acting account only.

use crate::model::user::{Actor, NewUser, User, UserId, UserUpdate};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Use-case facade for account operations.
pub struct AccountService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers one account.
    ///
    /// # Contract
    /// - Email is validated and normalized to lowercase before storage.
    /// - A duplicate email is rejected as `Validation(DuplicateEmail)`.
    pub fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        is_company: bool,
    ) -> RepoResult<User> {
        let new_user = NewUser {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            is_company,
        };
        self.repo.create_user(&new_user)
    }

    /// Gets one account by id.
    pub fn get_account(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Finds one account by email, normalized before lookup.
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.repo.get_user_by_email(email)
    }

    /// Lists accounts with pagination, ordered by id ascending.
    pub fn list_accounts(&self, limit: Option<u32>, offset: u32) -> RepoResult<Vec<User>> {
        self.repo.list_users(limit, offset)
    }

    /// Overwrites the profile of the acting account.
    ///
    /// # Contract
    /// - Email is validated and normalized to lowercase before storage.
    /// - Claiming an email held by another account is `PermissionDenied`.
    pub fn update_profile(&self, update: &UserUpdate, actor: &Actor) -> RepoResult<User> {
        self.repo.update_user(update, actor.id)
    }
}
