//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the user table.
///
/// Insert-or-update is split across [`Self::insert`] and [`Self::upsert`]:
/// a record without an identity is a [`NewUser`], a record with one is a
/// [`User`], so the two halves of the save operation get their own methods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every persisted user. Empty vec if none exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Inserts a new user, assigning a fresh identity.
    ///
    /// Returns the persisted representation with the identity populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces the row with the same identity, inserting it if absent.
    ///
    /// Upsert keyed by `user.id`. A row planted this way at an identity the
    /// sequence has not reached yet is a known looseness of the contract.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, user: User) -> Result<User, AppError>;

    /// Removes the row with that identity. No error if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
