//! Repository trait for API token authentication.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// API token entity with metadata.
///
/// Tokens are stored as HMAC-SHA256 hashes; raw tokens are never persisted.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Repository interface for API token management.
///
/// Handles token validation, creation, and revocation for the access gate.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Validates a token hash against stored credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the token is valid and not revoked
    /// - `Ok(false)` if the token is unknown or revoked
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Updates the last_used timestamp for a token.
    ///
    /// Called after successful authentication to track token usage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a new API token.
    ///
    /// # Arguments
    ///
    /// - `name` - Human-readable token identifier
    /// - `token_hash` - HMAC-SHA256 hash of the raw token
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a token with the same name or hash
    /// already exists. Returns [`AppError::Internal`] on database errors.
    async fn create_token(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError>;

    /// Lists all tokens in the system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError>;

    /// Finds a token by its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError>;

    /// Revokes a token, preventing further authentication.
    ///
    /// Sets the `revoked_at` timestamp to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
