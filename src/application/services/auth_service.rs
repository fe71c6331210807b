//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 under the given signing secret.
///
/// Returns a 64-character lowercase hex-encoded MAC. Shared with the admin
/// CLI so tokens minted there verify here.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating requests to gated paths via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token against stored credentials.
    ///
    /// On successful authentication, updates the `last_used` timestamp for
    /// monitoring purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - Token hash does not match any stored credentials
    /// - Token has been revoked
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let is_valid = self.repository.validate_token(&token_hash).await?;

        if !is_valid {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        }

        let _ = self.repository.update_last_used(&token_hash).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = hash_token(&test_secret(), token);

        mock_repo
            .expect_validate_token()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(true));

        mock_repo
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate(token).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_validate_token()
            .times(1)
            .returning(|_| Ok(false));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let hash1 = hash_token("secret", "test-token");
        let hash2 = hash_token("secret", "test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_different_inputs() {
        assert_ne!(hash_token("secret", "token1"), hash_token("secret", "token2"));
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        // Same token, different secrets -> different hashes
        assert_ne!(hash_token("secret-a", "token"), hash_token("secret-b", "token"));
    }
}
