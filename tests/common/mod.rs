#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_registry::application::services::{AuthService, UserService, auth_service::hash_token};
use user_registry::gate::AccessPolicy;
use user_registry::infrastructure::persistence::{PgTokenRepository, PgUserRepository};
use user_registry::state::AppState;

/// HMAC key used by every test state; tokens seeded with [`seed_token`]
/// verify against it.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub async fn create_test_user(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Stores the hash of `raw_token` so requests carrying it authenticate.
pub async fn seed_token(pool: &PgPool, name: &str, raw_token: &str) {
    let token_hash = hash_token(TEST_SIGNING_SECRET, raw_token);
    sqlx::query("INSERT INTO api_tokens (name, token_hash) VALUES ($1, $2)")
        .bind(name)
        .bind(token_hash)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn revoke_all_tokens(pool: &PgPool) {
    sqlx::query("UPDATE api_tokens SET revoked_at = NOW() WHERE revoked_at IS NULL")
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repo));
    let auth_service = Arc::new(AuthService::new(
        token_repo,
        TEST_SIGNING_SECRET.to_string(),
    ));

    AppState {
        user_service,
        auth_service,
        policy: Arc::new(AccessPolicy::default_policy()),
    }
}
