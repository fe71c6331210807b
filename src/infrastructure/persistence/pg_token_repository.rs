//! PostgreSQL implementation of token repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

/// Row shape returned by the token queries.
#[derive(sqlx::FromRow)]
struct ApiTokenRow {
    id: i64,
    name: String,
    token_hash: String,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<ApiTokenRow> for ApiToken {
    fn from(row: ApiTokenRow) -> Self {
        ApiToken {
            id: row.id,
            name: row.name,
            token_hash: row.token_hash,
            created_at: row.created_at,
            last_used_at: row.last_used_at,
            revoked_at: row.revoked_at,
        }
    }
}

/// PostgreSQL repository for API token storage and validation.
///
/// Stores hashed tokens only. Raw tokens are never persisted.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM api_tokens
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.is_some())
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn create_token(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError> {
        let row = sqlx::query_as::<_, ApiTokenRow>(
            r#"
            INSERT INTO api_tokens (name, token_hash)
            VALUES ($1, $2)
            RETURNING id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let rows = sqlx::query_as::<_, ApiTokenRow>(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_tokens
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ApiToken::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        let row = sqlx::query_as::<_, ApiTokenRow>(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_tokens
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ApiToken::from))
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_tokens
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
