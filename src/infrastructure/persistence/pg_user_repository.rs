//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Row shape returned by the user queries.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name, row.email)
    }
}

/// PostgreSQL repository for user storage and retrieval.
///
/// Uses bind parameters for SQL injection protection.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(new_user.name)
        .bind(new_user.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn upsert(&self, user: User) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, email = EXCLUDED.email
            RETURNING id, name, email
            "#,
        )
        .bind(user.id)
        .bind(user.name)
        .bind(user.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
