use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::{UserId, UserRecord};

const UNIQUE_VIOLATION: &str = "23505";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, record), fields(user_id = %record.id))]
    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|db| db.code()) {
            Some(code) if code == UNIQUE_VIOLATION => {
                RepositoryError::ConstraintViolation(e.to_string())
            }
            _ => RepositoryError::QueryFailed(e.to_string()),
        })?;

        Ok(())
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.map(|r| UserRecord {
            id: UserId::from_uuid(r.get("id")),
            name: r.get("name"),
            email: r.get("email"),
            password_hash: r.get("password_hash"),
            created_at: r.get("created_at"),
        }))
    }
}
