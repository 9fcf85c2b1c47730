//! MySQL user repository.

use super::parse_uuid;
use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireloop_core::{Email, HireloopError, HireloopResult, User, UserId, UserRole};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed `users` collection.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    clerk_id: String,
    image: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = HireloopError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&row.role)
            .ok_or_else(|| HireloopError::Internal(format!("Unknown role in database: {}", row.role)))?;

        Ok(User {
            id: UserId::from(parse_uuid(&row.id)?),
            name: row.name,
            email: Email::new_unchecked(row.email),
            clerk_id: row.clerk_id,
            image: row.image,
            role,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn insert(&self, user: &User) -> HireloopResult<User> {
        debug!("Inserting user for clerk id {}", user.clerk_id);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, clerk_id, image, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.clerk_id)
        .bind(&user.image)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(self.pool.inner())
        .await?;

        Ok(user.clone())
    }

    async fn find_all(&self) -> HireloopResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, clerk_id, image, role, created_at FROM users ORDER BY seq",
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_clerk_id(&self, clerk_id: &str) -> HireloopResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, clerk_id, image, role, created_at
            FROM users
            WHERE clerk_id = ?
            "#,
        )
        .bind(clerk_id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }
}
